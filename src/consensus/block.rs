//! Block structure
//!
//! The 80-byte header layout is consensus-critical: the PoW hash and every
//! hard-coded block hash are computed over exactly these bytes.

use serde::Serialize;

use super::Transaction;
use crate::crypto::{compute_merkle_root, sha256d, Hash256};

/// Serialized header size in bytes
pub const HEADER_SIZE: usize = 80;

/// Block header hash function.
///
/// The PoW hash is owned by the host node (this chain uses X11), so it is
/// injected rather than fixed here.
pub trait HeaderHasher {
    fn hash_header(&self, header: &[u8; HEADER_SIZE]) -> Hash256;
}

/// SHA-256d header hashing
///
/// Not the Aeris PoW hash: a registry built with it fails genesis verification.
/// Meant for tooling and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256dHasher;

impl HeaderHasher for Sha256dHasher {
    fn hash_header(&self, header: &[u8; HEADER_SIZE]) -> Hash256 {
        sha256d(header)
    }
}

/// Block header containing all metadata
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BlockHeader {
    pub version: i32,
    /// Hash of the previous block
    pub prev_hash: Hash256,
    /// Merkle root of all transactions
    pub merkle_root: Hash256,
    /// Block timestamp (seconds since Unix epoch)
    pub time: u32,
    /// Difficulty target (compact representation)
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    /// Serialize the header for hashing
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.version.to_le_bytes());
        bytes[4..36].copy_from_slice(self.prev_hash.as_bytes());
        bytes[36..68].copy_from_slice(self.merkle_root.as_bytes());
        bytes[68..72].copy_from_slice(&self.time.to_le_bytes());
        bytes[72..76].copy_from_slice(&self.bits.to_le_bytes());
        bytes[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        bytes
    }

    pub fn hash_with<H: HeaderHasher + ?Sized>(&self, hasher: &H) -> Hash256 {
        hasher.hash_header(&self.to_bytes())
    }
}

/// A complete block containing header and transactions
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

impl Block {
    pub fn new(header: BlockHeader, transactions: Vec<Transaction>) -> Self {
        Self {
            header,
            transactions,
        }
    }

    pub fn hash_with<H: HeaderHasher + ?Sized>(&self, hasher: &H) -> Hash256 {
        self.header.hash_with(hasher)
    }

    /// Merkle root recomputed from the transactions
    pub fn compute_merkle_root(&self) -> Hash256 {
        let txids: Vec<Hash256> = self.transactions.iter().map(Transaction::txid).collect();
        compute_merkle_root(&txids)
    }

    /// Check if this is the genesis block
    pub fn is_genesis(&self) -> bool {
        self.header.prev_hash.is_zero()
    }
}
