//! SHA-256d hashing and the 256-bit hash value type
//!
//! Hashes are stored in internal (little-endian) byte order, exactly as produced by
//! the digest. Hex text uses display order (reversed), matching how block and
//! transaction hashes are written in literals.

use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;

/// 32-byte hash in internal byte order
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    /// Null hash (used as the genesis previous-block reference)
    pub const fn zero() -> Self {
        Hash256([0u8; 32])
    }

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Hash256(bytes)
    }

    /// Parse a display-order hex literal.
    ///
    /// Accepts an optional `0x` prefix and fewer than 64 digits (left-padded with
    /// zeros), so `"0x0"` parses to the null hash.
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let trimmed = hex.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        if digits.is_empty() || digits.len() > 64 {
            return Err(hex::FromHexError::InvalidStringLength);
        }

        let padded = format!("{:0>64}", digits);
        let mut arr = [0u8; 32];
        hex::decode_to_slice(&padded, &mut arr)?;
        arr.reverse();
        Ok(Hash256(arr))
    }

    /// Display-order hex
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_be_bytes())
    }

    /// Bytes in big-endian numeric order (display order)
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut bytes = self.0;
        bytes.reverse();
        bytes
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self.to_hex())
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for Hash256 {
    fn default() -> Self {
        Self::zero()
    }
}

impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// SHA-256 applied twice
pub fn sha256d(data: &[u8]) -> Hash256 {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    Hash256(second.into())
}

/// Hash two hashes together (for Merkle tree)
pub fn hash_pair(left: &Hash256, right: &Hash256) -> Hash256 {
    let mut data = [0u8; 64];
    data[..32].copy_from_slice(&left.0);
    data[32..].copy_from_slice(&right.0);
    sha256d(&data)
}
