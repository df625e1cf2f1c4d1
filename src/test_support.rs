//! Genesis header fixture shared by unit and integration tests
//!
//! The production PoW hash (X11) is supplied by the node. Tests stand in for it
//! with the known genesis digest, which still pins the exact header bytes.
#![allow(dead_code)]

use aeris_chainparams::consensus::{HeaderHasher, HEADER_SIZE};
use aeris_chainparams::crypto::{sha256d, Hash256};

/// Serialized genesis header shared by all networks
pub const GENESIS_HEADER_HEX: &str = "010000000000000000000000000000000000000000000000000000000000000000000000e495c2293c2f705cbfc8482f07869ea702a94d559b8b6f38c276378effa299177f8d785af0ff0f1eb1432500";

/// X11 digest of [`GENESIS_HEADER_HEX`]
pub const GENESIS_HASH_HEX: &str =
    "00000ac3b982c0b616ae1a4188c1222c340979d3c69bdeffcd757c40037ef607";

pub const GENESIS_MERKLE_ROOT_HEX: &str =
    "1799a2ff8e3776c2386f8b9b554da902a79e86072f48c8bf5c702f3c29c295e4";

/// Returns the known digest for the genesis header, SHA-256d for anything else
pub struct GenesisFixtureHasher;

impl HeaderHasher for GenesisFixtureHasher {
    fn hash_header(&self, header: &[u8; HEADER_SIZE]) -> Hash256 {
        if hex::encode(header) == GENESIS_HEADER_HEX {
            Hash256::from_hex(GENESIS_HASH_HEX).unwrap()
        } else {
            sha256d(header)
        }
    }
}
