//! Error types for chain parameter construction and selection

use std::fmt;

use thiserror::Error;

use crate::chainparams::Network;
use crate::crypto::Hash256;

/// Which genesis value failed verification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenesisField {
    BlockHash,
    MerkleRoot,
}

impl fmt::Display for GenesisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenesisField::BlockHash => f.write_str("block hash"),
            GenesisField::MerkleRoot => f.write_str("merkle root"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ChainParamsError {
    /// Computed genesis value differs from the hard-coded literal.
    #[error("{network}: genesis {field} mismatch (computed {computed}, expected {expected})")]
    GenesisMismatch {
        network: Network,
        field: GenesisField,
        computed: Hash256,
        expected: Hash256,
    },

    #[error("{network}: invalid parameters: {reason}")]
    InvalidParameters { network: Network, reason: String },

    #[error("{network}: invalid {which} public key")]
    InvalidKey { network: Network, which: &'static str },

    #[error("unknown network {0:?}")]
    UnknownNetwork(String),

    #[error("no network selected")]
    NoNetworkSelected,

    #[error("parameter registry already initialized")]
    AlreadyInitialized,

    #[error("parameter registry not initialized")]
    RegistryNotInitialized,

    #[error("invalid hex literal: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

pub type Result<T> = std::result::Result<T, ChainParamsError>;
