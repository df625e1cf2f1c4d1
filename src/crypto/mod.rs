//! Cryptography module - SHA-256d hashing, Merkle roots, public key checks

mod hash;
mod keys;
mod merkle;

pub use hash::*;
pub use keys::*;
pub use merkle::*;
