//! Peer bootstrap data

mod seeds;

pub use seeds::*;
