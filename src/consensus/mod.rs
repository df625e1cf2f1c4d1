//! Consensus module - block and transaction structure, difficulty encoding, rule parameters

mod block;
mod difficulty;
mod params;
mod script;
mod transaction;

pub use block::*;
pub use difficulty::*;
pub use params::*;
pub use script::*;
pub use transaction::*;
