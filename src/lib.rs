//! Aeris chain parameters
//!
//! Declares the consensus constants, network identity, address prefixes,
//! checkpoints and genesis block of every Aeris network, verifies each genesis
//! block against its hard-coded hash, and tracks which network is active.
//!
//! ```no_run
//! use aeris_chainparams::chainparams::{NetworkSelector, ParameterRegistry};
//! # fn run(hasher: &dyn aeris_chainparams::consensus::HeaderHasher) -> aeris_chainparams::Result<()> {
//! let registry = ParameterRegistry::new(hasher)?;
//! let mut selector = NetworkSelector::new(&registry);
//! selector.select("main")?;
//! assert_eq!(selector.active()?.default_port(), 23100);
//! # Ok(())
//! # }
//! ```

// Lets the test fixture name the crate the same way from unit and integration tests
extern crate self as aeris_chainparams;

pub mod chainparams;
pub mod consensus;
pub mod crypto;
pub mod error;
pub mod genesis;
pub mod p2p;

#[cfg(test)]
mod test_support;

pub use error::{ChainParamsError, Result};

/// Amount in base units
pub type Amount = i64;

/// Protocol constants - HARD-CODED, NEVER CONFIGURABLE
pub mod constants {
    use crate::Amount;

    /// Base units per coin (8 decimal places)
    pub const COIN: Amount = 100_000_000;

    /// Largest data element a script may push
    pub const MAX_SCRIPT_ELEMENT_SIZE: usize = 520;

    /// Number of decimal places
    pub const DECIMAL_PLACES: u8 = 8;
}
