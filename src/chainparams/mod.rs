//! Chain parameters - per-network constants, the registry and network selection

mod address;
mod checkpoints;
pub mod global;
mod identity;
mod network;
mod networks;
mod params;
mod registry;
mod selector;

pub use address::*;
pub use checkpoints::*;
pub use identity::*;
pub use network::*;
pub use networks::*;
pub use params::*;
pub use registry::*;
pub use selector::*;

pub use global::{active_parameters, init_registry, parameters_for, select_network};
