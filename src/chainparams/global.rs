//! Process-wide parameter access
//!
//! For collaborators that cannot be handed a [`NetworkSelector`]. The registry
//! is installed exactly once; reads before installation or before a network is
//! selected fail instead of falling back to a default.
//!
//! [`NetworkSelector`]: super::NetworkSelector

use std::sync::{OnceLock, PoisonError, RwLock};

use tracing::{info, warn};

use super::{BaseParamsSelector, Network, NetworkParameterSet, NoBaseParams, ParameterRegistry};
use crate::consensus::HeaderHasher;
use crate::error::{ChainParamsError, Result};

struct GlobalParams {
    registry: ParameterRegistry,
    base: Box<dyn BaseParamsSelector + Send + Sync>,
}

static GLOBAL: OnceLock<GlobalParams> = OnceLock::new();
static ACTIVE: RwLock<Option<Network>> = RwLock::new(None);

/// Build and install the registry. A second call fails with `AlreadyInitialized`.
pub fn init_registry<H: HeaderHasher + ?Sized>(hasher: &H) -> Result<&'static ParameterRegistry> {
    init_registry_with_base(hasher, NoBaseParams)
}

pub fn init_registry_with_base<H, B>(hasher: &H, base: B) -> Result<&'static ParameterRegistry>
where
    H: HeaderHasher + ?Sized,
    B: BaseParamsSelector + Send + Sync + 'static,
{
    if GLOBAL.get().is_some() {
        return Err(ChainParamsError::AlreadyInitialized);
    }

    let built = ParameterRegistry::new(hasher)?;
    GLOBAL
        .set(GlobalParams {
            registry: built,
            base: Box::new(base),
        })
        .map_err(|_| ChainParamsError::AlreadyInitialized)?;

    registry()
}

pub fn registry() -> Result<&'static ParameterRegistry> {
    global().map(|g| &g.registry)
}

/// Parameters of any network, selected or not
pub fn parameters_for(name: &str) -> Result<&'static NetworkParameterSet> {
    registry()?.get(name)
}

/// Make `name` the active network
pub fn select_network(name: &str) -> Result<()> {
    let global = global()?;
    let network = global.registry.get(name)?.network;

    global.base.select_base(network);

    let mut active = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
    match active.replace(network) {
        Some(previous) if previous != network => {
            warn!(%previous, %network, "active network changed after initial selection");
        }
        _ => info!(%network, "selected chain parameters"),
    }
    Ok(())
}

/// Parameters of the active network
pub fn active_parameters() -> Result<&'static NetworkParameterSet> {
    let global = global()?;
    let active = *ACTIVE.read().unwrap_or_else(PoisonError::into_inner);
    active
        .map(|network| global.registry.for_network(network))
        .ok_or(ChainParamsError::NoNetworkSelected)
}

fn global() -> Result<&'static GlobalParams> {
    GLOBAL.get().ok_or(ChainParamsError::RegistryNotInitialized)
}
