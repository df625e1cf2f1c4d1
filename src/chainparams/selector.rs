//! Active network selection
//!
//! A [`NetworkSelector`] starts unselected. `select` moves it to a chosen
//! network and tells the base-parameter collaborator about the choice.

use tracing::{info, warn};

use super::{Network, NetworkParameterSet, ParameterRegistry};
use crate::error::{ChainParamsError, Result};

/// Collaborator holding network-dependent settings outside the consensus
/// parameters (data directory, RPC port).
pub trait BaseParamsSelector {
    fn select_base(&self, network: Network);
}

/// Base selector for hosts that keep no base parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBaseParams;

impl BaseParamsSelector for NoBaseParams {
    fn select_base(&self, _network: Network) {}
}

/// Explicit selection context over a registry
pub struct NetworkSelector<'r, B = NoBaseParams> {
    registry: &'r ParameterRegistry,
    base: B,
    active: Option<Network>,
}

impl<'r> NetworkSelector<'r> {
    pub fn new(registry: &'r ParameterRegistry) -> Self {
        Self::with_base(registry, NoBaseParams)
    }
}

impl<'r, B: BaseParamsSelector> NetworkSelector<'r, B> {
    pub fn with_base(registry: &'r ParameterRegistry, base: B) -> Self {
        Self {
            registry,
            base,
            active: None,
        }
    }

    /// Select the network called `name`.
    ///
    /// An unknown name leaves the current selection untouched. Selecting again
    /// replaces the previous choice.
    pub fn select(&mut self, name: &str) -> Result<&'r NetworkParameterSet> {
        let params = self.registry.get(name)?;
        let network = params.network;

        self.base.select_base(network);
        match self.active.replace(network) {
            Some(previous) if previous != network => {
                warn!(%previous, %network, "active network changed after initial selection");
            }
            _ => info!(%network, "selected chain parameters"),
        }

        Ok(params)
    }

    /// Parameters of the selected network
    pub fn active(&self) -> Result<&'r NetworkParameterSet> {
        self.active
            .map(|network| self.registry.for_network(network))
            .ok_or(ChainParamsError::NoNetworkSelected)
    }

    pub fn active_network(&self) -> Option<Network> {
        self.active
    }

    pub fn registry(&self) -> &'r ParameterRegistry {
        self.registry
    }
}
