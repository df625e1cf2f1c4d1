//! Read-only catalog of the three network parameter sets

use tracing::info;

use super::{parameter_table, Network, NetworkParameterSet};
use crate::consensus::HeaderHasher;
use crate::error::Result;

/// Owns the validated parameters for every known network
#[derive(Debug)]
pub struct ParameterRegistry {
    main: NetworkParameterSet,
    test: NetworkParameterSet,
    regtest: NetworkParameterSet,
}

impl ParameterRegistry {
    /// Build and verify all three networks.
    ///
    /// Fails on the first network whose genesis block or parameters do not check
    /// out; the node must not start in that case.
    pub fn new<H: HeaderHasher + ?Sized>(hasher: &H) -> Result<Self> {
        let build = |network| NetworkParameterSet::from_table(parameter_table(network)?, hasher);

        let registry = Self {
            main: build(Network::Main)?,
            test: build(Network::Test)?,
            regtest: build(Network::Regtest)?,
        };

        for params in registry.iter() {
            info!(
                network = %params.network,
                genesis = %params.genesis_hash(),
                port = params.default_port(),
                "chain parameters ready"
            );
        }

        Ok(registry)
    }

    /// Look up a network by name
    pub fn get(&self, name: &str) -> Result<&NetworkParameterSet> {
        Ok(self.for_network(name.parse()?))
    }

    pub fn for_network(&self, network: Network) -> &NetworkParameterSet {
        match network {
            Network::Main => &self.main,
            Network::Test => &self.test,
            Network::Regtest => &self.regtest,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &NetworkParameterSet> {
        Network::ALL.into_iter().map(|network| self.for_network(network))
    }
}
