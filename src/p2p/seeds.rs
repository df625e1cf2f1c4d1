//! Seed Node Configuration
//!
//! Bootstrap peers a fresh node contacts to discover the rest of the network:
//! DNS seeds resolved at connect time and fixed `host:port` entries.

use serde::Serialize;
use std::net::SocketAddr;

/// One bootstrap entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SeedSpec {
    /// DNS seed: a display name and the host queried for peer addresses
    Dns { name: String, host: String },
    /// Fixed peer address
    Fixed { addr: SocketAddr },
}

impl SeedSpec {
    pub fn dns(name: &str, host: &str) -> Self {
        SeedSpec::Dns {
            name: name.to_string(),
            host: host.to_string(),
        }
    }

    /// Parse a fixed `ip:port` seed
    pub fn fixed(seed: &str) -> Option<Self> {
        parse_seed(seed).map(|addr| SeedSpec::Fixed { addr })
    }
}

/// Parse seed address to SocketAddr
pub fn parse_seed(seed: &str) -> Option<SocketAddr> {
    seed.parse().ok()
}

/// Fixed seeds as socket addresses (DNS seeds need resolution and are skipped)
pub fn fixed_seed_addresses(seeds: &[SeedSpec]) -> Vec<SocketAddr> {
    seeds
        .iter()
        .filter_map(|seed| match seed {
            SeedSpec::Fixed { addr } => Some(*addr),
            SeedSpec::Dns { .. } => None,
        })
        .collect()
}

/// DNS seed hosts to query
pub fn dns_seed_hosts(seeds: &[SeedSpec]) -> Vec<&str> {
    seeds
        .iter()
        .filter_map(|seed| match seed {
            SeedSpec::Dns { host, .. } => Some(host.as_str()),
            SeedSpec::Fixed { .. } => None,
        })
        .collect()
}
