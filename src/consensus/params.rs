//! Consensus rule parameters
//!
//! Every node on a network must agree on these values to stay in consensus.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::chainparams::Network;
use crate::crypto::Hash256;
use crate::error::{ChainParamsError, Result};

/// Highest version bit usable by a soft-fork deployment
pub const MAX_DEPLOYMENT_BIT: u8 = 28;

/// Soft-fork deployments signalled through version bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentId {
    TestDummy,
    Csv,
}

impl DeploymentId {
    pub const ALL: [DeploymentId; 2] = [DeploymentId::TestDummy, DeploymentId::Csv];

    pub fn name(self) -> &'static str {
        match self {
            DeploymentId::TestDummy => "testdummy",
            DeploymentId::Csv => "csv",
        }
    }
}

impl fmt::Display for DeploymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A version-bits deployment window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SoftForkDeployment {
    /// Version bit position (0..=28)
    pub bit: u8,
    /// Start of signalling, epoch seconds
    pub start_time: i64,
    /// Signalling deadline, epoch seconds
    pub timeout: i64,
}

impl SoftForkDeployment {
    /// Start time marking a deployment that never signals
    pub const DISABLED: i64 = -1;

    pub const fn new(bit: u8, start_time: i64, timeout: i64) -> Self {
        Self {
            bit,
            start_time,
            timeout,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.start_time != Self::DISABLED
    }

    /// Version-field mask for this deployment's bit, zero if the bit does not fit
    pub fn mask(&self) -> u32 {
        1u32.checked_shl(self.bit.into()).unwrap_or(0)
    }
}

/// Per-network consensus parameters
#[derive(Debug, Clone, Serialize)]
pub struct ConsensusParams {
    /// `None` means the subsidy never halves
    pub subsidy_halving_interval: Option<u32>,
    pub masternode_payments_start_block: u32,
    pub masternode_payments_increase_block: Option<u32>,
    pub masternode_payments_increase_period: Option<u32>,
    pub instant_send_keep_lock: u32,
    pub budget_payments_start_block: u32,
    pub budget_payments_cycle_blocks: u32,
    pub budget_payments_window_blocks: u32,
    /// Seconds
    pub budget_proposal_establishing_time: i64,
    pub superblock_start_block: u32,
    pub superblock_cycle: u32,
    pub governance_min_quorum: u32,
    pub governance_filter_elements: u32,
    pub masternode_minimum_confirmations: u32,

    // Legacy majority upgrade voting
    pub majority_enforce_block_upgrade: u32,
    pub majority_reject_block_outdated: u32,
    pub majority_window: u32,

    /// `None` when BIP34 is not scheduled
    pub bip34_height: Option<u32>,
    pub bip34_hash: Hash256,

    pub pow_limit: Hash256,
    /// Seconds
    pub pow_target_timespan: i64,
    /// Seconds
    pub pow_target_spacing: i64,
    pub pow_allow_min_difficulty_blocks: bool,
    pub pow_no_retargeting: bool,

    /// Blocks within a confirmation window that must signal for a rule change
    pub rule_activation_threshold: u32,
    pub confirmation_window: u32,
    pub deployments: BTreeMap<DeploymentId, SoftForkDeployment>,

    /// Filled in once the genesis block has been built and verified
    pub genesis_hash: Hash256,
}

impl ConsensusParams {
    /// Blocks between difficulty retargets
    pub fn difficulty_adjustment_interval(&self) -> i64 {
        self.pow_target_timespan / self.pow_target_spacing
    }

    pub fn deployment(&self, id: DeploymentId) -> Option<&SoftForkDeployment> {
        self.deployments.get(&id)
    }

    /// Check internal consistency of the literal values
    pub fn validate(&self, network: Network) -> Result<()> {
        let invalid = |reason: String| ChainParamsError::InvalidParameters { network, reason };

        if self.pow_target_spacing <= 0 || self.pow_target_timespan <= 0 {
            return Err(invalid("pow target timespan and spacing must be positive".into()));
        }

        if self.rule_activation_threshold > self.confirmation_window {
            return Err(invalid(format!(
                "rule activation threshold {} exceeds confirmation window {}",
                self.rule_activation_threshold, self.confirmation_window
            )));
        }

        if self.majority_enforce_block_upgrade > self.majority_reject_block_outdated
            || self.majority_reject_block_outdated > self.majority_window
        {
            return Err(invalid(format!(
                "majority thresholds {}/{} inconsistent with window {}",
                self.majority_enforce_block_upgrade,
                self.majority_reject_block_outdated,
                self.majority_window
            )));
        }

        for (id, deployment) in &self.deployments {
            if deployment.bit > MAX_DEPLOYMENT_BIT {
                return Err(invalid(format!("deployment {} uses bit {}", id, deployment.bit)));
            }
            if deployment.is_enabled() && deployment.start_time >= deployment.timeout {
                return Err(invalid(format!(
                    "deployment {} starts at {} but times out at {}",
                    id, deployment.start_time, deployment.timeout
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ConsensusParams {
        ConsensusParams {
            subsidy_halving_interval: None,
            masternode_payments_start_block: 1,
            masternode_payments_increase_block: None,
            masternode_payments_increase_period: None,
            instant_send_keep_lock: 6,
            budget_payments_start_block: 1,
            budget_payments_cycle_blocks: 10,
            budget_payments_window_blocks: 5,
            budget_proposal_establishing_time: 60,
            superblock_start_block: 1,
            superblock_cycle: 10,
            governance_min_quorum: 1,
            governance_filter_elements: 100,
            masternode_minimum_confirmations: 1,
            majority_enforce_block_upgrade: 75,
            majority_reject_block_outdated: 95,
            majority_window: 100,
            bip34_height: None,
            bip34_hash: Hash256::zero(),
            pow_limit: Hash256::zero(),
            pow_target_timespan: 3600,
            pow_target_spacing: 120,
            pow_allow_min_difficulty_blocks: false,
            pow_no_retargeting: false,
            rule_activation_threshold: 8,
            confirmation_window: 10,
            deployments: BTreeMap::from([(DeploymentId::Csv, SoftForkDeployment::new(0, 10, 20))]),
            genesis_hash: Hash256::zero(),
        }
    }

    #[test]
    fn test_valid_params_pass() {
        let params = params();
        assert!(params.validate(Network::Regtest).is_ok());
        assert_eq!(params.difficulty_adjustment_interval(), 30);
    }

    #[test]
    fn test_threshold_above_window_rejected() {
        let mut params = params();
        params.rule_activation_threshold = 11;
        assert!(matches!(
            params.validate(Network::Main),
            Err(ChainParamsError::InvalidParameters { network: Network::Main, .. })
        ));
    }

    #[test]
    fn test_deployment_window_must_be_ordered() {
        let mut params = params();
        params
            .deployments
            .insert(DeploymentId::TestDummy, SoftForkDeployment::new(28, 20, 20));
        assert!(params.validate(Network::Test).is_err());

        // Disabled deployments are not checked
        params.deployments.insert(
            DeploymentId::TestDummy,
            SoftForkDeployment::new(28, SoftForkDeployment::DISABLED, 0),
        );
        assert!(params.validate(Network::Test).is_ok());
    }

    #[test]
    fn test_deployment_bit_range() {
        let mut params = params();
        params
            .deployments
            .insert(DeploymentId::TestDummy, SoftForkDeployment::new(29, 0, 1));
        assert!(params.validate(Network::Test).is_err());
        assert_eq!(SoftForkDeployment::new(28, 0, 1).mask(), 0x1000_0000);
        assert_eq!(SoftForkDeployment::new(40, 0, 1).mask(), 0);
    }

    #[test]
    fn test_majority_thresholds_checked() {
        let mut params = params();
        params.majority_reject_block_outdated = 101;
        assert!(params.validate(Network::Main).is_err());
    }
}
