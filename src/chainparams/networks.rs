//! Literal parameter tables for main, test and regtest
//!
//! These values are consensus-critical. Changing any of them forks the node off
//! its network.

use std::collections::BTreeMap;

use super::{
    AddressPrefixTable, CheckpointSet, GenesisSpec, Network, NetworkIdentity, OperationalFlags,
    ParameterTable,
};
use crate::consensus::{ConsensusParams, DeploymentId, SoftForkDeployment};
use crate::constants::COIN;
use crate::crypto::Hash256;
use crate::error::{ChainParamsError, Result};
use crate::genesis::{GENESIS_MESSAGE, GENESIS_OUTPUT_PUBKEY};

const GENESIS_HASH: &str = "0x00000ac3b982c0b616ae1a4188c1222c340979d3c69bdeffcd757c40037ef607";
const GENESIS_MERKLE_ROOT: &str = "0x1799a2ff8e3776c2386f8b9b554da902a79e86072f48c8bf5c702f3c29c295e4";
const GENESIS_TIME: u32 = 1517849983;

const POW_LIMIT: &str = "00000fffff000000000000000000000000000000000000000000000000000000";

const MAIN_SPORK_KEY: &str = "046dac102bd50159b19640d07f8fa3618b1531a10d8bada1ec00361e5f0a2c9805d927a0c82d408db6f589683d4291fadeef20ab59b255279ff99fe88b78ee5c71";
const TEST_SPORK_KEY: &str = "04d2b954a7d4d5f69338cc41d59b59d2b022682b849272b8d0b354ea63cb9771493619ae3ecfc94719c05aeb2ac8f80ba1d546fe40562c5ce1de61089f5db4546d";

fn hash(literal: &str) -> Result<Hash256> {
    Ok(Hash256::from_hex(literal)?)
}

/// All three networks share one genesis block
fn genesis_spec() -> Result<GenesisSpec> {
    Ok(GenesisSpec {
        message: GENESIS_MESSAGE,
        output_pubkey: GENESIS_OUTPUT_PUBKEY,
        time: GENESIS_TIME,
        nonce: 2442161,
        bits: 0x1e0ffff0,
        version: 1,
        reward: 50 * COIN,
        expected_hash: hash(GENESIS_HASH)?,
        expected_merkle_root: hash(GENESIS_MERKLE_ROOT)?,
    })
}

fn genesis_checkpoints(network: Network) -> Result<CheckpointSet> {
    CheckpointSet::new(&[(0, hash(GENESIS_HASH)?)], GENESIS_TIME as i64, 0, 500.0).map_err(
        |height| ChainParamsError::InvalidParameters {
            network,
            reason: format!("checkpoint {} out of order", height),
        },
    )
}

fn deployments(
    dummy: (i64, i64),
    csv: (i64, i64),
) -> BTreeMap<DeploymentId, SoftForkDeployment> {
    BTreeMap::from([
        (DeploymentId::TestDummy, SoftForkDeployment::new(28, dummy.0, dummy.1)),
        (DeploymentId::Csv, SoftForkDeployment::new(0, csv.0, csv.1)),
    ])
}

fn public_key(literal: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(literal)?)
}

/// Literal table for a network
pub fn parameter_table(network: Network) -> Result<ParameterTable> {
    match network {
        Network::Main => main_table(),
        Network::Test => test_table(),
        Network::Regtest => regtest_table(),
    }
}

pub fn main_table() -> Result<ParameterTable> {
    let consensus = ConsensusParams {
        subsidy_halving_interval: Some(262800),
        masternode_payments_start_block: 322,
        masternode_payments_increase_block: None,
        masternode_payments_increase_period: None,
        instant_send_keep_lock: 94,
        budget_payments_start_block: 65123,
        budget_payments_cycle_blocks: 64800,
        budget_payments_window_blocks: 390,
        budget_proposal_establishing_time: 60 * 60 * 24,
        // Effectively never (year 10000+)
        superblock_start_block: 2100000000,
        superblock_cycle: 64800,
        governance_min_quorum: 10,
        governance_filter_elements: 20000,
        masternode_minimum_confirmations: 20,
        majority_enforce_block_upgrade: 750,
        majority_reject_block_outdated: 950,
        majority_window: 3900,
        bip34_height: None,
        bip34_hash: hash("0x000000000000024b89b42a942fe0d9fea3bb44ab7bd1b19115dd6a759c0808b8")?,
        pow_limit: hash(POW_LIMIT)?,
        // 30 blocks
        pow_target_timespan: 30 * 2 * 60,
        pow_target_spacing: 2 * 60,
        pow_allow_min_difficulty_blocks: false,
        pow_no_retargeting: false,
        rule_activation_threshold: 1916,
        confirmation_window: 2016,
        deployments: deployments((1199145601, 1230767999), (1486252800, 1517788800)),
        genesis_hash: Hash256::zero(),
    };

    Ok(ParameterTable {
        network: Network::Main,
        consensus,
        network_identity: NetworkIdentity {
            message_start: [0x4c, 0x61, 0xc5, 0x11],
            default_port: 23100,
            max_tip_age: 11520,
            prune_after_height: 100000,
            alert_pubkey: Some(public_key("041e203913367e77bf815454639a688aeb44802f5b58f8657b34f6349a90410457f1b244a3c208db8d5cd2a12007aab5c40b593f2cfd3c25b4e03dcb8516d2b8c6")?),
        },
        address_prefixes: AddressPrefixTable {
            // 'A'
            pubkey_address: vec![23],
            // 'S'
            script_address: vec![63],
            // 'Y' or 'Z'
            secret_key: vec![79],
            // xpub
            ext_public_key: vec![0x04, 0x88, 0xb2, 0x1e],
            // xprv
            ext_secret_key: vec![0x04, 0x88, 0xad, 0xe4],
            // Coin type 5. The registered SLIP-44 value differs; moving to it changes
            // every derived key and needs a coordinated migration.
            ext_coin_type: vec![0x80, 0x00, 0x00, 0x05],
        },
        checkpoints: genesis_checkpoints(Network::Main)?,
        // DNS seeds are not deployed yet
        seeds: Vec::new(),
        flags: OperationalFlags {
            mining_requires_peers: true,
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
            testnet_to_be_deprecated_field_rpc: false,
        },
        pool_max_transactions: 3,
        fulfilled_request_expire_time: 60 * 60,
        spork_pubkey: Some(MAIN_SPORK_KEY),
        masternode_payments_pubkey: Some(MAIN_SPORK_KEY),
        genesis: genesis_spec()?,
    })
}

pub fn test_table() -> Result<ParameterTable> {
    let consensus = ConsensusParams {
        subsidy_halving_interval: None,
        masternode_payments_start_block: 121,
        masternode_payments_increase_block: None,
        masternode_payments_increase_period: None,
        instant_send_keep_lock: 24,
        budget_payments_start_block: 2282,
        budget_payments_cycle_blocks: 90,
        budget_payments_window_blocks: 39,
        budget_proposal_establishing_time: 720,
        superblock_start_block: 2432,
        superblock_cycle: 90,
        governance_min_quorum: 1,
        governance_filter_elements: 500,
        masternode_minimum_confirmations: 1,
        majority_enforce_block_upgrade: 51,
        majority_reject_block_outdated: 75,
        majority_window: 390,
        bip34_height: None,
        bip34_hash: Hash256::zero(),
        pow_limit: hash(POW_LIMIT)?,
        pow_target_timespan: 60,
        pow_target_spacing: 40,
        pow_allow_min_difficulty_blocks: true,
        pow_no_retargeting: false,
        rule_activation_threshold: 8,
        confirmation_window: 11,
        deployments: deployments((1199145601, 1230767999), (1456790400, 1493596800)),
        genesis_hash: Hash256::zero(),
    };

    Ok(ParameterTable {
        network: Network::Test,
        consensus,
        network_identity: NetworkIdentity {
            message_start: [0x4f, 0xd1, 0x6d, 0xee],
            default_port: 23200,
            max_tip_age: 0x7fffffff,
            prune_after_height: 1000,
            alert_pubkey: Some(public_key("042736aa94dcc46a596d1f42a5402261b6d9d8a72de40ace5a8856f9e5f7bab96f837f926a8ab8d1e2f8d6d7ef59732d99b55352c4fdf775bdb9690c42851609bd")?),
        },
        address_prefixes: AddressPrefixTable {
            // 'a'
            pubkey_address: vec![83],
            // 's'
            script_address: vec![125],
            // 'y' or 'z'
            secret_key: vec![141],
            ext_public_key: vec![0x04, 0x35, 0x87, 0xcf],
            ext_secret_key: vec![0x04, 0x35, 0x83, 0x94],
            // Testnet coin type 1
            ext_coin_type: vec![0x80, 0x00, 0x00, 0x01],
        },
        checkpoints: genesis_checkpoints(Network::Test)?,
        seeds: Vec::new(),
        flags: OperationalFlags {
            mining_requires_peers: false,
            default_consistency_checks: false,
            require_standard: false,
            mine_blocks_on_demand: false,
            testnet_to_be_deprecated_field_rpc: true,
        },
        pool_max_transactions: 3,
        fulfilled_request_expire_time: 5 * 60,
        spork_pubkey: Some(TEST_SPORK_KEY),
        masternode_payments_pubkey: Some(TEST_SPORK_KEY),
        genesis: genesis_spec()?,
    })
}

pub fn regtest_table() -> Result<ParameterTable> {
    let consensus = ConsensusParams {
        subsidy_halving_interval: None,
        masternode_payments_start_block: 121,
        masternode_payments_increase_block: None,
        masternode_payments_increase_period: None,
        instant_send_keep_lock: 6,
        budget_payments_start_block: 212,
        budget_payments_cycle_blocks: 90,
        budget_payments_window_blocks: 39,
        budget_proposal_establishing_time: 720,
        superblock_start_block: 318,
        superblock_cycle: 10,
        governance_min_quorum: 1,
        governance_filter_elements: 100,
        masternode_minimum_confirmations: 1,
        majority_enforce_block_upgrade: 750,
        majority_reject_block_outdated: 950,
        majority_window: 1000,
        bip34_height: None,
        bip34_hash: Hash256::zero(),
        pow_limit: hash("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff")?,
        pow_target_timespan: 24 * 60 * 60,
        pow_target_spacing: 40,
        pow_allow_min_difficulty_blocks: true,
        pow_no_retargeting: true,
        rule_activation_threshold: 108,
        confirmation_window: 144,
        deployments: deployments((0, 999999999999), (0, 999999999999)),
        genesis_hash: Hash256::zero(),
    };

    Ok(ParameterTable {
        network: Network::Regtest,
        consensus,
        network_identity: NetworkIdentity {
            message_start: [0xe6, 0xce, 0xa3, 0xba],
            default_port: 23300,
            max_tip_age: 60 * 60,
            prune_after_height: 1000,
            alert_pubkey: None,
        },
        address_prefixes: AddressPrefixTable {
            // 'R'
            pubkey_address: vec![61],
            // 'U' or 'V'
            script_address: vec![69],
            // 'Q' or 'R'
            secret_key: vec![59],
            ext_public_key: vec![0x04, 0x35, 0x87, 0xcf],
            ext_secret_key: vec![0x04, 0x35, 0x83, 0x94],
            ext_coin_type: vec![0x80, 0x00, 0x00, 0x01],
        },
        checkpoints: genesis_checkpoints(Network::Regtest)?,
        seeds: Vec::new(),
        flags: OperationalFlags {
            mining_requires_peers: false,
            default_consistency_checks: true,
            require_standard: false,
            mine_blocks_on_demand: true,
            testnet_to_be_deprecated_field_rpc: false,
        },
        pool_max_transactions: 3,
        fulfilled_request_expire_time: 5 * 60,
        spork_pubkey: None,
        masternode_payments_pubkey: None,
        genesis: genesis_spec()?,
    })
}
