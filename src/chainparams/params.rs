//! The per-network parameter aggregate and its construction-time validation

use serde::Serialize;
use tracing::{debug, error};

use super::{AddressPrefixTable, CheckpointSet, Network, NetworkIdentity};
use crate::consensus::{check_proof_of_work, compact_to_target, Block, ConsensusParams, HeaderHasher};
use crate::constants::MAX_SCRIPT_ELEMENT_SIZE;
use crate::crypto::{parse_public_key, Hash256};
use crate::error::{ChainParamsError, GenesisField, Result};
use crate::genesis::{create_genesis_block, pay_to_pubkey_script};
use crate::p2p::SeedSpec;
use crate::Amount;

/// Literal inputs for a network's genesis block and the values it must reproduce
#[derive(Debug, Clone)]
pub struct GenesisSpec {
    pub message: &'static str,
    /// Hex public key the genesis reward is paid to
    pub output_pubkey: &'static str,
    pub time: u32,
    pub nonce: u32,
    pub bits: u32,
    pub version: i32,
    pub reward: Amount,
    pub expected_hash: Hash256,
    pub expected_merkle_root: Hash256,
}

/// Boolean behavior switches that differ between networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperationalFlags {
    pub mining_requires_peers: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub testnet_to_be_deprecated_field_rpc: bool,
}

/// Everything a network declares, before genesis construction and validation
#[derive(Debug, Clone)]
pub struct ParameterTable {
    pub network: Network,
    /// `genesis_hash` is overwritten with the verified value
    pub consensus: ConsensusParams,
    pub network_identity: NetworkIdentity,
    pub address_prefixes: AddressPrefixTable,
    pub checkpoints: CheckpointSet,
    pub seeds: Vec<SeedSpec>,
    pub flags: OperationalFlags,
    pub pool_max_transactions: u32,
    /// Seconds
    pub fulfilled_request_expire_time: i64,
    pub spork_pubkey: Option<&'static str>,
    pub masternode_payments_pubkey: Option<&'static str>,
    pub genesis: GenesisSpec,
}

/// Validated, immutable parameters for one network
#[derive(Debug, Clone, Serialize)]
pub struct NetworkParameterSet {
    pub network: Network,
    pub consensus: ConsensusParams,
    pub network_identity: NetworkIdentity,
    pub address_prefixes: AddressPrefixTable,
    pub checkpoints: CheckpointSet,
    pub seeds: Vec<SeedSpec>,
    pub genesis: Block,
    pub flags: OperationalFlags,
    pub pool_max_transactions: u32,
    pub fulfilled_request_expire_time: i64,
    pub spork_pubkey: Option<String>,
    pub masternode_payments_pubkey: Option<String>,
}

impl NetworkParameterSet {
    /// Build the genesis block, verify it against the literals and check every
    /// parameter invariant.
    pub fn from_table<H: HeaderHasher + ?Sized>(table: ParameterTable, hasher: &H) -> Result<Self> {
        let network = table.network;
        let invalid = |reason: String| ChainParamsError::InvalidParameters { network, reason };
        let declared = &table.genesis;

        let message = declared.message.as_bytes();
        if message.is_empty() || message.len() > MAX_SCRIPT_ELEMENT_SIZE {
            return Err(invalid(format!("genesis message length {}", message.len())));
        }

        let target_ok = compact_to_target(declared.bits)
            .map_or(false, |target| target <= table.consensus.pow_limit.to_be_bytes());
        if !target_ok {
            return Err(invalid(format!("genesis bits {:#010x} outside pow limit", declared.bits)));
        }

        let output_pubkey =
            parse_public_key(declared.output_pubkey).ok_or(ChainParamsError::InvalidKey {
                network,
                which: "genesis output",
            })?;

        let genesis = create_genesis_block(
            message,
            &pay_to_pubkey_script(&output_pubkey),
            declared.time,
            declared.nonce,
            declared.bits,
            declared.version,
            declared.reward,
        );

        let hash = genesis.hash_with(hasher);
        verify_genesis_value(network, GenesisField::BlockHash, hash, declared.expected_hash)?;
        verify_genesis_value(
            network,
            GenesisField::MerkleRoot,
            genesis.header.merkle_root,
            declared.expected_merkle_root,
        )?;

        if !check_proof_of_work(&hash, declared.bits, &table.consensus.pow_limit) {
            return Err(invalid(format!("genesis hash {} does not meet its target", hash)));
        }

        let mut consensus = table.consensus;
        consensus.genesis_hash = hash;
        consensus.validate(network)?;

        match table.checkpoints.get(0) {
            Some(anchor) if *anchor != hash => {
                return Err(invalid(format!("checkpoint 0 is {} but genesis is {}", anchor, hash)));
            }
            _ => {}
        }

        if let Some((a, b)) = table.address_prefixes.find_collision() {
            return Err(invalid(format!("{} and {} share prefix bytes", a, b)));
        }
        if table.address_prefixes.has_empty_prefix() {
            return Err(invalid("empty address prefix".into()));
        }

        if let Some(alert) = &table.network_identity.alert_pubkey {
            ensure_key(network, "alert", &hex::encode(alert))?;
        }
        if let Some(key) = table.spork_pubkey {
            ensure_key(network, "spork", key)?;
        }
        if let Some(key) = table.masternode_payments_pubkey {
            ensure_key(network, "masternode payments", key)?;
        }

        debug!(%network, genesis = %hash, "chain parameters validated");

        Ok(Self {
            network,
            consensus,
            network_identity: table.network_identity,
            address_prefixes: table.address_prefixes,
            checkpoints: table.checkpoints,
            seeds: table.seeds,
            genesis,
            flags: table.flags,
            pool_max_transactions: table.pool_max_transactions,
            fulfilled_request_expire_time: table.fulfilled_request_expire_time,
            spork_pubkey: table.spork_pubkey.map(str::to_string),
            masternode_payments_pubkey: table.masternode_payments_pubkey.map(str::to_string),
        })
    }

    pub fn genesis_hash(&self) -> Hash256 {
        self.consensus.genesis_hash
    }

    pub fn default_port(&self) -> u16 {
        self.network_identity.default_port
    }

    pub fn message_start(&self) -> [u8; 4] {
        self.network_identity.message_start
    }

    pub fn require_standard(&self) -> bool {
        self.flags.require_standard
    }

    pub fn mine_blocks_on_demand(&self) -> bool {
        self.flags.mine_blocks_on_demand
    }
}

fn verify_genesis_value(
    network: Network,
    field: GenesisField,
    computed: Hash256,
    expected: Hash256,
) -> Result<()> {
    if computed == expected {
        return Ok(());
    }

    error!(%network, %field, %computed, %expected, "genesis verification failed");
    Err(ChainParamsError::GenesisMismatch {
        network,
        field,
        computed,
        expected,
    })
}

fn ensure_key(network: Network, which: &'static str, hex_key: &str) -> Result<()> {
    parse_public_key(hex_key)
        .map(|_| ())
        .ok_or(ChainParamsError::InvalidKey { network, which })
}
