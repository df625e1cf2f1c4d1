//! Registry-level checks of every network's declared parameters

mod common;

use aeris_chainparams::chainparams::{AddressKind, Network, NetworkSelector, ParameterRegistry};
use aeris_chainparams::consensus::compact_to_target;
use aeris_chainparams::constants::COIN;
use aeris_chainparams::crypto::Hash256;
use aeris_chainparams::genesis::create_default_genesis_block;
use aeris_chainparams::ChainParamsError;
use common::*;

fn registry() -> ParameterRegistry {
    init_tracing();
    ParameterRegistry::new(&GenesisFixtureHasher).expect("registry builds")
}

// ============================================================================
// GENESIS PINS
// ============================================================================

#[test]
fn genesis_header_bytes_are_pinned() {
    let genesis = create_default_genesis_block(1517849983, 2442161, 0x1e0ffff0, 1, 50 * COIN).unwrap();
    assert_eq!(hex::encode(genesis.header.to_bytes()), GENESIS_HEADER_HEX);
}

#[test]
fn genesis_hash_and_merkle_root_match_literals() {
    let registry = registry();
    for params in registry.iter() {
        assert_eq!(params.genesis_hash().to_hex(), GENESIS_HASH_HEX, "{}", params.network);
        assert_eq!(
            params.genesis.header.merkle_root.to_hex(),
            GENESIS_MERKLE_ROOT_HEX,
            "{}",
            params.network
        );
        assert_eq!(params.genesis.compute_merkle_root(), params.genesis.header.merkle_root);
        assert!(params.genesis.is_genesis());
    }
}

// ============================================================================
// CONSENSUS INVARIANTS
// ============================================================================

#[test]
fn activation_threshold_within_window() {
    let registry = registry();
    for name in ["main", "test", "regtest"] {
        let consensus = &registry.get(name).unwrap().consensus;
        assert!(consensus.rule_activation_threshold <= consensus.confirmation_window, "{}", name);
    }
}

#[test]
fn enabled_deployments_have_ordered_windows() {
    let registry = registry();
    for params in registry.iter() {
        for (id, deployment) in &params.consensus.deployments {
            if deployment.is_enabled() {
                assert!(deployment.start_time < deployment.timeout, "{} {}", params.network, id);
            }
            assert!(deployment.bit <= 28);
        }
    }
}

#[test]
fn genesis_bits_round_trip_and_sit_under_pow_limit() {
    let registry = registry();
    for params in registry.iter() {
        let bits = params.genesis.header.bits;
        let target = compact_to_target(bits).unwrap();
        assert_eq!(aeris_chainparams::consensus::target_to_compact(&target), bits);
        assert!(target <= params.consensus.pow_limit.to_be_bytes());
    }
}

#[test]
fn difficulty_intervals() {
    let registry = registry();
    assert_eq!(registry.for_network(Network::Main).consensus.difficulty_adjustment_interval(), 30);
    assert_eq!(registry.for_network(Network::Test).consensus.difficulty_adjustment_interval(), 1);
    assert_eq!(registry.for_network(Network::Regtest).consensus.difficulty_adjustment_interval(), 2160);
}

// ============================================================================
// CHECKPOINTS
// ============================================================================

#[test]
fn checkpoints_ascend_and_anchor_genesis() {
    let registry = registry();
    for params in registry.iter() {
        let heights: Vec<u32> = params.checkpoints.checkpoints.keys().copied().collect();
        assert!(heights.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(params.checkpoints.get(0), Some(&params.genesis_hash()));
        assert_eq!(params.checkpoints.last_checkpoint_time, 1517849983);
        assert_eq!(params.checkpoints.transactions_per_day, 500.0);
    }
}

// ============================================================================
// NETWORK LITERALS
// ============================================================================

#[test]
fn per_network_identity_literals() {
    let registry = registry();
    let mut selector = NetworkSelector::new(&registry);

    for (name, port, prefix) in [("main", 23100, 23u8), ("test", 23200, 83), ("regtest", 23300, 61)] {
        selector.select(name).unwrap();
        let active = selector.active().unwrap();
        assert_eq!(active.network_identity.default_port, port);
        assert_eq!(active.address_prefixes[AddressKind::PubkeyAddress], [prefix]);
    }
}

#[test]
fn main_network_literals() {
    let registry = registry();
    let main = registry.get("main").unwrap();

    assert_eq!(main.message_start(), [0x4c, 0x61, 0xc5, 0x11]);
    assert!(!main.network_identity.matches_message_start(&registry.get("test").unwrap().message_start()));
    assert_eq!(main.consensus.subsidy_halving_interval, Some(262800));
    assert_eq!(main.consensus.bip34_height, None);
    assert_eq!(
        main.consensus.bip34_hash,
        Hash256::from_hex("000000000000024b89b42a942fe0d9fea3bb44ab7bd1b19115dd6a759c0808b8").unwrap()
    );
    assert!(main.flags.mining_requires_peers);
    assert!(main.require_standard());
    assert_eq!(main.fulfilled_request_expire_time, 3600);
    assert_eq!(main.spork_pubkey, main.masternode_payments_pubkey);
    assert_eq!(main.address_prefixes[AddressKind::ExtCoinType], [0x80, 0x00, 0x00, 0x05]);
    assert!(main.seeds.is_empty());
}

#[test]
fn regtest_network_literals() {
    let registry = registry();
    let regtest = registry.get("regtest").unwrap();

    assert_eq!(regtest.message_start(), [0xe6, 0xce, 0xa3, 0xba]);
    assert!(regtest.consensus.pow_no_retargeting);
    assert!(regtest.mine_blocks_on_demand());
    assert!(regtest.flags.default_consistency_checks);
    assert_eq!(regtest.network_identity.max_tip_age, 3600);
    assert_eq!(regtest.network_identity.alert_pubkey, None);
    assert_eq!(regtest.spork_pubkey, None);
}

#[test]
fn addresses_are_distinguishable_across_networks() {
    let registry = registry();
    let payload = [0u8; 20];

    let encoded: Vec<String> = registry
        .iter()
        .map(|p| p.address_prefixes.encode(AddressKind::PubkeyAddress, &payload))
        .collect();
    assert_eq!(
        encoded,
        vec![
            "AFmseVrdL9f9oyCzZefL9tG6UbvhPbdYzM",
            "aQ44j1juvyTisyaC2peTFQbJEsPJ6xNJsd",
            "RYco4dBaK1GStSWHVbKSaebzPmiYNjtd5R",
        ]
    );

    let test = registry.for_network(Network::Test);
    assert!(test.address_prefixes.decode(AddressKind::PubkeyAddress, &encoded[0]).is_err());
    assert_eq!(
        test.address_prefixes.decode(AddressKind::PubkeyAddress, &encoded[1]).unwrap(),
        payload.to_vec()
    );
}

#[test]
fn unknown_network_lookup_fails() {
    let registry = registry();
    match registry.get("bogus") {
        Err(ChainParamsError::UnknownNetwork(name)) => assert_eq!(name, "bogus"),
        other => panic!("unexpected {:?}", other.map(|p| p.network)),
    }
}

#[test]
fn parameters_serialize_for_tooling() {
    let registry = registry();
    let json = serde_json::to_value(registry.for_network(Network::Test)).unwrap();

    assert_eq!(json["network"], "test");
    assert_eq!(json["network_identity"]["default_port"], 23200);
    assert_eq!(json["consensus"]["genesis_hash"], GENESIS_HASH_HEX);
    assert_eq!(json["consensus"]["deployments"]["csv"]["start_time"], 1456790400);
    assert_eq!(json["address_prefixes"]["pubkey_address"][0], 83);
}
