//! Integration tests for shard routing.
//!
//! These tests verify the end-to-end contract a data-access dispatcher
//! depends on:
//! - Determinism of exact-match routing across calls and threads
//! - Index coverage for the configured layout
//! - Range passthrough
//! - Configuration validation at startup

use std::collections::BTreeMap;
use std::sync::Arc;

use shardkit_core::ShardKey;
use shardkit_routing::{
    ConfigError, DataNodeInfo, HashModRouter, RoutingError, ShardingAlgorithm, ShardingConfig,
};

fn order_targets(n: u64) -> Vec<String> {
    (0..n).map(|i| format!("t_order_{}", i)).collect()
}

fn as_refs(targets: &[String]) -> Vec<&str> {
    targets.iter().map(String::as_str).collect()
}

#[test]
fn every_key_resolves_exactly_one_target() {
    let router = HashModRouter::new(ShardingConfig::new(8, 2).unwrap());
    let node = DataNodeInfo::new("t_order_");
    let targets = order_targets(4);
    let targets = as_refs(&targets);

    for i in 0..5_000u64 {
        let key = ShardKey::from(i);
        let target = router.route_exact(&targets, &key, &node).unwrap();
        assert!(targets.contains(&target));
    }
}

#[test]
fn routing_is_deterministic_across_threads() {
    let router = Arc::new(HashModRouter::new(ShardingConfig::new(16, 4).unwrap()));
    let node = DataNodeInfo::new("t_order_");
    let targets: Vec<String> = order_targets(4);

    let expected: Vec<String> = {
        let refs = as_refs(&targets);
        (0..500u64)
            .map(|i| {
                router
                    .route_exact(&refs, &ShardKey::from(i), &node)
                    .unwrap()
                    .to_string()
            })
            .collect()
    };

    let mut handles = Vec::new();
    for _ in 0..4 {
        let router = Arc::clone(&router);
        let node = node.clone();
        let targets = targets.clone();
        let expected = expected.clone();
        handles.push(std::thread::spawn(move || {
            let refs: Vec<&str> = targets.iter().map(String::as_str).collect();
            for (i, want) in expected.iter().enumerate() {
                let got = router
                    .route_exact(&refs, &ShardKey::from(i as u64), &node)
                    .unwrap();
                assert_eq!(got, want);
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn mismatched_candidates_fail_loudly() {
    let router = HashModRouter::new(ShardingConfig::new(4, 2).unwrap());
    let node = DataNodeInfo::new("t_order_");
    // The layout only produces suffixes 0 and 1.
    let targets = ["t_order_5"];

    let err = router
        .route_exact(&targets, &ShardKey::from(7u64), &node)
        .unwrap_err();
    assert!(matches!(err, RoutingError::NoMatchingTarget { .. }));
}

#[test]
fn range_queries_scan_all_candidates() {
    let router = HashModRouter::new(ShardingConfig::new(4, 2).unwrap());
    let targets = ["t_order_0", "t_order_1", "t_order_2"];

    let routed = router.route_range(
        &targets,
        Some(&ShardKey::from(1u64)),
        Some(&ShardKey::from(1_000_000u64)),
    );
    assert_eq!(routed, targets);
}

#[test]
fn startup_rejects_incomplete_options() {
    let mut props = BTreeMap::new();
    props.insert("sharding-count".to_string(), "4".to_string());
    let err = HashModRouter::from_props(&props).unwrap_err();
    assert!(matches!(err, ConfigError::MissingOption(_)));

    props.insert("table-sharding-count".to_string(), "two".to_string());
    let err = HashModRouter::from_props(&props).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidOption { .. }));

    props.insert("table-sharding-count".to_string(), "2".to_string());
    assert!(HashModRouter::from_props(&props).is_ok());
}

#[test]
fn padded_naming_conventions_route() {
    let router = HashModRouter::new(ShardingConfig::new(4, 2).unwrap());
    let node = DataNodeInfo::with_padding("t_order_", 2, '0');
    let targets = ["t_order_00", "t_order_01"];

    let target = router
        .route_exact(&targets, &ShardKey::from(99u64), &node)
        .unwrap();
    assert!(targets.contains(&target));
}

#[test]
fn distinct_key_types_cover_the_index_space() {
    // Text, signed, and unsigned keys all land inside [0, table_index_space).
    let router = HashModRouter::new(ShardingConfig::new(6, 2).unwrap());

    let keys = [
        ShardKey::from("user-1"),
        ShardKey::from(-1i64),
        ShardKey::from(i64::MIN),
        ShardKey::from(u64::MAX),
        ShardKey::from(0u64),
    ];
    for key in &keys {
        assert!(router.table_index(key) < 3);
        assert!(router.database_index(key) < 6);
    }
}
