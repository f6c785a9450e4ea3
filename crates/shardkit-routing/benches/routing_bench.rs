//! Routing throughput benchmark.
//!
//! Measures exact-match routing latency for different candidate-set sizes.
//! Routing sits on the hot path of every sharded read and write, so a
//! regression here is a regression everywhere.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shardkit_core::ShardKey;
use shardkit_routing::{DataNodeInfo, HashModRouter, ShardingAlgorithm, ShardingConfig};

fn bench_route_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_exact");

    for table_count in [2u64, 8, 32] {
        let sharding_count = (table_count * 2) as u32;
        let router =
            HashModRouter::new(ShardingConfig::new(sharding_count, 2).expect("valid layout"));
        let node = DataNodeInfo::new("t_order_");
        let targets: Vec<String> = (0..table_count).map(|i| format!("t_order_{}", i)).collect();
        let refs: Vec<&str> = targets.iter().map(String::as_str).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(table_count),
            &refs,
            |b, refs| {
                let mut key = 0u64;
                b.iter(|| {
                    key = key.wrapping_add(1);
                    let target = router
                        .route_exact(refs, &ShardKey::from(key), &node)
                        .expect("candidate set is complete");
                    black_box(target)
                });
            },
        );
    }

    group.finish();
}

fn bench_route_range(c: &mut Criterion) {
    let router = HashModRouter::new(ShardingConfig::new(16, 4).expect("valid layout"));
    let targets: Vec<String> = (0..4).map(|i| format!("t_order_{}", i)).collect();
    let refs: Vec<&str> = targets.iter().map(String::as_str).collect();

    c.bench_function("route_range", |b| {
        b.iter(|| {
            let routed = router.route_range(
                &refs,
                Some(&ShardKey::from(1u64)),
                Some(&ShardKey::from(1_000u64)),
            );
            black_box(routed)
        });
    });
}

criterion_group!(benches, bench_route_exact, bench_route_range);
criterion_main!(benches);
