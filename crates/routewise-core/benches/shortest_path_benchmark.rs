//! Benchmark for shortest-path queries.
//!
//! Measures:
//! - Binary-heap vs linear-scan node selection on square grids
//! - End-to-end query on the built-in city network
//! - Snapshot save/get overhead

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use routewise_core::presets::indian_cities;
use routewise_core::{Graph, SelectionStrategy, ShortestPathEngine, SnapshotStore};

// =============================================================================
// Fixtures
// =============================================================================

/// `side x side` undirected grid, node id `row * side + col`, weights cycling 1..=7.
fn grid(side: u32) -> Graph<u32> {
    let mut graph = Graph::undirected();
    for id in 0..side * side {
        graph.add_node(id).unwrap();
    }
    for row in 0..side {
        for col in 0..side {
            let id = row * side + col;
            let weight = f64::from(id % 7 + 1);
            if col + 1 < side {
                graph.add_edge(id, id + 1, weight).unwrap();
            }
            if row + 1 < side {
                graph.add_edge(id, id + side, weight).unwrap();
            }
        }
    }
    graph
}

// =============================================================================
// Strategy comparison
// =============================================================================

fn bench_grid_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_corner_to_corner");

    for side in [8u32, 16, 32] {
        let graph = grid(side);
        let target = side * side - 1;
        group.throughput(Throughput::Elements(u64::from(side * side)));

        for (label, strategy) in [
            ("binary_heap", SelectionStrategy::BinaryHeap),
            ("linear_scan", SelectionStrategy::LinearScan),
        ] {
            let engine = ShortestPathEngine::with_strategy(strategy);
            group.bench_with_input(BenchmarkId::new(label, side), &graph, |b, graph| {
                b.iter(|| black_box(engine.find_shortest_path(graph, &0, &target)));
            });
        }
    }

    group.finish();
}

// =============================================================================
// City network
// =============================================================================

fn bench_city_network(c: &mut Criterion) {
    let graph = indian_cities().unwrap();
    let engine = ShortestPathEngine::default();
    let (from, to) = ("Thiruvananthapuram".to_string(), "Jammu".to_string());

    c.bench_function("cities_south_to_north", |b| {
        b.iter(|| black_box(engine.find_shortest_path(&graph, &from, &to)));
    });
}

// =============================================================================
// Snapshots
// =============================================================================

fn bench_snapshot_roundtrip(c: &mut Criterion) {
    let store = SnapshotStore::new();
    let graph = grid(16);

    c.bench_function("snapshot_save_get_grid16", |b| {
        b.iter(|| {
            store.save("bench", graph.clone()).unwrap();
            black_box(store.get("bench").unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_grid_strategies,
    bench_city_network,
    bench_snapshot_roundtrip,
);

criterion_main!(benches);
