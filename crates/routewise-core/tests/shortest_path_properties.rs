//! Property tests: Dijkstra against exhaustive search on small random graphs.
//!
//! Weights are small integers stored as `f64`, so every path cost is exact and
//! costs can be compared with `==` regardless of summation order.

#![allow(clippy::float_cmp)]

use proptest::{
    collection::vec,
    prelude::*,
    test_runner::{Config as ProptestConfig, FileFailurePersistence},
};
use routewise_core::{
    Directedness, Graph, GraphView, PathResult, SelectionStrategy, ShortestPathEngine,
};

const MAX_NODES: u8 = 6;
const MAX_EDGES: usize = 14;
const MAX_WEIGHT: u8 = 20;
const PATH_PROP_CASES: u32 = 256;

fn path_proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: PATH_PROP_CASES,
        failure_persistence: Some(Box::new(FileFailurePersistence::WithSource(
            "shortest-path-regressions",
        ))),
        ..ProptestConfig::default()
    }
}

/// A graph on nodes `0..n` plus a source and target drawn from the same range.
fn query_strategy() -> impl Strategy<Value = (Graph<u8>, u8, u8)> {
    (1..=MAX_NODES, any::<bool>())
        .prop_flat_map(|(n, directed)| {
            (
                Just(n),
                Just(directed),
                vec((0..n, 0..n, 0..=MAX_WEIGHT), 0..=MAX_EDGES),
                0..n,
                0..n,
            )
        })
        .prop_map(|(n, directed, edges, source, target)| {
            let directedness = if directed {
                Directedness::Directed
            } else {
                Directedness::Undirected
            };
            let mut graph = Graph::new(directedness);
            for node in 0..n {
                graph.add_node(node).unwrap();
            }
            for (from, to, weight) in edges {
                graph.add_edge(from, to, f64::from(weight)).unwrap();
            }
            (graph, source, target)
        })
}

/// Cheapest cost over all simple paths, or `None` if there is none.
fn brute_force_cost(graph: &Graph<u8>, source: u8, target: u8) -> Option<f64> {
    fn walk(
        graph: &Graph<u8>,
        node: u8,
        target: u8,
        cost: f64,
        visited: &mut Vec<u8>,
        best: &mut Option<f64>,
    ) {
        if node == target {
            *best = Some(best.map_or(cost, |b| b.min(cost)));
            return;
        }
        for (next, weight) in graph.neighbors(&node) {
            if visited.contains(next) {
                continue;
            }
            visited.push(*next);
            walk(graph, *next, target, cost + weight, visited, best);
            visited.pop();
        }
    }

    let mut best = None;
    walk(graph, source, target, 0.0, &mut vec![source], &mut best);
    best
}

fn path_weight(graph: &Graph<u8>, result: &PathResult<u8>) -> f64 {
    result
        .path
        .windows(2)
        .map(|pair| {
            GraphView::edge_weight(graph, &pair[0], &pair[1])
                .expect("every hop of a returned path is an edge")
        })
        .sum()
}

proptest! {
    #![proptest_config(path_proptest_config())]

    #[test]
    fn test_cost_matches_exhaustive_search((graph, source, target) in query_strategy()) {
        let result = ShortestPathEngine::default()
            .find_shortest_path(&graph, &source, &target)
            .unwrap();
        match brute_force_cost(&graph, source, target) {
            Some(expected) => prop_assert_eq!(result.total_cost, expected),
            None => {
                prop_assert!(!result.is_reachable());
                prop_assert!(result.path.is_empty());
                prop_assert_eq!(result.total_cost, f64::INFINITY);
            }
        }
    }

    #[test]
    fn test_returned_path_is_a_real_walk((graph, source, target) in query_strategy()) {
        let result = ShortestPathEngine::default()
            .find_shortest_path(&graph, &source, &target)
            .unwrap();
        prop_assume!(result.is_reachable());

        prop_assert_eq!(result.source(), Some(&source));
        prop_assert_eq!(result.target(), Some(&target));
        prop_assert_eq!(path_weight(&graph, &result), result.total_cost);

        let mut seen = result.path.clone();
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), result.path.len(), "path revisits a node");
    }

    #[test]
    fn test_strategies_agree((graph, source, target) in query_strategy()) {
        let heap = ShortestPathEngine::with_strategy(SelectionStrategy::BinaryHeap)
            .find_shortest_path(&graph, &source, &target)
            .unwrap();
        let scan = ShortestPathEngine::with_strategy(SelectionStrategy::LinearScan)
            .find_shortest_path(&graph, &source, &target)
            .unwrap();
        prop_assert_eq!(heap, scan);
    }

    #[test]
    fn test_repeated_query_is_identical((graph, source, target) in query_strategy()) {
        let engine = ShortestPathEngine::default();
        let first = engine.find_shortest_path(&graph, &source, &target).unwrap();
        let second = engine.find_shortest_path(&graph, &source, &target).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_self_query_is_free((graph, source, _target) in query_strategy()) {
        let result = ShortestPathEngine::default()
            .find_shortest_path(&graph, &source, &source)
            .unwrap();
        prop_assert_eq!(result.path, vec![source]);
        prop_assert_eq!(result.total_cost, 0.0);
    }
}
