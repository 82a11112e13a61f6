//! End-to-end queries over the built-in Indian intercity network.

#![allow(clippy::float_cmp)]

use routewise_core::presets::indian_cities;
use routewise_core::{
    find_shortest_path, Directedness, Graph, GraphStore, SelectionStrategy, ShortestPathEngine,
};

fn network() -> Graph<String> {
    indian_cities().expect("preset tables are consistent")
}

fn route(graph: &Graph<String>, from: &str, to: &str) -> (Vec<String>, f64) {
    let result = find_shortest_path(graph, &from.to_string(), &to.to_string()).unwrap();
    (result.path, result.total_cost)
}

fn names(cities: &[&str]) -> Vec<String> {
    cities.iter().map(|c| (*c).to_string()).collect()
}

#[test]
fn test_network_shape() {
    let graph = network();
    assert_eq!(graph.directedness(), Directedness::Directed);
    assert_eq!(graph.node_count(), 39);
    assert_eq!(graph.edge_count(), 99);
    assert!(graph.nodes().all(|city| graph.position(city).is_some()));
}

#[test]
fn test_mumbai_to_delhi() {
    let (path, cost) = route(&network(), "Mumbai", "Delhi");
    assert_eq!(path, names(&["Mumbai", "Ahmedabad", "Delhi"]));
    assert_eq!(cost, 20.0);
}

#[test]
fn test_mumbai_to_kolkata() {
    let (path, cost) = route(&network(), "Mumbai", "Kolkata");
    assert_eq!(
        path,
        names(&["Mumbai", "Ahmedabad", "Delhi", "Lucknow", "Patna", "Kolkata"])
    );
    assert_eq!(cost, 41.0);
}

#[test]
fn test_south_to_north_tip() {
    let (path, cost) = route(&network(), "Thiruvananthapuram", "Jammu");
    assert_eq!(
        path,
        names(&[
            "Thiruvananthapuram",
            "Kochi",
            "Bangalore",
            "Pune",
            "Mumbai",
            "Ahmedabad",
            "Delhi",
            "Chandigarh",
            "Amritsar",
            "Jammu",
        ])
    );
    assert_eq!(cost, 64.0);
}

#[test]
fn test_northeast_to_west() {
    let (path, cost) = route(&network(), "Shillong", "Mumbai");
    assert_eq!(
        path,
        names(&[
            "Shillong",
            "Guwahati",
            "Kolkata",
            "Bhubaneswar",
            "Visakhapatnam",
            "Hyderabad",
            "Pune",
            "Mumbai",
        ])
    );
    assert_eq!(cost, 47.0);
}

#[test]
fn test_short_hops() {
    let graph = network();
    assert_eq!(
        route(&graph, "Kanpur", "Mumbai"),
        (names(&["Kanpur", "Delhi", "Ahmedabad", "Mumbai"]), 28.0)
    );
    assert_eq!(
        route(&graph, "Pune", "Chennai"),
        (names(&["Pune", "Hyderabad", "Chennai"]), 17.0)
    );
}

#[test]
fn test_one_way_links_leave_cities_unreachable() {
    let graph = network();
    for (from, to) in [
        ("Mumbai", "Shillong"),
        ("Mumbai", "Kanpur"),
        ("Jammu", "Thiruvananthapuram"),
        ("Mumbai", "Varanasi"),
    ] {
        let result = find_shortest_path(&graph, &from.to_string(), &to.to_string()).unwrap();
        assert!(!result.is_reachable(), "{from} -> {to}");
        assert_eq!(result.total_cost, f64::INFINITY);
    }
}

#[test]
fn test_reachability_from_mumbai() {
    let graph = network();
    let source = "Mumbai".to_string();
    let mut unreachable: Vec<&str> = graph
        .nodes()
        .filter(|city| {
            !find_shortest_path(&graph, &source, city)
                .unwrap()
                .is_reachable()
        })
        .map(String::as_str)
        .collect();
    unreachable.sort_unstable();

    let mut expected = vec![
        "Kanpur",
        "Vadodara",
        "Ludhiana",
        "Madurai",
        "Varanasi",
        "Meerut",
        "Rajkot",
        "Jodhpur",
        "Raipur",
        "Kochi",
        "Guwahati",
        "Shillong",
        "Thiruvananthapuram",
    ];
    expected.sort_unstable();
    assert_eq!(unreachable, expected);
}

#[test]
fn test_legs_sum_to_total_cost() {
    let graph = network();
    let result =
        find_shortest_path(&graph, &"Shillong".to_string(), &"Mumbai".to_string()).unwrap();
    let legs = result.legs(&graph).unwrap();
    assert_eq!(legs.len(), result.hop_count());
    assert_eq!(legs[0].from, "Shillong");
    assert_eq!(legs.last().map(|leg| leg.to.as_str()), Some("Mumbai"));
    assert_eq!(legs.iter().map(|leg| leg.cost).sum::<f64>(), result.total_cost);
}

#[test]
fn test_strategies_agree_on_every_pair() {
    let graph = network();
    let heap = ShortestPathEngine::with_strategy(SelectionStrategy::BinaryHeap);
    let scan = ShortestPathEngine::with_strategy(SelectionStrategy::LinearScan);
    for from in graph.nodes() {
        for to in graph.nodes() {
            assert_eq!(
                heap.find_shortest_path(&graph, from, to).unwrap(),
                scan.find_shortest_path(&graph, from, to).unwrap(),
                "{from} -> {to}"
            );
        }
    }
}

#[test]
fn test_store_snapshot_survives_edits() {
    let mut store = GraphStore::default();
    store.add_node("Mumbai", None).unwrap();
    store.add_node("Pune", None).unwrap();
    store.add_edge("Mumbai", "Pune", 3.0).unwrap();

    let before = store.snapshot();
    store.remove_edge("Mumbai", "Pune");

    let frozen = find_shortest_path(before.as_ref(), &"Mumbai".to_string(), &"Pune".to_string())
        .unwrap();
    assert_eq!(frozen.total_cost, 3.0);
    let live =
        find_shortest_path(store.graph(), &"Mumbai".to_string(), &"Pune".to_string()).unwrap();
    assert!(!live.is_reachable());
}
