//! Read-only graph access for the shortest-path engine.

use std::collections::BTreeMap;

use super::adjacency::Graph;
use super::types::NodeId;

/// Trait for read-only graph access: any graph store can implement this.
///
/// The engine only ever sees a graph through this trait, so it cannot mutate
/// it. Implementors are not trusted: the engine re-checks that every neighbor
/// is a known node and that every weight is finite and non-negative.
pub trait GraphView {
    /// Node identifier type.
    type Node: NodeId;

    /// Returns true if the node is part of the node set.
    fn contains_node(&self, node: &Self::Node) -> bool;

    /// Returns every node identifier.
    fn node_ids(&self) -> Vec<Self::Node>;

    /// Returns one-hop neighbors of a node as `(neighbor, weight)`.
    fn neighbors(&self, node: &Self::Node) -> Vec<(Self::Node, f64)>;

    /// Returns the weight of the edge `from -> to`, if present.
    fn edge_weight(&self, from: &Self::Node, to: &Self::Node) -> Option<f64> {
        self.neighbors(from)
            .into_iter()
            .find_map(|(n, w)| (n == *to).then_some(w))
    }
}

impl<N: NodeId> GraphView for Graph<N> {
    type Node = N;

    fn contains_node(&self, node: &N) -> bool {
        Graph::contains_node(self, node)
    }

    fn node_ids(&self) -> Vec<N> {
        self.nodes().cloned().collect()
    }

    fn neighbors(&self, node: &N) -> Vec<(N, f64)> {
        Graph::neighbors(self, node)
            .map(|(n, w)| (n.clone(), w))
            .collect()
    }

    fn edge_weight(&self, from: &N, to: &N) -> Option<f64> {
        Graph::edge_weight(self, from, to)
    }
}

/// Raw adjacency map: the key set is the node set.
///
/// Nothing validates a raw map on construction, which is exactly what the
/// engine's weight and endpoint checks are for.
impl<N: NodeId> GraphView for BTreeMap<N, BTreeMap<N, f64>> {
    type Node = N;

    fn contains_node(&self, node: &N) -> bool {
        self.contains_key(node)
    }

    fn node_ids(&self) -> Vec<N> {
        self.keys().cloned().collect()
    }

    fn neighbors(&self, node: &N) -> Vec<(N, f64)> {
        self.get(node)
            .map(|neighbors| neighbors.iter().map(|(n, &w)| (n.clone(), w)).collect())
            .unwrap_or_default()
    }

    fn edge_weight(&self, from: &N, to: &N) -> Option<f64> {
        self.get(from)?.get(to).copied()
    }
}
