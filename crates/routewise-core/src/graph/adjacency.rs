//! Weighted adjacency-map graph with directed or undirected edges.
//!
//! This is the mutable half of the graph API. Queries go through the
//! read-only [`GraphView`](super::GraphView) seam, so a `Graph` can be shared
//! behind an `Arc` while the engine runs.

use indexmap::IndexMap;

use crate::error::{Error, Result};

use super::types::{
    is_valid_weight, Directedness, GraphData, GraphStats, NodeId, Position, WeightedEdge,
};

/// Weighted graph stored as an ordered adjacency map.
///
/// Nodes keep insertion order. Each node may carry a display [`Position`].
/// Every edge endpoint exists in the node table, and every weight is finite
/// and non-negative: both are checked by [`Graph::add_edge`].
#[derive(Debug, Clone)]
pub struct Graph<N = String> {
    directedness: Directedness,
    /// Node table in insertion order.
    nodes: IndexMap<N, Option<Position>>,
    /// node -> (neighbor -> weight). Every node has an entry, possibly empty.
    adjacency: IndexMap<N, IndexMap<N, f64>>,
}

// IndexMap equality needs `N: Hash + Eq`, which a derive would not require.
impl<N: NodeId> PartialEq for Graph<N> {
    fn eq(&self, other: &Self) -> bool {
        self.directedness == other.directedness
            && self.nodes == other.nodes
            && self.adjacency == other.adjacency
    }
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self::new(Directedness::default())
    }
}

impl<N: NodeId> Graph<N> {
    /// Creates an empty graph with the given edge semantics.
    #[must_use]
    pub fn new(directedness: Directedness) -> Self {
        Self {
            directedness,
            nodes: IndexMap::new(),
            adjacency: IndexMap::new(),
        }
    }

    /// Creates an empty directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::new(Directedness::Directed)
    }

    /// Creates an empty undirected graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(Directedness::Undirected)
    }

    /// Returns the edge semantics of this graph.
    #[must_use]
    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    // ── Nodes ──────────────────────────────────────────────────────────

    /// Adds a node without a position.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeExists` if the node is already present.
    pub fn add_node(&mut self, node: N) -> Result<()> {
        self.insert_node(node, None)
    }

    /// Adds a node at a display position.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeExists` if the node is already present.
    pub fn add_node_at(&mut self, node: N, position: impl Into<Position>) -> Result<()> {
        self.insert_node(node, Some(position.into()))
    }

    fn insert_node(&mut self, node: N, position: Option<Position>) -> Result<()> {
        if self.nodes.contains_key(&node) {
            return Err(Error::NodeExists(node.to_string()));
        }
        self.adjacency.insert(node.clone(), IndexMap::new());
        self.nodes.insert(node, position);
        Ok(())
    }

    /// Sets or replaces the position of an existing node.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeNotFound` if the node is absent.
    pub fn set_position(&mut self, node: &N, position: impl Into<Position>) -> Result<()> {
        match self.nodes.get_mut(node) {
            Some(slot) => {
                *slot = Some(position.into());
                Ok(())
            }
            None => Err(Error::NodeNotFound(node.to_string())),
        }
    }

    /// Returns the position of a node, if it has one.
    #[must_use]
    pub fn position(&self, node: &N) -> Option<Position> {
        self.nodes.get(node).copied().flatten()
    }

    /// Returns true if the node exists.
    #[must_use]
    pub fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains_key(node)
    }

    /// Iterates over nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.keys()
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Removes a node and every edge touching it.
    ///
    /// Returns false if the node did not exist.
    pub fn remove_node(&mut self, node: &N) -> bool {
        if self.nodes.shift_remove(node).is_none() {
            return false;
        }
        self.adjacency.shift_remove(node);
        for neighbors in self.adjacency.values_mut() {
            neighbors.shift_remove(node);
        }
        true
    }

    // ── Edges ──────────────────────────────────────────────────────────

    /// Adds an edge, replacing the weight if the edge already exists.
    ///
    /// On an undirected graph the reverse direction is linked at the same
    /// weight. Self-loops are stored once.
    ///
    /// # Errors
    ///
    /// - `Error::NodeNotFound` if either endpoint is absent.
    /// - `Error::InvalidWeight` if `weight` is negative, NaN or infinite.
    pub fn add_edge(&mut self, from: N, to: N, weight: f64) -> Result<()> {
        if !self.contains_node(&from) {
            return Err(Error::NodeNotFound(from.to_string()));
        }
        if !self.contains_node(&to) {
            return Err(Error::NodeNotFound(to.to_string()));
        }
        if !is_valid_weight(weight) {
            return Err(Error::InvalidWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }

        if !self.directedness.is_directed() && from != to {
            self.link(to.clone(), from.clone(), weight);
        }
        self.link(from, to, weight);
        Ok(())
    }

    fn link(&mut self, from: N, to: N, weight: f64) {
        if let Some(neighbors) = self.adjacency.get_mut(&from) {
            neighbors.insert(to, weight);
        }
    }

    /// Removes an edge (both directions on an undirected graph).
    ///
    /// Returns the removed weight, or `None` if there was no such edge.
    pub fn remove_edge(&mut self, from: &N, to: &N) -> Option<f64> {
        let weight = self.adjacency.get_mut(from)?.shift_remove(to)?;
        if !self.directedness.is_directed() && from != to {
            if let Some(neighbors) = self.adjacency.get_mut(to) {
                neighbors.shift_remove(from);
            }
        }
        Some(weight)
    }

    /// Returns the weight of the edge `from -> to`.
    #[must_use]
    pub fn edge_weight(&self, from: &N, to: &N) -> Option<f64> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// Iterates over `(neighbor, weight)` pairs reachable in one hop.
    ///
    /// Yields nothing for an unknown node.
    pub fn neighbors<'a>(&'a self, node: &N) -> impl Iterator<Item = (&'a N, f64)> + 'a {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().map(|(n, &w)| (n, w)))
    }

    /// Returns the number of one-hop neighbors of a node.
    #[must_use]
    pub fn degree(&self, node: &N) -> usize {
        self.adjacency.get(node).map_or(0, IndexMap::len)
    }

    /// Returns every edge, grouped by tail node in node order.
    ///
    /// An undirected edge is reported once, from its earlier-inserted endpoint.
    #[must_use]
    pub fn edges(&self) -> Vec<WeightedEdge<N>> {
        let mut edges = Vec::new();
        for (index, (from, neighbors)) in self.adjacency.iter().enumerate() {
            for (to, &weight) in neighbors {
                if !self.directedness.is_directed()
                    && self.adjacency.get_index_of(to).is_some_and(|j| j < index)
                {
                    continue;
                }
                edges.push(WeightedEdge {
                    from: from.clone(),
                    to: to.clone(),
                    weight,
                });
            }
        }
        edges
    }

    /// Returns the number of edges; an undirected edge counts once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let arcs: usize = self.adjacency.values().map(IndexMap::len).sum();
        if self.directedness.is_directed() {
            return arcs;
        }
        let loops = self
            .adjacency
            .iter()
            .filter(|(node, neighbors)| neighbors.contains_key(*node))
            .count();
        (arcs - loops) / 2 + loops
    }

    /// Removes all nodes and edges, keeping the edge semantics.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.adjacency.clear();
    }

    /// Returns node and edge counts.
    #[must_use]
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
        }
    }

    // ── Conversion ─────────────────────────────────────────────────────

    /// Exports the graph as plain data.
    #[must_use]
    pub fn to_data(&self) -> GraphData<N> {
        GraphData {
            directedness: self.directedness,
            nodes: self.nodes.keys().cloned().collect(),
            edges: self
                .edges()
                .into_iter()
                .map(|e| (e.from, e.to, e.weight))
                .collect(),
            positions: self
                .nodes
                .iter()
                .filter_map(|(node, pos)| pos.map(|p| (node.clone(), p)))
                .collect(),
        }
    }

    /// Rebuilds a graph from plain data, validating every node and edge.
    ///
    /// # Errors
    ///
    /// - `Error::NodeExists` on a duplicated node.
    /// - `Error::NodeNotFound` on a position or edge naming an unknown node.
    /// - `Error::InvalidWeight` on a bad weight.
    pub fn from_data(data: GraphData<N>) -> Result<Self> {
        let mut graph = Self::new(data.directedness);
        for node in data.nodes {
            graph.add_node(node)?;
        }
        for (node, position) in data.positions {
            graph.set_position(&node, position)?;
        }
        for (from, to, weight) in data.edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }
}
