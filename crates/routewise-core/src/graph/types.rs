//! Value types shared by the graph model, the engine and the store.

use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Bounds required of a node identifier.
///
/// Identifiers are opaque to the engine. `Ord` defines the tie-break used when
/// several unvisited nodes share the minimum tentative distance (lowest wins),
/// and `Display` is used when an identifier is reported inside an [`Error`].
///
/// [`Error`]: crate::Error
pub trait NodeId: Clone + Eq + Ord + Hash + fmt::Debug + fmt::Display {}

impl<T> NodeId for T where T: Clone + Eq + Ord + Hash + fmt::Debug + fmt::Display {}

/// Whether edges are one-way or two-way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Directedness {
    /// `add_edge(u, v, w)` only makes `v` reachable from `u`.
    Directed,
    /// `add_edge(u, v, w)` connects both ways at the same weight.
    #[default]
    Undirected,
}

impl Directedness {
    /// Returns true for [`Directedness::Directed`].
    #[must_use]
    pub fn is_directed(self) -> bool {
        matches!(self, Self::Directed)
    }
}

/// Display coordinates of a node.
///
/// Ignored by the engine. The city preset stores latitude in `x` and
/// longitude in `y`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate (or latitude).
    pub x: f64,
    /// Vertical coordinate (or longitude).
    pub y: f64,
}

impl Position {
    /// Creates a position.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A weighted edge as reported by [`Graph::edges`](super::Graph::edges).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge<N> {
    /// Tail node (either endpoint for undirected graphs).
    pub from: N,
    /// Head node.
    pub to: N,
    /// Travel cost, finite and non-negative.
    pub weight: f64,
}

/// Node and edge counts of a graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of edges; an undirected edge counts once.
    pub edge_count: usize,
}

/// Plain serializable form of a [`Graph`](super::Graph).
///
/// Converting back with [`Graph::from_data`](super::Graph::from_data)
/// re-validates every invariant, so hand-edited data cannot smuggle in
/// negative weights or dangling edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphData<N: Eq + Hash> {
    /// Edge semantics.
    pub directedness: Directedness,
    /// Nodes in insertion order.
    pub nodes: Vec<N>,
    /// Edges as `(from, to, weight)`; undirected edges appear once.
    pub edges: Vec<(N, N, f64)>,
    /// Positions of the nodes that have one.
    #[serde(default)]
    pub positions: IndexMap<N, Position>,
}

/// Returns true if `weight` is usable as a Dijkstra edge cost.
#[inline]
#[must_use]
pub fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight >= 0.0
}
