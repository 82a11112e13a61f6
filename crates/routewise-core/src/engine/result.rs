//! Query results: the path, its cost and its per-leg breakdown.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::{GraphView, NodeId};

/// Outcome of a shortest-path query.
///
/// An empty `path` means the target is unreachable; `total_cost` is then
/// `f64::INFINITY`. Unreachable is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult<N> {
    /// Nodes from source to target, inclusive.
    pub path: Vec<N>,
    /// Sum of traversed edge weights.
    pub total_cost: f64,
}

impl<N> PathResult<N> {
    /// Creates a result from a path and its cost.
    #[must_use]
    pub fn new(path: Vec<N>, total_cost: f64) -> Self {
        Self { path, total_cost }
    }

    /// The "no path" result.
    #[must_use]
    pub fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            total_cost: f64::INFINITY,
        }
    }

    /// The zero-cost path from a node to itself.
    #[must_use]
    pub fn single(node: N) -> Self {
        Self {
            path: vec![node],
            total_cost: 0.0,
        }
    }

    /// Returns true if a path was found.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Returns the cost, or `None` if unreachable.
    #[must_use]
    pub fn cost(&self) -> Option<f64> {
        self.is_reachable().then_some(self.total_cost)
    }

    /// Number of edges on the path.
    #[must_use]
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// First node of the path.
    #[must_use]
    pub fn source(&self) -> Option<&N> {
        self.path.first()
    }

    /// Last node of the path.
    #[must_use]
    pub fn target(&self) -> Option<&N> {
        self.path.last()
    }
}

impl<N: NodeId> PathResult<N> {
    /// Expands the path into one [`RouteLeg`] per traversed edge, looking up
    /// each weight in `graph`.
    ///
    /// # Errors
    ///
    /// Returns `Error::EdgeNotFound` if `graph` lacks an edge of the path,
    /// e.g. because it was edited after the query.
    pub fn legs<G>(&self, graph: &G) -> Result<Vec<RouteLeg<N>>>
    where
        G: GraphView<Node = N>,
    {
        self.path
            .windows(2)
            .map(|pair| {
                let (from, to) = (&pair[0], &pair[1]);
                let cost = graph
                    .edge_weight(from, to)
                    .ok_or_else(|| Error::EdgeNotFound {
                        from: from.to_string(),
                        to: to.to_string(),
                    })?;
                Ok(RouteLeg {
                    from: from.clone(),
                    to: to.clone(),
                    cost,
                })
            })
            .collect()
    }
}

impl<N: fmt::Display> fmt::Display for PathResult<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return f.write_str("unreachable");
        }
        for (i, node) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{node}")?;
        }
        write!(f, " (cost {})", self.total_cost)
    }
}

/// One edge of a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg<N> {
    /// Leg start.
    pub from: N,
    /// Leg end.
    pub to: N,
    /// Edge weight.
    pub cost: f64,
}
