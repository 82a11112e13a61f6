//! Working graph plus named snapshots.
//!
//! [`GraphStore`] is the only place a graph is mutated interactively. Queries
//! take a read-only view ([`GraphStore::graph`]) or a copy-on-read
//! [`GraphStore::snapshot`] and hand it to the engine.
//!
//! # Example
//!
//! ```rust
//! use routewise_core::{find_shortest_path, GraphStore, Position};
//!
//! let mut store = GraphStore::default();
//! let a = store.add_auto_node(Position::new(0.0, 0.0)).unwrap();
//! let b = store.add_auto_node(Position::new(3.0, 4.0)).unwrap();
//! store.add_edge(&a, &b, 5.0).unwrap();
//! store.save("demo").unwrap();
//!
//! store.clear();
//! store.load("demo").unwrap();
//!
//! let snapshot = store.snapshot();
//! let result = find_shortest_path(snapshot.as_ref(), &a, &b).unwrap();
//! assert_eq!(result.path, vec!["Node 1", "Node 2"]);
//! ```

mod snapshot;


use std::sync::Arc;

use crate::config::StoreConfig;
use crate::error::Result;
use crate::graph::{Graph, GraphStats, Position};

pub use snapshot::SnapshotStore;

/// Owns the working graph and the named snapshot store.
#[derive(Debug)]
pub struct GraphStore {
    graph: Graph<String>,
    snapshots: SnapshotStore<String>,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new(&StoreConfig::default())
    }
}

impl GraphStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            graph: Graph::new(config.directedness),
            snapshots: SnapshotStore::with_limit(config.max_snapshots),
        }
    }

    /// Read-only access to the working graph.
    #[must_use]
    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    /// Copy of the working graph that later edits cannot affect.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Graph<String>> {
        Arc::new(self.graph.clone())
    }

    /// Adds a named node, optionally at a position.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeExists` if the name is taken.
    pub fn add_node(&mut self, name: impl Into<String>, position: Option<Position>) -> Result<()> {
        let name = name.into();
        match position {
            Some(position) => self.graph.add_node_at(name, position),
            None => self.graph.add_node(name),
        }
    }

    /// Adds a node named `"Node {n}"`, where `n` is one past the current node
    /// count, bumped until the name is free. Returns the chosen name.
    ///
    /// # Errors
    ///
    /// Never fails in practice; propagates `Graph::add_node_at` errors.
    pub fn add_auto_node(&mut self, position: Position) -> Result<String> {
        let mut n = self.graph.node_count() + 1;
        let mut name = format!("Node {n}");
        while self.graph.contains_node(&name) {
            n += 1;
            name = format!("Node {n}");
        }
        self.graph.add_node_at(name.clone(), position)?;
        tracing::debug!(node = %name, x = position.x, y = position.y, "node added");
        Ok(name)
    }

    /// Adds or re-weights an edge between two existing nodes.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeNotFound` or `Error::InvalidWeight`.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<()> {
        self.graph
            .add_edge(from.to_string(), to.to_string(), weight)
    }

    /// Removes an edge, returning its weight.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> Option<f64> {
        self.graph.remove_edge(&from.to_string(), &to.to_string())
    }

    /// Removes a node and its edges.
    pub fn remove_node(&mut self, name: &str) -> bool {
        self.graph.remove_node(&name.to_string())
    }

    /// Empties the working graph. Snapshots are kept.
    pub fn clear(&mut self) {
        self.graph.clear();
    }

    /// Node and edge counts of the working graph.
    #[must_use]
    pub fn stats(&self) -> GraphStats {
        self.graph.stats()
    }

    /// Saves a copy of the working graph under `name`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidSnapshotName` or `Error::SnapshotLimitReached`.
    pub fn save(&self, name: &str) -> Result<()> {
        let snapshot = self.snapshots.save(name, self.graph.clone())?;
        tracing::info!(
            snapshot = name,
            nodes = snapshot.node_count(),
            edges = snapshot.edge_count(),
            "graph snapshot saved"
        );
        Ok(())
    }

    /// Replaces the working graph with the snapshot named `name`.
    ///
    /// # Errors
    ///
    /// Returns `Error::SnapshotNotFound`; the working graph is left untouched.
    pub fn load(&mut self, name: &str) -> Result<()> {
        let snapshot = self.snapshots.get(name).inspect_err(|_| {
            tracing::warn!(snapshot = name, "graph snapshot does not exist");
        })?;
        self.graph = Graph::clone(&snapshot);
        tracing::info!(
            snapshot = name,
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "graph snapshot loaded"
        );
        Ok(())
    }

    /// The named snapshot store.
    #[must_use]
    pub fn snapshots(&self) -> &SnapshotStore<String> {
        &self.snapshots
    }
}
