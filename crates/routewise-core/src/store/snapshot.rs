//! Named, immutable graph snapshots.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};

/// Thread-safe map from snapshot name to an immutable graph.
///
/// Snapshots are handed out as `Arc<Graph>`, so a caller can keep querying a
/// snapshot after it has been overwritten or removed. Names are stored
/// verbatim and listed in first-save order.
#[derive(Debug)]
pub struct SnapshotStore<N = String> {
    snapshots: RwLock<IndexMap<String, Arc<Graph<N>>>>,
    /// 0 = unlimited.
    max_snapshots: usize,
}

impl<N: NodeId> Default for SnapshotStore<N> {
    fn default() -> Self {
        Self::with_limit(0)
    }
}

impl<N: NodeId> SnapshotStore<N> {
    /// Creates an unlimited store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding at most `max_snapshots` names (0 = unlimited).
    #[must_use]
    pub fn with_limit(max_snapshots: usize) -> Self {
        Self {
            snapshots: RwLock::new(IndexMap::new()),
            max_snapshots,
        }
    }

    /// Returns the configured limit (0 = unlimited).
    #[must_use]
    pub fn max_snapshots(&self) -> usize {
        self.max_snapshots
    }

    /// Stores `graph` under `name`, replacing any previous snapshot of that
    /// name.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidSnapshotName` if `name` is empty or whitespace-only.
    /// - `Error::SnapshotLimitReached` if `name` is new and the store is full.
    pub fn save(&self, name: &str, graph: Graph<N>) -> Result<Arc<Graph<N>>> {
        if name.trim().is_empty() {
            return Err(Error::InvalidSnapshotName(name.to_string()));
        }

        let mut snapshots = self.snapshots.write();
        if self.max_snapshots > 0
            && !snapshots.contains_key(name)
            && snapshots.len() >= self.max_snapshots
        {
            return Err(Error::SnapshotLimitReached(self.max_snapshots));
        }

        let snapshot = Arc::new(graph);
        snapshots.insert(name.to_string(), Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Returns the snapshot stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `Error::SnapshotNotFound` if there is none.
    pub fn get(&self, name: &str) -> Result<Arc<Graph<N>>> {
        self.snapshots
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::SnapshotNotFound(name.to_string()))
    }

    /// Returns true if a snapshot named `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.snapshots.read().contains_key(name)
    }

    /// Removes and returns a snapshot.
    pub fn remove(&self, name: &str) -> Option<Arc<Graph<N>>> {
        self.snapshots.write().shift_remove(name)
    }

    /// Returns all snapshot names in first-save order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.snapshots.read().keys().cloned().collect()
    }

    /// Returns the number of snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.read().len()
    }

    /// Returns true if no snapshot is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.read().is_empty()
    }

    /// Removes every snapshot.
    pub fn clear(&self) {
        self.snapshots.write().clear();
    }
}
