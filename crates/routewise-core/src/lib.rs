//! # Routewise Core
//!
//! Deterministic shortest-path search over small weighted graphs.
//!
//! Routewise separates the three concerns of a route planner:
//!
//! - **Graph model** ([`Graph`]): nodes with optional display positions and
//!   non-negatively weighted edges, directed or undirected.
//! - **Engine** ([`ShortestPathEngine`]): Dijkstra's algorithm over a
//!   read-only [`GraphView`]. It never mutates its input and keeps no state
//!   between calls.
//! - **Store** ([`GraphStore`]): the mutable working graph plus named,
//!   immutable snapshots.
//!
//! ## Quick Start
//!
//! ```rust
//! use routewise_core::{find_shortest_path, Graph};
//!
//! fn main() -> Result<(), routewise_core::Error> {
//!     let mut graph = Graph::undirected();
//!     for city in ["Pune", "Mumbai", "Nashik"] {
//!         graph.add_node(city)?;
//!     }
//!     graph.add_edge("Pune", "Mumbai", 3.0)?;
//!     graph.add_edge("Mumbai", "Nashik", 4.0)?;
//!
//!     let route = find_shortest_path(&graph, &"Pune", &"Nashik")?;
//!     assert_eq!(route.to_string(), "Pune -> Mumbai -> Nashik (cost 7)");
//!
//!     // Unreachable targets are a normal result, not an error.
//!     graph.add_node("Goa")?;
//!     assert!(!find_shortest_path(&graph, &"Pune", &"Goa")?.is_reachable());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::float_cmp, clippy::unreadable_literal))]

pub mod config;
pub mod engine;
pub mod error;
#[cfg(test)]
mod error_tests;
pub mod graph;
pub mod presets;
pub mod store;

pub use config::{EngineConfig, RoutewiseConfig, SelectionStrategy, StoreConfig};
pub use engine::{find_shortest_path, CancelToken, PathResult, RouteLeg, ShortestPathEngine};
pub use error::{Error, Result};
pub use graph::{
    Directedness, Graph, GraphData, GraphStats, GraphView, NodeId, Position, WeightedEdge,
};
pub use store::{GraphStore, SnapshotStore};
