//! In-memory weighted graph model.
//!
//! Provides the mutable [`Graph`] value type, the read-only [`GraphView`]
//! seam consumed by the shortest-path engine, and the plain value types the
//! rest of the crate passes around.
//!
//! # Example
//!
//! ```rust
//! use routewise_core::graph::{Graph, Position};
//!
//! let mut graph = Graph::undirected();
//! graph.add_node_at("A".to_string(), Position::new(0.0, 0.0)).unwrap();
//! graph.add_node_at("B".to_string(), (3.0, 4.0)).unwrap();
//! graph.add_edge("A".to_string(), "B".to_string(), 5.0).unwrap();
//!
//! assert_eq!(graph.edge_weight(&"B".to_string(), &"A".to_string()), Some(5.0));
//! assert_eq!(graph.stats().edge_count, 1);
//! ```

mod adjacency;
mod types;
mod view;


pub use adjacency::Graph;
pub use types::{
    is_valid_weight, Directedness, GraphData, GraphStats, NodeId, Position, WeightedEdge,
};
pub use view::GraphView;
