//! Shortest-path engine.
//!
//! [`ShortestPathEngine`] reads a graph through [`GraphView`](crate::GraphView)
//! and never mutates it. Each call owns its scratch state, so concurrent
//! queries against the same `Arc<Graph>` need no locking.

mod cancel;
mod dijkstra;
mod result;


pub use crate::config::SelectionStrategy;
pub use cancel::CancelToken;
pub use dijkstra::{find_shortest_path, ShortestPathEngine};
pub use result::{PathResult, RouteLeg};
