//! Error types for Routewise.

use thiserror::Error;

/// Result type alias for Routewise operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Routewise operations.
///
/// An unreachable target is not an error: it is reported as a
/// [`PathResult`](crate::PathResult) with an empty path and infinite cost.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Node identifier is absent from the graph's node set.
    #[error("Node '{0}' not found")]
    NodeNotFound(String),

    /// Node already exists.
    #[error("Node '{0}' already exists")]
    NodeExists(String),

    /// Edge weight is negative, NaN or infinite.
    #[error("Invalid weight {weight} on edge '{from}' -> '{to}': weights must be finite and non-negative")]
    InvalidWeight {
        /// Tail of the offending edge.
        from: String,
        /// Head of the offending edge.
        to: String,
        /// The rejected weight.
        weight: f64,
    },

    /// The target is connected to the source, but every path to it costs
    /// more than `f64::MAX`.
    #[error("Cost of every path from '{from}' to '{to}' overflows f64")]
    CostOverflow {
        /// Query source.
        from: String,
        /// Query target.
        to: String,
    },

    /// Two consecutive path nodes are not connected in the graph.
    #[error("Edge '{from}' -> '{to}' not found")]
    EdgeNotFound {
        /// Tail of the missing edge.
        from: String,
        /// Head of the missing edge.
        to: String,
    },

    /// Snapshot not found.
    #[error("Snapshot '{0}' not found")]
    SnapshotNotFound(String),

    /// Snapshot name is empty or whitespace-only.
    #[error("Invalid snapshot name: '{0}'")]
    InvalidSnapshotName(String),

    /// Saving a new snapshot would exceed the configured limit.
    #[error("Snapshot limit reached ({0} snapshots)")]
    SnapshotLimitReached(usize),

    /// Search was cancelled through its [`CancelToken`](crate::CancelToken).
    #[error("Shortest path search cancelled")]
    Cancelled,

    /// Configuration could not be loaded or extracted.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}
