//! Configuration for Routewise.
//!
//! Settings are layered with `figment`, later sources overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. A TOML file (`routewise.toml` by default)
//! 3. Environment variables prefixed with `ROUTEWISE_`, nested with `__`
//!    (e.g. `ROUTEWISE_ENGINE__STRATEGY=linear_scan`)
//!
//! ```toml
//! [engine]
//! strategy = "binary_heap"
//!
//! [store]
//! directedness = "undirected"
//! max_snapshots = 128
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::Directedness;

/// Default configuration file name looked up by [`RoutewiseConfig::load`].
pub const DEFAULT_CONFIG_FILE: &str = "routewise.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "ROUTEWISE_";

/// How the engine picks the next node to settle.
///
/// Both strategies settle nodes in the same `(distance, id)` order and
/// therefore return identical paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Binary heap with lazy deletion, `O((V + E) log V)`.
    #[default]
    BinaryHeap,
    /// Scan every unvisited node, `O(V²)`. Fine below a few thousand nodes;
    /// does not scale to large or dense graphs.
    LinearScan,
}

/// Shortest-path engine settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Node selection strategy.
    pub strategy: SelectionStrategy,
}

/// Graph store settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Edge semantics of the working graph.
    pub directedness: Directedness,
    /// Maximum number of named snapshots (0 = unlimited).
    pub max_snapshots: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            directedness: Directedness::Undirected,
            max_snapshots: 128,
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutewiseConfig {
    /// Engine section.
    pub engine: EngineConfig,
    /// Store section.
    pub store: StoreConfig,
}

impl RoutewiseConfig {
    /// Loads defaults, then `routewise.toml` from the working directory (if
    /// present), then `ROUTEWISE_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a source holds a value of the wrong shape.
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Same as [`load`](Self::load) with an explicit TOML path.
    ///
    /// A missing file is not an error; its layer is simply empty.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a source holds a value of the wrong shape.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Self = Self::figment()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        tracing::debug!(path = %path.as_ref().display(), ?config, "configuration loaded");
        Ok(config)
    }

    /// Parses a TOML document layered over the defaults, ignoring the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` on malformed TOML or unknown enum values.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(Self::figment().merge(Toml::string(toml)).extract()?)
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
    }
}
