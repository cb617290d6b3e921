//! Configuration management for the graph poet

use serde::{Deserialize, Serialize};

use crate::graph::Representation;

/// Settings used when building a poet from a corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Storage strategy for the affinity graph
    pub representation: Representation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            representation: Representation::Adjacency,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(representation: Representation) -> Self {
        Self { representation }
    }
}
