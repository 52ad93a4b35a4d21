//! Identity type for graph elements.
//!
//! Nodes and edges share a single identifier namespace:
//! - Unique across the whole graph
//! - Immutable once assigned
//! - Opaque to the expansion stage

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a node or an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphId(pub u64);

impl GraphId {
    /// Create a new GraphId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl From<u64> for GraphId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
