//! Graph error types.

use thiserror::Error;
use varlen_core::GraphId;

/// Errors that can occur during graph operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Node not found.
    #[error("Node not found: {0}")]
    NodeNotFound(GraphId),
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
