//! Error types for the test framework.

use thiserror::Error;
use varlen_expand::ExpandError;
use varlen_graph::GraphError;

/// Result type for fixture operations.
pub type FixtureResult<T> = Result<T, FixtureError>;

/// Errors that can occur when building fixtures or running scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// A name was used that the fixture does not know.
    #[error("unknown name '{name}'")]
    UnknownName { name: String },

    /// A name was bound twice.
    #[error("name '{name}' is already bound")]
    DuplicateName { name: String },

    /// Graph construction failed.
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    /// The expansion itself failed.
    #[error("expansion failed in scenario '{scenario}': {source}")]
    Expansion {
        scenario: String,
        source: ExpandError,
    },
}

impl FixtureError {
    pub fn unknown_name(name: impl Into<String>) -> Self {
        Self::UnknownName { name: name.into() }
    }

    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    pub fn expansion(scenario: impl Into<String>, source: ExpandError) -> Self {
        Self::Expansion {
            scenario: scenario.into(),
            source,
        }
    }
}
