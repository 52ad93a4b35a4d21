//! Expansion error types.

use thiserror::Error;

/// Errors that can occur while expanding variable-length paths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    /// A seed could not be turned into a partial match.
    #[error("Invalid seed: {reason}")]
    InvalidSeed { reason: String },

    /// Hop bounds or column settings are unusable.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Join input broke the tie-point contract.
    #[error("Join contract violation: {message}")]
    JoinContractViolation { message: String },

    /// The candidate edge collaborator failed.
    #[error("Candidate edge retrieval failed: {message}")]
    Candidates { message: String },
}

impl ExpandError {
    pub fn invalid_seed(reason: impl Into<String>) -> Self {
        Self::InvalidSeed {
            reason: reason.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn join_contract_violation(message: impl Into<String>) -> Self {
        Self::JoinContractViolation {
            message: message.into(),
        }
    }

    pub fn candidates(message: impl Into<String>) -> Self {
        Self::Candidates {
            message: message.into(),
        }
    }

    /// Fatal errors abort the whole expansion. Only seed errors are isolated.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::InvalidSeed { .. })
    }
}

/// Result type for expansion operations.
pub type ExpandResult<T> = Result<T, ExpandError>;
