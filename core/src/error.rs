//! Common error types for VARLEN.

use thiserror::Error;

/// Errors that can occur when reading embedding columns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Column index past the end of the embedding.
    #[error("Column {column} out of bounds for embedding with {len} entries")]
    ColumnOutOfBounds { column: usize, len: usize },

    /// Column holds an id list where a single id was expected.
    #[error("Column {column} is not a single identifier")]
    NotAnId { column: usize },

    /// Column holds a single id where an id list was expected.
    #[error("Column {column} is not an identifier list")]
    NotAnIdList { column: usize },
}

impl CoreError {
    pub fn column_out_of_bounds(column: usize, len: usize) -> Self {
        Self::ColumnOutOfBounds { column, len }
    }

    pub fn not_an_id(column: usize) -> Self {
        Self::NotAnId { column }
    }

    pub fn not_an_id_list(column: usize) -> Self {
        Self::NotAnIdList { column }
    }
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
