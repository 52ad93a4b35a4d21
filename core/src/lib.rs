//! VARLEN Core Types
//!
//! This crate provides the foundational types shared by the expansion stage
//! and its collaborators:
//! - Identity type (GraphId) shared by nodes and edges
//! - Embedding, the ordered binding of pattern variables to identifiers
//! - Common error types

mod embedding;
mod error;
mod id;

pub use embedding::*;
pub use error::*;
pub use id::*;
