//! VARLEN Expand
//!
//! Grow variable-length relationship matches one hop at a time.
//!
//! Responsibilities:
//! - Represent partial path matches (shared prefix, interior path, endpoint)
//! - Extend matches by joining endpoints against candidate edge tie-points
//! - Enforce hop bounds and path uniqueness (walk, trail, simple path)
//! - Project surviving matches into final embeddings

mod config;
mod driver;
mod edge;
mod error;
mod join;
mod partial;
mod policy;

pub use config::{ExpandConfig, HopBounds, PathSemantics};
pub use driver::{
    expand, DriverState, ExpandDriver, ExpandOutput, RoundStats, Seed, SeedRejection,
};
pub use edge::{CandidateEdges, EdgeWithTiePoint, ExpandDirection};
pub use error::{ExpandError, ExpandResult};
pub use join::{HashJoin, KeyJoin, PartitionedHashJoin};
pub use partial::PartialPathMatch;
