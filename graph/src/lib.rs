//! VARLEN Graph Storage
//!
//! In-memory property graph acting as the candidate edge source for
//! expansion:
//! - Node and labelled edge storage
//! - Adjacency index: find edges from/to a node, optionally by label
//! - Edge scan: turn a frontier into join tuples, filtered by label and
//!   direction

mod error;
mod graph;
mod index;
mod scan;

pub use error::{GraphError, GraphResult};
pub use graph::{Edge, Graph, Node};
pub use scan::EdgeScan;
