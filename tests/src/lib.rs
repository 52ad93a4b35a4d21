//! VARLEN integration test framework.
//!
//! Builds small named graphs, runs variable-length expansions over them and
//! renders the results with names so tests can compare readable strings.
//!
//! # Example
//!
//! ```ignore
//! use varlen_tests::prelude::*;
//!
//! let fixture = GraphFixture::new()
//!     .node("x")
//!     .edge("e1", "n1", "n2")
//!     .edge("e2", "n2", "n3");
//!
//! let outcome = Scenario::new("two hops", fixture)
//!     .seed(&["x"], &["n1"])
//!     .hops(2, 2)
//!     .run()?;
//!
//! assert_eq!(outcome.paths(), vec!["[x, [n1, e1, n2, e2], n3]"]);
//! ```

mod error;

pub use error::{FixtureError, FixtureResult};
pub use fixture::{GraphFixture, EDGE_LABEL, NODE_LABEL};
pub use random::{node_name, random_fixture};
pub use scenario::{JoinKind, Outcome, Scenario};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        random_fixture, FixtureError, FixtureResult, GraphFixture, JoinKind, Outcome, Scenario,
    };
    pub use varlen_core::{Embedding, EmbeddingEntry, GraphId};
    pub use varlen_expand::{
        CandidateEdges, EdgeWithTiePoint, ExpandConfig, ExpandDirection, ExpandError,
        PathSemantics,
    };
    pub use varlen_graph::{EdgeScan, Graph};
}
