//! Partial path matches.

use crate::{EdgeWithTiePoint, ExpandError, ExpandResult};
use std::sync::Arc;
use varlen_core::{Embedding, GraphId};

/// An intermediate result of a variable-length expansion.
///
/// `base` is the immutable prefix produced by earlier operators and is shared
/// between every match grown from the same seed. `path` holds the identifiers
/// visited so far, starting with the start node. `endpoint` is the last node
/// reached; it is kept out of `path` so it can serve as the join key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartialPathMatch {
    base: Arc<Embedding>,
    path: Vec<GraphId>,
    endpoint: GraphId,
}

impl PartialPathMatch {
    /// Create a match whose last seed identifier is the endpoint and whose
    /// preceding identifiers form the path.
    pub fn new(base: Arc<Embedding>, seed: &[GraphId]) -> ExpandResult<Self> {
        let Some((&endpoint, path)) = seed.split_last() else {
            return Err(ExpandError::invalid_seed(
                "seed must contain at least one identifier",
            ));
        };

        Ok(Self {
            base,
            path: path.to_vec(),
            endpoint,
        })
    }

    /// The shared prefix.
    pub fn base(&self) -> &Embedding {
        &self.base
    }

    /// The stored path, start node first.
    pub fn path(&self) -> &[GraphId] {
        &self.path
    }

    /// The frontier node, used as the join key.
    pub fn endpoint(&self) -> GraphId {
        self.endpoint
    }

    /// Extend by one hop.
    ///
    /// `(base, (a, b, c), d) x (d, e, f) -> (base, (a, b, c, d, e), f)`
    ///
    /// The caller guarantees `edge.tie_point == self.endpoint()`.
    pub fn grow(&self, edge: &EdgeWithTiePoint) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 2);
        path.extend_from_slice(&self.path);
        path.push(self.endpoint);
        path.push(edge.edge_id);

        Self {
            base: Arc::clone(&self.base),
            path,
            endpoint: edge.target,
        }
    }

    /// Number of interior elements between the start node and the endpoint:
    /// `2k - 1` after k hops, 0 before the first hop.
    pub fn path_length(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Number of completed hops, the count hop bounds are checked against.
    pub fn hops(&self) -> usize {
        (self.path_length() + 1) / 2
    }

    /// Whether `id` is the endpoint or occurs in the path.
    pub fn path_contains(&self, id: GraphId) -> bool {
        self.endpoint == id || self.path.contains(&id)
    }

    /// Whether `id` occurs in the base, the path or the endpoint.
    pub fn visits(&self, id: GraphId) -> bool {
        self.path_contains(id) || self.base.contains_id(id)
    }

    /// Project into an embedding.
    ///
    /// `(base, (a, b, c), d) -> (base, IdList(a, b, c), Id(d))`
    pub fn to_embedding(&self) -> Embedding {
        let mut embedding = Embedding::clone(&self.base);
        embedding.push_id_list(self.path.iter().copied());
        embedding.push_id(self.endpoint);
        embedding
    }

    /// Project into an embedding, reusing the base when it is no longer shared.
    pub fn into_embedding(self) -> Embedding {
        let mut embedding = Arc::unwrap_or_clone(self.base);
        embedding.push_id_list(self.path);
        embedding.push_id(self.endpoint);
        embedding
    }
}
