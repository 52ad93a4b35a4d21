//! Candidate edges annotated with their join key.

use crate::{ExpandError, ExpandResult};
use std::collections::HashSet;
use varlen_core::{Embedding, GraphId};

/// Direction in which a relationship is traversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpandDirection {
    /// Follow edges from source to target.
    #[default]
    Outgoing,
    /// Follow edges from target back to source.
    Incoming,
}

impl ExpandDirection {
    /// Turn a stored `(source, edge, target)` triple into a join tuple.
    pub fn orient(self, source: GraphId, edge_id: GraphId, target: GraphId) -> EdgeWithTiePoint {
        match self {
            ExpandDirection::Outgoing => EdgeWithTiePoint::new(source, edge_id, target),
            ExpandDirection::Incoming => EdgeWithTiePoint::new(target, edge_id, source),
        }
    }
}

/// A single-hop candidate edge.
///
/// `tie_point` is the node the hop starts from and is matched against the
/// endpoint of a partial match; `edge_id` and `target` are appended on a
/// successful hop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeWithTiePoint {
    pub tie_point: GraphId,
    pub edge_id: GraphId,
    pub target: GraphId,
}

impl EdgeWithTiePoint {
    pub fn new(tie_point: GraphId, edge_id: GraphId, target: GraphId) -> Self {
        Self {
            tie_point,
            edge_id,
            target,
        }
    }

    /// Build a tuple from an edge embedding `[source, edge, target]`.
    pub fn from_embedding(edge: &Embedding, direction: ExpandDirection) -> ExpandResult<Self> {
        let column = |c: usize| {
            edge.id_at(c).map_err(|e| {
                ExpandError::join_contract_violation(format!(
                    "malformed edge embedding {}: {}",
                    edge, e
                ))
            })
        };
        Ok(direction.orient(column(0)?, column(1)?, column(2)?))
    }
}

/// Source of candidate edges for each expansion round.
///
/// Implementations apply their own label, direction and property filters and
/// return only tuples whose tie-point is in `frontier`.
pub trait CandidateEdges {
    fn candidates(&self, frontier: &HashSet<GraphId>) -> ExpandResult<Vec<EdgeWithTiePoint>>;
}

impl CandidateEdges for [EdgeWithTiePoint] {
    fn candidates(&self, frontier: &HashSet<GraphId>) -> ExpandResult<Vec<EdgeWithTiePoint>> {
        Ok(self
            .iter()
            .filter(|e| frontier.contains(&e.tie_point))
            .copied()
            .collect())
    }
}

impl CandidateEdges for Vec<EdgeWithTiePoint> {
    fn candidates(&self, frontier: &HashSet<GraphId>) -> ExpandResult<Vec<EdgeWithTiePoint>> {
        self.as_slice().candidates(frontier)
    }
}

impl<T: CandidateEdges + ?Sized> CandidateEdges for &T {
    fn candidates(&self, frontier: &HashSet<GraphId>) -> ExpandResult<Vec<EdgeWithTiePoint>> {
        (**self).candidates(frontier)
    }
}
