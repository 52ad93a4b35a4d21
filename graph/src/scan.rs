//! Frontier scans producing join tuples for expansion.

use crate::Graph;
use std::collections::HashSet;
use tracing::trace;
use varlen_core::GraphId;
use varlen_expand::{
    CandidateEdges, EdgeWithTiePoint, ExpandDirection, ExpandError, ExpandResult,
};

/// Candidate edge source backed by a [`Graph`].
///
/// Returns the edges adjacent to the frontier in the configured direction,
/// restricted to a set of labels when one is given.
#[derive(Debug, Clone)]
pub struct EdgeScan<'g> {
    graph: &'g Graph,
    labels: Option<Vec<String>>,
    direction: ExpandDirection,
}

impl<'g> EdgeScan<'g> {
    /// Scan outgoing edges of any label.
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            labels: None,
            direction: ExpandDirection::Outgoing,
        }
    }

    /// Only follow edges carrying one of `labels`.
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_direction(mut self, direction: ExpandDirection) -> Self {
        self.direction = direction;
        self
    }

    fn adjacent(&self, node: GraphId) -> Vec<GraphId> {
        let lookup = |label: Option<&str>| -> Vec<GraphId> {
            match self.direction {
                ExpandDirection::Outgoing => self.graph.edges_from(node, label).collect(),
                ExpandDirection::Incoming => self.graph.edges_to(node, label).collect(),
            }
        };

        match &self.labels {
            Some(labels) => {
                let mut edges: Vec<GraphId> =
                    labels.iter().flat_map(|l| lookup(Some(l.as_str()))).collect();
                edges.sort_unstable();
                edges.dedup();
                edges
            }
            None => lookup(None),
        }
    }
}

impl CandidateEdges for EdgeScan<'_> {
    fn candidates(&self, frontier: &HashSet<GraphId>) -> ExpandResult<Vec<EdgeWithTiePoint>> {
        let mut nodes: Vec<GraphId> = frontier.iter().copied().collect();
        nodes.sort_unstable();

        let mut tuples = Vec::new();
        for node in nodes {
            for edge_id in self.adjacent(node) {
                let edge = self.graph.get_edge(edge_id).ok_or_else(|| {
                    ExpandError::candidates(format!(
                        "adjacency index lists missing edge {}",
                        edge_id
                    ))
                })?;
                tuples.push(self.direction.orient(edge.source, edge.id, edge.target));
            }
        }

        trace!(
            frontier = frontier.len(),
            candidates = tuples.len(),
            "scanned frontier"
        );
        Ok(tuples)
    }
}
