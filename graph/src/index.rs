//! Adjacency index for edge lookups.

use std::collections::{BTreeSet, HashMap};
use varlen_core::GraphId;

type LabelMap = HashMap<String, BTreeSet<GraphId>>;

/// Adjacency index: node -> { outbound: label -> edges, inbound: label -> edges }
#[derive(Debug, Default)]
pub struct AdjacencyIndex {
    /// Edges where the node is the source
    outbound: HashMap<GraphId, LabelMap>,
    /// Edges where the node is the target
    inbound: HashMap<GraphId, LabelMap>,
}

impl AdjacencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, edge_id: GraphId, label: &str, source: GraphId, target: GraphId) {
        self.outbound
            .entry(source)
            .or_default()
            .entry(label.to_string())
            .or_default()
            .insert(edge_id);
        self.inbound
            .entry(target)
            .or_default()
            .entry(label.to_string())
            .or_default()
            .insert(edge_id);
    }

    /// Get edges leaving a node, in id order.
    pub fn edges_from<'a>(
        &'a self,
        node_id: GraphId,
        label: Option<&'a str>,
    ) -> impl Iterator<Item = GraphId> + 'a {
        lookup(&self.outbound, node_id, label)
    }

    /// Get edges entering a node, in id order.
    pub fn edges_to<'a>(
        &'a self,
        node_id: GraphId,
        label: Option<&'a str>,
    ) -> impl Iterator<Item = GraphId> + 'a {
        lookup(&self.inbound, node_id, label)
    }
}

fn lookup<'a>(
    index: &'a HashMap<GraphId, LabelMap>,
    node_id: GraphId,
    label: Option<&'a str>,
) -> impl Iterator<Item = GraphId> + 'a {
    let mut edges: Vec<GraphId> = match (index.get(&node_id), label) {
        (Some(labels), Some(label)) => labels
            .get(label)
            .into_iter()
            .flat_map(|set| set.iter().copied())
            .collect(),
        (Some(labels), None) => labels.values().flat_map(|set| set.iter().copied()).collect(),
        (None, _) => Vec::new(),
    };
    edges.sort_unstable();
    edges.into_iter()
}
