//! Core graph storage implementation.

use crate::index::AdjacencyIndex;
use crate::{GraphError, GraphResult};
use std::collections::HashMap;
use varlen_core::{Embedding, GraphId};

/// ID allocator shared by nodes and edges.
#[derive(Debug)]
struct IdAllocator {
    next_id: u64,
}

impl IdAllocator {
    fn new() -> Self {
        Self { next_id: 1 }
    }

    fn alloc(&mut self) -> GraphId {
        let id = GraphId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

/// A node in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: GraphId,
    pub label: String,
}

/// A directed, labelled edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: GraphId,
    pub label: String,
    pub source: GraphId,
    pub target: GraphId,
}

impl Edge {
    /// The edge as an embedding `[source, edge, target]`.
    pub fn to_embedding(&self) -> Embedding {
        Embedding::from_ids([self.source, self.id, self.target])
    }
}

/// The in-memory graph storage.
#[derive(Debug)]
pub struct Graph {
    /// Node storage
    nodes: HashMap<GraphId, Node>,
    /// Edge storage
    edges: HashMap<GraphId, Edge>,
    /// ID allocator
    id_alloc: IdAllocator,
    /// Adjacency index
    adj_index: AdjacencyIndex,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: HashMap::new(),
            id_alloc: IdAllocator::new(),
            adj_index: AdjacencyIndex::new(),
        }
    }

    // ==================== Node Operations ====================

    /// Create a node and return its ID.
    pub fn add_node(&mut self, label: impl Into<String>) -> GraphId {
        let id = self.id_alloc.alloc();
        self.nodes.insert(
            id,
            Node {
                id,
                label: label.into(),
            },
        );
        id
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All node IDs in ascending order.
    pub fn node_ids(&self) -> Vec<GraphId> {
        let mut ids: Vec<GraphId> = self.nodes.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    // ==================== Edge Operations ====================

    /// Create an edge between two existing nodes.
    pub fn add_edge(
        &mut self,
        label: impl Into<String>,
        source: GraphId,
        target: GraphId,
    ) -> GraphResult<GraphId> {
        for node in [source, target] {
            if !self.nodes.contains_key(&node) {
                return Err(GraphError::NodeNotFound(node));
            }
        }

        let id = self.id_alloc.alloc();
        let edge = Edge {
            id,
            label: label.into(),
            source,
            target,
        };
        self.adj_index.insert(id, &edge.label, source, target);
        self.edges.insert(id, edge);
        Ok(id)
    }

    pub fn get_edge(&self, id: GraphId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges leaving a node, optionally restricted to one label.
    pub fn edges_from<'a>(
        &'a self,
        node: GraphId,
        label: Option<&'a str>,
    ) -> impl Iterator<Item = GraphId> + 'a {
        self.adj_index.edges_from(node, label)
    }

    /// Edges entering a node, optionally restricted to one label.
    pub fn edges_to<'a>(
        &'a self,
        node: GraphId,
        label: Option<&'a str>,
    ) -> impl Iterator<Item = GraphId> + 'a {
        self.adj_index.edges_to(node, label)
    }

    /// Every edge as an `[source, edge, target]` embedding, in edge id order.
    pub fn edge_embeddings(&self, label: Option<&str>) -> Vec<Embedding> {
        let mut edges: Vec<&Edge> = self
            .edges
            .values()
            .filter(|e| label.map_or(true, |l| e.label == l))
            .collect();
        edges.sort_unstable_by_key(|e| e.id);
        edges.into_iter().map(Edge::to_embedding).collect()
    }
}
