//! Embeddings: ordered bindings of pattern variables to graph identifiers.
//!
//! An embedding is an append-only sequence of entries. Each entry is either a
//! single identifier (a node or edge variable) or a list of identifiers (a
//! variable-length path). Downstream operators bind pattern variables by
//! column position, so entry order is significant.

use crate::{CoreError, CoreResult, GraphId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single column of an embedding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmbeddingEntry {
    /// A single node or edge identifier.
    Id(GraphId),
    /// An ordered list of identifiers.
    IdList(Vec<GraphId>),
}

impl EmbeddingEntry {
    /// Get as a single identifier.
    pub fn as_id(&self) -> Option<GraphId> {
        match self {
            EmbeddingEntry::Id(id) => Some(*id),
            EmbeddingEntry::IdList(_) => None,
        }
    }

    /// Get as an identifier list.
    pub fn as_id_list(&self) -> Option<&[GraphId]> {
        match self {
            EmbeddingEntry::Id(_) => None,
            EmbeddingEntry::IdList(ids) => Some(ids),
        }
    }

    /// All identifiers held by this entry, in order.
    pub fn ids(&self) -> &[GraphId] {
        match self {
            EmbeddingEntry::Id(id) => std::slice::from_ref(id),
            EmbeddingEntry::IdList(ids) => ids,
        }
    }
}

impl From<GraphId> for EmbeddingEntry {
    fn from(id: GraphId) -> Self {
        EmbeddingEntry::Id(id)
    }
}

impl From<Vec<GraphId>> for EmbeddingEntry {
    fn from(ids: Vec<GraphId>) -> Self {
        EmbeddingEntry::IdList(ids)
    }
}

impl fmt::Display for EmbeddingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmbeddingEntry::Id(id) => write!(f, "{}", id),
            EmbeddingEntry::IdList(ids) => {
                write!(f, "[")?;
                for (i, id) in ids.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", id)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// An ordered, appendable sequence of embedding entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Embedding {
    entries: Vec<EmbeddingEntry>,
}

impl Embedding {
    /// Create a new empty embedding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an embedding of single-identifier entries.
    pub fn from_ids(ids: impl IntoIterator<Item = GraphId>) -> Self {
        ids.into_iter().map(EmbeddingEntry::Id).collect()
    }

    /// Append a single identifier entry.
    pub fn push_id(&mut self, id: GraphId) {
        self.entries.push(EmbeddingEntry::Id(id));
    }

    /// Append an identifier list entry.
    pub fn push_id_list(&mut self, ids: impl IntoIterator<Item = GraphId>) {
        self.entries
            .push(EmbeddingEntry::IdList(ids.into_iter().collect()));
    }

    /// Number of entries (columns).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry at a column.
    pub fn entry(&self, column: usize) -> Option<&EmbeddingEntry> {
        self.entries.get(column)
    }

    /// Get the single identifier stored at a column.
    pub fn id_at(&self, column: usize) -> CoreResult<GraphId> {
        self.entry(column)
            .ok_or_else(|| CoreError::column_out_of_bounds(column, self.len()))?
            .as_id()
            .ok_or_else(|| CoreError::not_an_id(column))
    }

    /// Get the identifier list stored at a column.
    pub fn id_list_at(&self, column: usize) -> CoreResult<&[GraphId]> {
        self.entry(column)
            .ok_or_else(|| CoreError::column_out_of_bounds(column, self.len()))?
            .as_id_list()
            .ok_or_else(|| CoreError::not_an_id_list(column))
    }

    /// All entries in column order.
    pub fn entries(&self) -> &[EmbeddingEntry] {
        &self.entries
    }

    /// Every identifier in the embedding, list entries flattened in place.
    pub fn ids(&self) -> impl Iterator<Item = GraphId> + '_ {
        self.entries.iter().flat_map(|e| e.ids().iter().copied())
    }

    /// Identifiers held by the given columns. Columns past the end are skipped.
    pub fn ids_in_columns<'a>(
        &'a self,
        columns: &'a [usize],
    ) -> impl Iterator<Item = GraphId> + 'a {
        columns
            .iter()
            .filter_map(|&c| self.entry(c))
            .flat_map(|e| e.ids().iter().copied())
    }

    /// Check if an identifier occurs anywhere in the embedding.
    pub fn contains_id(&self, id: GraphId) -> bool {
        self.entries.iter().any(|e| e.ids().contains(&id))
    }
}

impl FromIterator<EmbeddingEntry> for Embedding {
    fn from_iter<I: IntoIterator<Item = EmbeddingEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Embedding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", entry)?;
        }
        write!(f, "]")
    }
}
