//! Per-hop admission rules.

use crate::{EdgeWithTiePoint, ExpandConfig, PartialPathMatch, PathSemantics};
use varlen_core::GraphId;

/// What happens to a joined `(match, edge)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HopOutcome {
    /// The hop repeats something the semantics forbid.
    Rejected,
    /// The hop is valid. A `terminal` match is reported but not grown further.
    Accepted {
        grown: PartialPathMatch,
        terminal: bool,
    },
}

/// Repetition and closing rules derived from the configuration.
#[derive(Debug, Clone)]
pub(crate) struct HopPolicy {
    semantics: PathSemantics,
    distinct_columns: Option<Vec<usize>>,
    closing_column: Option<usize>,
}

impl HopPolicy {
    pub(crate) fn new(config: &ExpandConfig) -> Self {
        Self {
            semantics: config.semantics,
            distinct_columns: config.distinct_columns.clone(),
            closing_column: config.closing_column,
        }
    }

    /// The node a reported path has to end on, if a closing column is set.
    pub(crate) fn closing_node(&self, m: &PartialPathMatch) -> Option<GraphId> {
        self.closing_column
            .and_then(|column| m.base().id_at(column).ok())
    }

    /// Whether a match ends where the closing column requires.
    pub(crate) fn closes(&self, m: &PartialPathMatch) -> bool {
        match self.closing_column {
            Some(_) => self.closing_node(m) == Some(m.endpoint()),
            None => true,
        }
    }

    /// Decide whether `m` may take the hop along `edge`.
    ///
    /// A hop onto the closing node completes the path under every semantics:
    /// it is exempt from the node check and is never grown further.
    pub(crate) fn apply(&self, m: &PartialPathMatch, edge: &EdgeWithTiePoint) -> HopOutcome {
        let closing = self.closing_node(m) == Some(edge.target);
        let repeats = match self.semantics {
            PathSemantics::Walk => false,
            PathSemantics::Trail => self.repeats(m, edge.edge_id),
            PathSemantics::SimplePath => !closing && self.repeats(m, edge.target),
        };

        if repeats {
            return HopOutcome::Rejected;
        }
        HopOutcome::Accepted {
            grown: m.grow(edge),
            terminal: closing,
        }
    }

    /// Whether `id` already occurs in the path or in a checked base column.
    fn repeats(&self, m: &PartialPathMatch, id: GraphId) -> bool {
        match &self.distinct_columns {
            Some(columns) => {
                m.path_contains(id) || m.base().ids_in_columns(columns).any(|b| b == id)
            }
            None => m.visits(id),
        }
    }
}
