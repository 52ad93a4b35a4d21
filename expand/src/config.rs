//! Configuration for variable-length expansion.

use crate::{ExpandError, ExpandResult};
use serde::{Deserialize, Serialize};
use varlen_core::Embedding;

/// Which repetitions a growing path may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathSemantics {
    /// Nodes and edges may repeat. Needs a bounded `max_hops`.
    Walk,
    /// Edges may not repeat; nodes may.
    Trail,
    /// Nodes may not repeat.
    #[default]
    SimplePath,
}

/// Configuration supplied by the planner for one variable-length segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExpandConfig {
    /// Minimum number of hops before a match is reported.
    pub min_hops: i64,
    /// Maximum number of hops; `None` expands to a fixed point.
    pub max_hops: Option<i64>,
    /// Repetition policy applied to every hop.
    pub semantics: PathSemantics,
    /// Base columns taking part in the repetition check (`None`: all).
    pub distinct_columns: Option<Vec<usize>>,
    /// Base column whose node every reported path must end on.
    pub closing_column: Option<usize>,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            min_hops: 1,
            max_hops: Some(1),
            semantics: PathSemantics::SimplePath,
            distinct_columns: None,
            closing_column: None,
        }
    }
}

impl ExpandConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounded expansion between `min_hops` and `max_hops` inclusive.
    pub fn with_hops(mut self, min_hops: i64, max_hops: i64) -> Self {
        self.min_hops = min_hops;
        self.max_hops = Some(max_hops);
        self
    }

    /// Expansion with no upper bound.
    pub fn unbounded(mut self, min_hops: i64) -> Self {
        self.min_hops = min_hops;
        self.max_hops = None;
        self
    }

    pub fn with_semantics(mut self, semantics: PathSemantics) -> Self {
        self.semantics = semantics;
        self
    }

    pub fn with_distinct_columns(mut self, columns: impl Into<Vec<usize>>) -> Self {
        self.distinct_columns = Some(columns.into());
        self
    }

    pub fn with_closing_column(mut self, column: usize) -> Self {
        self.closing_column = Some(column);
        self
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> ExpandResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ExpandError::configuration(format!("invalid expand config: {}", e)))
    }

    /// Check the bounds and convert them to unsigned hop counts.
    pub fn validate(&self) -> ExpandResult<HopBounds> {
        let min = usize::try_from(self.min_hops).map_err(|_| {
            ExpandError::configuration(format!(
                "min_hops must be non-negative, got {}",
                self.min_hops
            ))
        })?;

        let max = match self.max_hops {
            Some(max_hops) => Some(usize::try_from(max_hops).map_err(|_| {
                ExpandError::configuration(format!(
                    "max_hops must be non-negative, got {}",
                    max_hops
                ))
            })?),
            None => None,
        };

        if let Some(max) = max {
            if min > max {
                return Err(ExpandError::configuration(format!(
                    "min_hops ({}) exceeds max_hops ({})",
                    min, max
                )));
            }
        } else if self.semantics == PathSemantics::Walk {
            return Err(ExpandError::configuration(
                "walk semantics requires a bounded max_hops",
            ));
        }

        Ok(HopBounds { min, max })
    }

    /// Check that the configured columns exist in a seed's base embedding.
    pub fn check_base(&self, base: &Embedding) -> ExpandResult<()> {
        if let Some(column) = self.closing_column {
            base.id_at(column).map_err(|e| {
                ExpandError::configuration(format!("closing column unusable: {}", e))
            })?;
        }

        if let Some(columns) = &self.distinct_columns {
            if let Some(&column) = columns.iter().find(|&&c| c >= base.len()) {
                return Err(ExpandError::configuration(format!(
                    "distinct column {} out of bounds for base with {} entries",
                    column,
                    base.len()
                )));
            }
        }

        Ok(())
    }
}

/// Validated hop bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HopBounds {
    pub min: usize,
    pub max: Option<usize>,
}

impl HopBounds {
    /// Whether matches with `hops` completed hops are reported.
    pub fn reports(&self, hops: usize) -> bool {
        hops >= self.min && self.max.map_or(true, |max| hops <= max)
    }

    /// Whether a match with `hops` completed hops may take another one.
    pub fn grows(&self, hops: usize) -> bool {
        self.max.map_or(true, |max| hops < max)
    }
}
