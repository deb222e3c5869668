//! Sparse column removal.

use anyhow::Result;
use tracing::debug;

use scrub_model::Table;

use crate::pipeline::{CleaningStage, PipelineState};

/// Drops every column whose missing fraction strictly exceeds the
/// threshold. Each column is judged independently against the table state
/// at this stage (post-dedup, pre-coercion).
pub struct SparseColumnPruner {
    threshold: f64,
}

impl SparseColumnPruner {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl CleaningStage for SparseColumnPruner {
    fn apply(&self, mut table: Table, state: &mut PipelineState) -> Result<Table> {
        let mut pruned = Vec::new();
        table.columns.retain(|column| {
            if column.missing_fraction() > self.threshold {
                pruned.push(column.name.clone());
                false
            } else {
                true
            }
        });
        if !pruned.is_empty() {
            debug!(columns = ?pruned, "dropped sparse columns");
        }
        state.pruned_columns = pruned;
        Ok(table)
    }

    fn stage_name(&self) -> &'static str {
        "prune_sparse"
    }
}
