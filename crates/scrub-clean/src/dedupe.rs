//! Exact-duplicate row removal.

use std::collections::BTreeSet;

use anyhow::Result;
use tracing::debug;

use scrub_model::Table;

use crate::pipeline::{CleaningStage, PipelineState};

/// Removes rows identical to an earlier row across every column, missing
/// markers included. Keeps the first occurrence and preserves the relative
/// order of survivors.
pub struct Deduplicator;

impl CleaningStage for Deduplicator {
    fn apply(&self, mut table: Table, state: &mut PipelineState) -> Result<Table> {
        let height = table.height();
        let mut seen = BTreeSet::new();
        let mut keep = Vec::with_capacity(height);
        for row in 0..height {
            keep.push(seen.insert(table.row_key(row)));
        }
        let removed = keep.iter().filter(|&&flag| !flag).count();
        if removed > 0 {
            table.retain_rows(&keep);
            debug!(removed, "dropped duplicate rows");
        }
        state.duplicates_removed = removed;
        Ok(table)
    }

    fn stage_name(&self) -> &'static str {
        "deduplicate"
    }
}
