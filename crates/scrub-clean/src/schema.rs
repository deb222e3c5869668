//! Column-name canonicalization stage.

use anyhow::Result;

use scrub_model::{Table, canonical_names};

use crate::pipeline::{CleaningStage, PipelineState};

/// Rewrites every column name into canonical form. Collisions and empty
/// results are resolved by `scrub_model::canonical_names`.
pub struct SchemaNormalizer;

impl CleaningStage for SchemaNormalizer {
    fn apply(&self, mut table: Table, _state: &mut PipelineState) -> Result<Table> {
        let raw: Vec<String> = table.columns.iter().map(|c| c.name.clone()).collect();
        let canonical = canonical_names(&raw);
        for (column, name) in table.columns.iter_mut().zip(canonical) {
            column.name = name;
        }
        Ok(table)
    }

    fn stage_name(&self) -> &'static str {
        "schema_normalize"
    }
}
