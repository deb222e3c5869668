//! Ordered stage execution.
//!
//! Each cleaning stage implements [`CleaningStage`] and is run in sequence,
//! consuming the previous stage's table and producing a new one. Shared
//! counters accumulate in [`PipelineState`] for the final report.
//!
//! # Standard order
//!
//! 1. `schema_normalize`   - canonical column names
//! 2. `sanitize_text`      - trim + missing-token normalization
//! 3. `deduplicate`        - drop exact-duplicate rows
//! 4. `prune_sparse`       - drop mostly-missing columns
//! 5. `coerce_types`       - date and numeric reinterpretation
//! 6. `standardize_categories` - fixed categorical domains
//! 7. `impute`             - median / mode fill
//! 8. `clip_outliers`      - percentile bounding

use anyhow::Result;
use tracing::debug;

use scrub_model::Table;

use crate::clip::OutlierClipper;
use crate::coerce::SemanticTypeCoercer;
use crate::config::CleanConfig;
use crate::dedupe::Deduplicator;
use crate::impute::Imputer;
use crate::prune::SparseColumnPruner;
use crate::sanitize::TextSanitizer;
use crate::schema::SchemaNormalizer;
use crate::standardize::CategoryStandardizer;

/// A single transformation stage.
pub trait CleaningStage: Send + Sync {
    /// Consume the table and produce the transformed one.
    fn apply(&self, table: Table, state: &mut PipelineState) -> Result<Table>;

    /// Stable name for logging and the stage report.
    fn stage_name(&self) -> &'static str;
}

/// Counters shared across stages, reported to the caller afterwards.
#[derive(Debug, Default)]
pub struct PipelineState {
    /// Duplicate rows detected and removed.
    pub duplicates_removed: usize,
    /// Names of columns dropped by the sparse pruner.
    pub pruned_columns: Vec<String>,
    /// Cells filled by the imputer.
    pub imputed_cells: usize,
    /// Cells moved inside the percentile bounds.
    pub clipped_cells: usize,
    /// Stage names in execution order, for debugging.
    pub executed_stages: Vec<String>,
}

impl PipelineState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// An ordered pipeline of cleaning stages.
pub struct CleaningPipeline {
    stages: Vec<Box<dyn CleaningStage>>,
}

impl Default for CleaningPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl CleaningPipeline {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    pub fn add_stage(mut self, stage: Box<dyn CleaningStage>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Run every stage in order over a fresh state.
    pub fn execute(&self, table: Table) -> Result<(Table, PipelineState)> {
        let mut state = PipelineState::new();
        let table = self.execute_with_state(table, &mut state)?;
        Ok((table, state))
    }

    /// Run every stage in order, accumulating into the given state.
    pub fn execute_with_state(
        &self,
        mut table: Table,
        state: &mut PipelineState,
    ) -> Result<Table> {
        for stage in &self.stages {
            table = stage.apply(table, state)?;
            state.executed_stages.push(stage.stage_name().to_string());
            debug!(
                stage = stage.stage_name(),
                rows = table.height(),
                columns = table.width(),
                "stage complete"
            );
        }
        Ok(table)
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.stage_name()).collect()
    }
}

/// Build the standard cleaning pipeline from a configuration.
pub fn build_default_pipeline(config: &CleanConfig) -> CleaningPipeline {
    CleaningPipeline::new()
        .add_stage(Box::new(SchemaNormalizer))
        .add_stage(Box::new(TextSanitizer::new(&config.missing_tokens)))
        .add_stage(Box::new(Deduplicator))
        .add_stage(Box::new(SparseColumnPruner::new(config.sparse_threshold)))
        .add_stage(Box::new(SemanticTypeCoercer::new(
            &config.date_name_hints,
            config.numeric_sample_size,
            config.numeric_threshold,
        )))
        .add_stage(Box::new(CategoryStandardizer::new(
            config.category_maps.clone(),
        )))
        .add_stage(Box::new(Imputer))
        .add_stage(Box::new(OutlierClipper::new(
            config.clip_lower,
            config.clip_upper,
        )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pipeline_runs_stages_in_documented_order() {
        let pipeline = build_default_pipeline(&CleanConfig::default());
        assert_eq!(
            pipeline.stage_names(),
            vec![
                "schema_normalize",
                "sanitize_text",
                "deduplicate",
                "prune_sparse",
                "coerce_types",
                "standardize_categories",
                "impute",
                "clip_outliers",
            ]
        );
    }

    #[test]
    fn executed_stages_are_recorded() {
        let pipeline = build_default_pipeline(&CleanConfig::default());
        let (_, state) = pipeline.execute(Table::default()).unwrap();
        assert_eq!(state.executed_stages.len(), 8);
    }
}
