//! Percentile-based outlier clipping.

use anyhow::Result;
use tracing::debug;

use scrub_model::{Cell, ColumnKind, Table};

use crate::pipeline::{CleaningStage, PipelineState};
use crate::stats;

/// Bounds numeric columns to the configured percentile range of their own
/// (post-imputation) distribution. Degenerate columns, where the two
/// percentiles coincide, are left unmodified.
pub struct OutlierClipper {
    lower: f64,
    upper: f64,
}

impl OutlierClipper {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }
}

impl CleaningStage for OutlierClipper {
    fn apply(&self, mut table: Table, state: &mut PipelineState) -> Result<Table> {
        let mut clipped_total = 0usize;
        for column in &mut table.columns {
            if column.kind != ColumnKind::Number {
                continue;
            }
            let mut sorted: Vec<f64> = column.numbers().collect();
            sorted.sort_by(f64::total_cmp);
            let (Some(low), Some(high)) = (
                stats::percentile(&sorted, self.lower),
                stats::percentile(&sorted, self.upper),
            ) else {
                continue;
            };
            if low >= high {
                continue;
            }
            let mut clipped = 0usize;
            for cell in &mut column.cells {
                let Cell::Number(value) = cell else {
                    continue;
                };
                let bounded = value.clamp(low, high);
                if bounded != *value {
                    *cell = Cell::Number(bounded);
                    clipped += 1;
                }
            }
            if clipped > 0 {
                debug!(column = %column.name, clipped, low, high, "clipped outliers");
            }
            clipped_total += clipped;
        }
        state.clipped_cells = clipped_total;
        Ok(table)
    }

    fn stage_name(&self) -> &'static str {
        "clip_outliers"
    }
}
