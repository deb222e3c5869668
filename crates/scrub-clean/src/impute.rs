//! Missing-value imputation.
//!
//! Numeric columns take their median, text columns their most frequent
//! value, datetime columns their median timestamp. A text column whose mode
//! cannot be computed falls back to the literal "Unknown"; after this stage
//! no column should contain the missing marker.

use anyhow::Result;
use chrono::NaiveDateTime;
use tracing::debug;

use scrub_model::{Cell, Column, ColumnKind, Table};

use crate::pipeline::{CleaningStage, PipelineState};
use crate::stats;

/// Fallback fill for text columns without a usable mode.
pub const TEXT_FALLBACK: &str = "Unknown";

pub struct Imputer;

impl CleaningStage for Imputer {
    fn apply(&self, mut table: Table, state: &mut PipelineState) -> Result<Table> {
        let mut filled_total = 0usize;
        for column in &mut table.columns {
            let filled = match column.kind {
                ColumnKind::Number => impute_numeric(column),
                ColumnKind::DateTime => impute_datetime(column),
                ColumnKind::Text => impute_text(column),
            };
            if filled > 0 {
                debug!(column = %column.name, filled, "imputed missing cells");
            }
            filled_total += filled;
        }
        state.imputed_cells = filled_total;
        Ok(table)
    }

    fn stage_name(&self) -> &'static str {
        "impute"
    }
}

fn impute_numeric(column: &mut Column) -> usize {
    let values: Vec<f64> = column.numbers().collect();
    let Some(median) = stats::median(&values) else {
        return 0;
    };
    fill_missing(column, Cell::Number(median))
}

fn impute_datetime(column: &mut Column) -> usize {
    let mut stamps: Vec<NaiveDateTime> = column
        .cells
        .iter()
        .filter_map(|cell| cell.as_datetime())
        .collect();
    if stamps.is_empty() {
        return 0;
    }
    stamps.sort();
    // Lower middle: the mean of two timestamps is not a meaningful fill.
    let median = stamps[(stamps.len() - 1) / 2];
    fill_missing(column, Cell::DateTime(median))
}

fn impute_text(column: &mut Column) -> usize {
    let fill = stats::mode(column.cells.iter().filter_map(|cell| cell.as_text()))
        .unwrap_or_else(|| TEXT_FALLBACK.to_string());
    fill_missing(column, Cell::Text(fill))
}

fn fill_missing(column: &mut Column, fill: Cell) -> usize {
    let mut filled = 0usize;
    for cell in &mut column.cells {
        if cell.is_missing() {
            *cell = fill.clone();
            filled += 1;
        }
    }
    filled
}
