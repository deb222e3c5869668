use std::path::PathBuf;

use serde::Serialize;

/// The report produced by a `clean` run.
#[derive(Debug, Serialize)]
pub struct CleanResult {
    pub input: PathBuf,
    /// Absent on a dry run.
    pub output: Option<PathBuf>,
    pub delimiter: char,
    pub rows_in: usize,
    pub rows_out: usize,
    pub columns_in: usize,
    pub columns_out: usize,
    pub duplicates_removed: usize,
    pub pruned_columns: Vec<String>,
    pub imputed_cells: usize,
    pub clipped_cells: usize,
    /// Missing markers left in the cleaned table; zero unless imputation
    /// had nothing to fill from.
    pub missing_remaining: usize,
}

/// The report produced by a `detect` run.
#[derive(Debug, Serialize)]
pub struct DetectResult {
    pub input: PathBuf,
    pub delimiter: char,
    pub columns: usize,
}
