//! Semantic type coercion: date columns by name, numeric columns by
//! content sampling. Per-cell parse failures become the missing marker;
//! this stage never fails a run.

use anyhow::Result;
use tracing::debug;

use scrub_model::{Cell, Column, ColumnKind, Table};

use crate::datetime::parse_date_day_first;
use crate::pipeline::{CleaningStage, PipelineState};

pub struct SemanticTypeCoercer {
    date_name_hints: Vec<String>,
    sample_size: usize,
    threshold: f64,
}

impl SemanticTypeCoercer {
    pub fn new(date_name_hints: &[String], sample_size: usize, threshold: f64) -> Self {
        Self {
            date_name_hints: date_name_hints.to_vec(),
            sample_size,
            threshold,
        }
    }

    fn is_date_column(&self, name: &str) -> bool {
        self.date_name_hints.iter().any(|hint| name.contains(hint.as_str()))
    }

    /// Fraction of sampled non-missing values that look numeric.
    fn numeric_likeness(&self, column: &Column) -> f64 {
        let sample: Vec<&str> = column
            .cells
            .iter()
            .filter_map(|cell| cell.as_text())
            .take(self.sample_size)
            .collect();
        if sample.is_empty() {
            return 0.0;
        }
        let numeric_like = sample.iter().filter(|v| looks_numeric(v)).count();
        numeric_like as f64 / sample.len() as f64
    }
}

impl CleaningStage for SemanticTypeCoercer {
    fn apply(&self, mut table: Table, _state: &mut PipelineState) -> Result<Table> {
        // Date pass: name-hinted columns are reparsed day-first.
        for column in &mut table.columns {
            if self.is_date_column(&column.name) {
                coerce_to_datetime(column);
            }
        }

        // Numeric pass: sample remaining text columns for numeric likeness.
        for column in &mut table.columns {
            if column.kind != ColumnKind::Text {
                continue;
            }
            let likeness = self.numeric_likeness(column);
            if likeness > self.threshold {
                debug!(column = %column.name, likeness, "coercing text column to numeric");
                coerce_to_number(column);
            }
        }
        Ok(table)
    }

    fn stage_name(&self) -> &'static str {
        "coerce_types"
    }
}

fn coerce_to_datetime(column: &mut Column) {
    for cell in &mut column.cells {
        *cell = match cell {
            Cell::DateTime(value) => Cell::DateTime(*value),
            Cell::Text(value) => parse_date_day_first(value)
                .map_or(Cell::Missing, Cell::DateTime),
            // A numeric or missing cell has no day-first reading.
            _ => Cell::Missing,
        };
    }
    column.kind = ColumnKind::DateTime;
}

fn coerce_to_number(column: &mut Column) {
    for cell in &mut column.cells {
        *cell = match cell {
            Cell::Number(value) => Cell::Number(*value),
            Cell::Text(value) => parse_stripped_number(value)
                .map_or(Cell::Missing, Cell::Number),
            _ => Cell::Missing,
        };
    }
    column.kind = ColumnKind::Number;
}

/// Numeric-likeness probe: strip thousands-separator commas, allow at most
/// one decimal point, require the rest to be digits.
fn looks_numeric(value: &str) -> bool {
    let stripped = value.trim().replace(',', "");
    let cleaned = match stripped.split_once('.') {
        Some((head, tail)) => format!("{head}{tail}"),
        None => stripped,
    };
    !cleaned.is_empty() && cleaned.bytes().all(|b| b.is_ascii_digit())
}

/// Full numeric parse for the conversion itself. Wider than the probe:
/// signs and exponents parse here even though they do not count toward
/// likeness.
fn parse_stripped_number(value: &str) -> Option<f64> {
    value.trim().replace(',', "").parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn coercer() -> SemanticTypeCoercer {
        let hints: Vec<String> = ["date", "dob", "birth", "joined", "join", "timestamp"]
            .iter()
            .map(|h| (*h).to_string())
            .collect();
        SemanticTypeCoercer::new(&hints, 50, 0.6)
    }

    #[test]
    fn date_named_columns_parse_day_first() {
        let table = Table::new(vec![Column::text(
            "join_date",
            vec![
                Cell::Text("01/02/2020".into()),
                Cell::Text("13/05/2021".into()),
                Cell::Text("garbage".into()),
            ],
        )]);
        let mut state = PipelineState::new();
        let table = coercer().apply(table, &mut state).unwrap();
        let column = table.column("join_date").unwrap();
        assert_eq!(column.kind, ColumnKind::DateTime);
        assert_eq!(
            column.cells[0].as_datetime().map(|d| d.date()),
            NaiveDate::from_ymd_opt(2020, 2, 1)
        );
        assert_eq!(
            column.cells[1].as_datetime().map(|d| d.date()),
            NaiveDate::from_ymd_opt(2021, 5, 13)
        );
        assert_eq!(column.cells[2], Cell::Missing);
    }

    #[test]
    fn numeric_cells_in_date_columns_become_missing() {
        // An integer is not read as an epoch offset; it degrades to
        // missing and gets imputed later.
        let table = Table::new(vec![Column::text(
            "dob",
            vec![Cell::Number(19700101.0), Cell::Text("01/02/2020".into())],
        )]);
        let mut state = PipelineState::new();
        let table = coercer().apply(table, &mut state).unwrap();
        let column = table.column("dob").unwrap();
        assert_eq!(column.kind, ColumnKind::DateTime);
        assert_eq!(column.cells[0], Cell::Missing);
    }

    #[test]
    fn mostly_numeric_text_column_converts() {
        let table = Table::new(vec![Column::text(
            "income",
            vec![
                Cell::Text("1,200".into()),
                Cell::Text("850.5".into()),
                Cell::Text("900".into()),
                Cell::Text("unknown".into()),
            ],
        )]);
        let mut state = PipelineState::new();
        let table = coercer().apply(table, &mut state).unwrap();
        let column = table.column("income").unwrap();
        assert_eq!(column.kind, ColumnKind::Number);
        assert_eq!(column.cells[0], Cell::Number(1200.0));
        assert_eq!(column.cells[1], Cell::Number(850.5));
        assert_eq!(column.cells[3], Cell::Missing);
    }

    #[test]
    fn mostly_textual_column_stays_text() {
        let table = Table::new(vec![Column::text(
            "city",
            vec![
                Cell::Text("Leiden".into()),
                Cell::Text("Delft".into()),
                Cell::Text("42".into()),
            ],
        )]);
        let mut state = PipelineState::new();
        let table = coercer().apply(table, &mut state).unwrap();
        assert_eq!(table.column("city").unwrap().kind, ColumnKind::Text);
    }

    #[test]
    fn exactly_threshold_fraction_does_not_convert() {
        // 3 of 5 = 0.6 is not strictly greater than the 0.6 threshold.
        let table = Table::new(vec![Column::text(
            "mixed",
            vec![
                Cell::Text("1".into()),
                Cell::Text("2".into()),
                Cell::Text("3".into()),
                Cell::Text("a".into()),
                Cell::Text("b".into()),
            ],
        )]);
        let mut state = PipelineState::new();
        let table = coercer().apply(table, &mut state).unwrap();
        assert_eq!(table.column("mixed").unwrap().kind, ColumnKind::Text);
    }

    #[test]
    fn likeness_probe_rules() {
        assert!(looks_numeric("1,234,567"));
        assert!(looks_numeric("12.5"));
        assert!(!looks_numeric("12.3.4"));
        assert!(!looks_numeric("-5"));
        assert!(!looks_numeric(""));
        assert!(!looks_numeric("abc"));
    }

    #[test]
    fn already_numeric_columns_are_untouched_by_sampling() {
        let table = Table::new(vec![Column::new(
            "n",
            ColumnKind::Number,
            vec![Cell::Number(1.0)],
        )]);
        let mut state = PipelineState::new();
        let table = coercer().apply(table, &mut state).unwrap();
        assert_eq!(table.column("n").unwrap().kind, ColumnKind::Number);
    }
}
