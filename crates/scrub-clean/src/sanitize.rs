//! Text sanitization: whitespace trimming and missing-token normalization.

use anyhow::Result;

use scrub_model::{Cell, ColumnKind, Table};

use crate::pipeline::{CleaningStage, PipelineState};

/// Trims every text cell and replaces values matching the configured
/// missing-token set (case-insensitive, after trimming) with the missing
/// marker. Non-text columns are untouched.
pub struct TextSanitizer {
    tokens: Vec<String>,
}

impl TextSanitizer {
    pub fn new(tokens: &[String]) -> Self {
        Self {
            tokens: tokens.iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    fn is_missing_token(&self, trimmed: &str) -> bool {
        let lowered = trimmed.to_lowercase();
        self.tokens.iter().any(|token| *token == lowered)
    }
}

impl CleaningStage for TextSanitizer {
    fn apply(&self, mut table: Table, _state: &mut PipelineState) -> Result<Table> {
        for column in &mut table.columns {
            if column.kind != ColumnKind::Text {
                continue;
            }
            for cell in &mut column.cells {
                let Cell::Text(value) = cell else {
                    continue;
                };
                let trimmed = value.trim();
                if self.is_missing_token(trimmed) {
                    *cell = Cell::Missing;
                } else if trimmed.len() != value.len() {
                    *cell = Cell::Text(trimmed.to_string());
                }
            }
        }
        Ok(table)
    }

    fn stage_name(&self) -> &'static str {
        "sanitize_text"
    }
}
