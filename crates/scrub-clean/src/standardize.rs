//! Categorical domain standardization.

use anyhow::Result;

use scrub_model::{Cell, ColumnKind, Table};

use crate::config::CategoryMap;
use crate::pipeline::{CleaningStage, PipelineState};

/// Applies the configured category maps to text columns matched by name.
///
/// Mapped values are replaced by their canonical label. Unmapped values
/// follow the map's policy: left untouched (gender style) or lowercased and
/// kept (country style). A post-mapping value equal to the map's missing
/// token collapses to the missing marker.
pub struct CategoryStandardizer {
    maps: Vec<CategoryMap>,
}

impl CategoryStandardizer {
    pub fn new(maps: Vec<CategoryMap>) -> Self {
        Self { maps }
    }
}

impl CleaningStage for CategoryStandardizer {
    fn apply(&self, mut table: Table, _state: &mut PipelineState) -> Result<Table> {
        for column in &mut table.columns {
            if column.kind != ColumnKind::Text {
                continue;
            }
            for map in &self.maps {
                if !map.applies_to(&column.name) {
                    continue;
                }
                for cell in &mut column.cells {
                    let Cell::Text(value) = cell else {
                        continue;
                    };
                    let standardized = match map.lookup(value) {
                        Some(label) => label.to_string(),
                        None if map.lowercase_unmapped => value.trim().to_lowercase(),
                        None => continue,
                    };
                    if map
                        .missing_after
                        .as_deref()
                        .is_some_and(|token| token == standardized)
                    {
                        *cell = Cell::Missing;
                    } else {
                        *cell = Cell::Text(standardized);
                    }
                }
            }
        }
        Ok(table)
    }

    fn stage_name(&self) -> &'static str {
        "standardize_categories"
    }
}
