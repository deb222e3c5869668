use crate::cell::Cell;

/// The declared type of a column. Exactly one per column; every non-missing
/// cell is expected to match it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Number,
    DateTime,
}

/// A named, typed sequence of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, kind: ColumnKind, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            kind,
            cells,
        }
    }

    /// Convenience constructor for raw text columns.
    pub fn text(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self::new(name, ColumnKind::Text, cells)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_missing()).count()
    }

    /// Fraction of missing cells; an empty column counts as fully present.
    pub fn missing_fraction(&self) -> f64 {
        if self.cells.is_empty() {
            0.0
        } else {
            self.missing_count() as f64 / self.cells.len() as f64
        }
    }

    /// Iterate the non-missing numeric values of a numeric column.
    pub fn numbers(&self) -> impl Iterator<Item = f64> + '_ {
        self.cells.iter().filter_map(|cell| cell.as_number())
    }
}

/// An ordered sequence of equal-length named columns. Row identity is
/// positional; stages rewrite columns wholesale and only deduplication may
/// remove rows (preserving the relative order of survivors).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.columns.first().map(|c| c.cells.len()).unwrap_or(0)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Composite key of one row across all columns, for exact-duplicate
    /// detection. Missing markers compare equal to each other.
    pub fn row_key(&self, row: usize) -> String {
        let mut key = String::new();
        for (idx, column) in self.columns.iter().enumerate() {
            if idx > 0 {
                key.push('\u{1f}');
            }
            if let Some(cell) = column.cells.get(row) {
                cell.write_key(&mut key);
            }
        }
        key
    }

    /// Keep only the rows whose flag is true, preserving order.
    pub fn retain_rows(&mut self, keep: &[bool]) {
        for column in &mut self.columns {
            let mut idx = 0usize;
            column.cells.retain(|_| {
                let flag = keep.get(idx).copied().unwrap_or(true);
                idx += 1;
                flag
            });
        }
    }

    /// Total missing-marker count across the whole table.
    pub fn missing_total(&self) -> usize {
        self.columns.iter().map(|c| c.missing_count()).sum()
    }
}
