//! Cleaned-table output: comma-separated, header row, no index column.

use std::path::Path;

use scrub_model::Table;

/// Write the table as CSV to `path`.
pub fn write_csv(table: &Table, path: &Path) -> csv::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(table.column_names())?;
    let mut record = Vec::with_capacity(table.width());
    for row in 0..table.height() {
        record.clear();
        for column in &table.columns {
            let value = column
                .cells
                .get(row)
                .map(|cell| cell.render())
                .unwrap_or_default();
            record.push(value);
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}
