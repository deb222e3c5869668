use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::{CleanResult, DetectResult};

pub fn print_clean_summary(result: &CleanResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run)"),
    }
    println!("Delimiter: {:?}", result.delimiter);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Metric"),
        header_cell("Before"),
        header_cell("After"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Rows"),
        Cell::new(result.rows_in),
        Cell::new(result.rows_out),
    ]);
    table.add_row(vec![
        Cell::new("Columns"),
        Cell::new(result.columns_in),
        Cell::new(result.columns_out),
    ]);
    println!("{table}");

    let mut effects = Table::new();
    effects.set_header(vec![header_cell("Effect"), header_cell("Count")]);
    apply_table_style(&mut effects);
    align_column(&mut effects, 1, CellAlignment::Right);
    effects.add_row(vec![
        Cell::new("Duplicate rows removed"),
        count_cell(result.duplicates_removed, Color::Yellow),
    ]);
    effects.add_row(vec![
        Cell::new("Sparse columns pruned"),
        count_cell(result.pruned_columns.len(), Color::Yellow),
    ]);
    effects.add_row(vec![
        Cell::new("Cells imputed"),
        count_cell(result.imputed_cells, Color::Cyan),
    ]);
    effects.add_row(vec![
        Cell::new("Outlier cells clipped"),
        count_cell(result.clipped_cells, Color::Cyan),
    ]);
    effects.add_row(vec![
        Cell::new("Missing cells remaining"),
        count_cell(result.missing_remaining, Color::Red),
    ]);
    println!("{effects}");

    if !result.pruned_columns.is_empty() {
        println!("Pruned: {}", result.pruned_columns.join(", "));
    }
}

pub fn print_detect_summary(result: &DetectResult) {
    println!("Input: {}", result.input.display());
    println!("Delimiter: {:?}", result.delimiter);
    println!("Columns: {}", result.columns);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).add_attribute(Attribute::Dim)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
