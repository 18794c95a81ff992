//! Flat string projections of the pivot table, shared by the exporters
//! and the CLI renderer.

use crate::models::aggregate::{Aggregate, AggregateMode};
use crate::models::pivot_table::{PivotRow, PivotTable};
use crate::utils::time::format_minutes;

pub const TOTAL_COL_NAME: &str = "TOTAL";

/// Header row: category, one column per date, then the total column.
pub fn pivot_headers(table: &PivotTable) -> Vec<String> {
    let mut out = Vec::with_capacity(table.columns.len() + 2);
    out.push("Category".to_string());
    out.extend(table.column_headers());
    out.push(TOTAL_COL_NAME.to_string());
    out
}

pub fn cell_value(cell: &Aggregate, mode: AggregateMode) -> String {
    match mode {
        AggregateMode::Count => cell.count.to_string(),
        AggregateMode::Duration => format_minutes(cell.minutes),
    }
}

/// One row in header order, total included.
pub fn pivot_row_values(table: &PivotTable, row: &PivotRow) -> Vec<String> {
    let mut out = Vec::with_capacity(row.cells.len() + 2);
    out.push(row.category.clone());
    out.extend(row.cells.iter().map(|c| cell_value(c, table.mode)));
    out.push(cell_value(&row.total, table.mode));
    out
}
