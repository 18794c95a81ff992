//! Serialization into the tab-separated copy format.
//!
//! The copy block is a hard contract for paste targets: no header row, no
//! total column, one tab-separated line per row in the table's sorted
//! order, every line newline-terminated.

use crate::core::retry::RetryRow;
use crate::core::tracker::TrackerRow;
use crate::export::model::cell_value;
use crate::models::pivot_table::PivotTable;
use crate::utils::time::format_minutes;

pub fn pivot_to_tsv(table: &PivotTable) -> String {
    let mut out = String::new();

    for row in &table.rows {
        out.push_str(&row.category);
        for cell in &row.cells {
            out.push('\t');
            out.push_str(&cell_value(cell, table.mode));
        }
        out.push('\n');
    }

    out
}

pub fn retry_to_tsv(rows: &[RetryRow]) -> String {
    let mut out = String::new();

    for row in rows {
        out.push_str(&format!("{}\t{}\t{}\n", row.retries, row.left, row.right));
    }

    out
}

pub fn tracker_to_tsv(rows: &[TrackerRow], with_avg: bool) -> String {
    let mut out = String::new();

    for row in rows {
        out.push_str(&row.category);
        out.push('\t');
        out.push_str(&row.count.to_string());
        out.push('\t');
        out.push_str(&format_minutes(row.minutes));
        if with_avg {
            out.push('\t');
            out.push_str(&format_minutes(row.minutes_per_count()));
        }
        out.push('\n');
    }

    out
}
