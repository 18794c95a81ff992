use crate::errors::{AppError, AppResult};
use crate::export::model::{pivot_headers, pivot_row_values};
use crate::export::notify_export_success;
use crate::models::pivot_table::PivotTable;
use crate::ui::messages::info;
use serde_json::{Map, Value, json};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Export JSON pretty-printed: one object per row, keyed by header.
pub(crate) fn export_json(table: &PivotTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let headers = pivot_headers(table);

    let rows: Vec<Value> = table
        .rows
        .iter()
        .map(|row| {
            let values = pivot_row_values(table, row);
            let mut obj = Map::new();
            for (i, (h, v)) in headers.iter().zip(values).enumerate() {
                // first column is the category label, never a number
                match (i > 0).then(|| v.parse::<f64>().ok()).flatten() {
                    Some(n) => obj.insert(h.clone(), json!(n)),
                    None => obj.insert(h.clone(), json!(v)),
                };
            }
            Value::Object(obj)
        })
        .collect();

    let json_data = serde_json::to_string_pretty(&rows)
        .map_err(|e| AppError::from(io::Error::other(format!("JSON serialization error: {e}"))))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV, header row included.
pub(crate) fn export_csv(table: &PivotTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV open error: {e}"))))?;

    wtr.write_record(pivot_headers(table))
        .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;

    for row in &table.rows {
        wtr.write_record(pivot_row_values(table, row))
            .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;
    }

    wtr.flush()
        .map_err(|e| AppError::from(io::Error::other(format!("CSV flush error: {e}"))))?;

    notify_export_success("CSV", path);
    Ok(())
}
