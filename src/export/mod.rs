mod json_csv;
mod model;
mod tsv;
mod xlsx;

pub use model::{pivot_headers, pivot_row_values};
pub use tsv::{pivot_to_tsv, retry_to_tsv, tracker_to_tsv};

use crate::errors::{AppError, AppResult};
use crate::models::pivot_table::PivotTable;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

/// Write the finished table to a file. Existing files are only replaced
/// with `force`.
pub fn export_table(
    table: &PivotTable,
    format: &ExportFormat,
    file: &str,
    force: bool,
) -> AppResult<()> {
    let path = Path::new(file);

    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "output file already exists (use --force to overwrite): {}",
            path.display()
        )));
    }

    match format {
        ExportFormat::Csv => json_csv::export_csv(table, path),
        ExportFormat::Json => json_csv::export_json(table, path),
        ExportFormat::Xlsx => xlsx::export_xlsx(table, path),
    }
}
