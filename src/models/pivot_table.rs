//! The finished category x date matrix plus per-row totals.

use crate::models::aggregate::{Aggregate, AggregateMode};
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct PivotRow {
    pub category: String,
    /// One cell per date column, aligned to `PivotTable::columns`.
    pub cells: Vec<Aggregate>,
    pub total: Aggregate,
}

#[derive(Debug, Clone)]
pub struct PivotTable {
    /// Gap-free ascending dates from min to max observed. Empty when the
    /// sources produced no usable rows at all.
    pub columns: Vec<NaiveDate>,
    /// Rows in final order: total descending, category ascending.
    pub rows: Vec<PivotRow>,
    pub mode: AggregateMode,
}

impl PivotTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_headers(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect()
    }

    /// Drop rows whose merged total is zero. The matrix merge uses this so
    /// categories that only ever carried empty cells disappear.
    pub fn retain_nonzero(&mut self) {
        self.rows.retain(|r| !r.total.is_zero());
    }
}
