//! Deterministic row ordering for finished tables.

use crate::models::aggregate::AggregateMode;
use crate::models::pivot_table::PivotRow;
use std::cmp::Ordering;

/// Total value descending, then category name ascending (case-insensitive).
/// Two distinct categories can only compare equal when their names match
/// under case folding, so the ordering is total.
pub fn sort_rows(rows: &mut [PivotRow], mode: AggregateMode) {
    rows.sort_by(|a, b| {
        let by_total = b
            .total
            .value(mode)
            .partial_cmp(&a.total.value(mode))
            .unwrap_or(Ordering::Equal);

        by_total.then_with(|| {
            a.category
                .to_lowercase()
                .cmp(&b.category.to_lowercase())
        })
    });
}
