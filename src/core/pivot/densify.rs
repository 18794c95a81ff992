//! Expansion of sparse observed dates into a contiguous column range.

use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Ascending daily sequence from the minimum to the maximum observed date,
/// inclusive. No observed dates means no columns at all.
pub fn date_columns(observed: &BTreeSet<NaiveDate>) -> Vec<NaiveDate> {
    let (Some(&min), Some(&max)) = (observed.first(), observed.last()) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    let mut d = min;
    while d <= max {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    out
}
