//! Dateless per-category rollup: occurrence count plus total minutes,
//! merged across any number of sources.

use crate::core::filter::CategoryFilter;
use crate::models::aggregate::Aggregate;
use crate::models::event::TrackerRecord;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct TrackerRow {
    pub category: String,
    pub count: u64,
    pub minutes: f64,
}

impl TrackerRow {
    /// Minutes per occurrence, denominator floored at 1.
    pub fn minutes_per_count(&self) -> f64 {
        self.minutes / (self.count.max(1) as f64)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrackerSummary {
    /// Rows ordered: total minutes desc, count desc, name asc.
    pub rows: Vec<TrackerRow>,
}

impl TrackerSummary {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total_minutes(&self) -> f64 {
        self.rows.iter().map(|r| r.minutes).sum()
    }

    pub fn total_count(&self) -> u64 {
        self.rows.iter().map(|r| r.count).sum()
    }
}

/// Fold records from all sources into one summary. Records that contribute
/// nothing (zero count and no positive minutes) were already skipped by the
/// input layer; a row survives with either a count or minutes.
pub fn summarize<'a, I>(records: I, filter: &CategoryFilter) -> TrackerSummary
where
    I: IntoIterator<Item = &'a TrackerRecord>,
{
    let mut sums: BTreeMap<String, (String, Aggregate)> = BTreeMap::new();

    for rec in records {
        if rec.category.is_empty() || !filter.allows(&rec.category) {
            continue;
        }

        let entry = sums
            .entry(rec.category.to_lowercase())
            .or_insert_with(|| (rec.category.clone(), Aggregate::default()));
        entry.1.count += rec.count;
        entry.1.minutes += rec.minutes;
    }

    let mut rows: Vec<TrackerRow> = sums
        .into_values()
        .filter(|(_, agg)| !agg.is_zero())
        .map(|(category, agg)| TrackerRow {
            category,
            count: agg.count,
            minutes: agg.minutes,
        })
        .collect();

    rows.sort_by(|a, b| {
        b.minutes
            .partial_cmp(&a.minutes)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b.count.cmp(&a.count))
            .then_with(|| a.category.to_lowercase().cmp(&b.category.to_lowercase()))
    });

    TrackerSummary { rows }
}
