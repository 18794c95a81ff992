//! Single-pass fold of events into a category x date accumulator.

use crate::core::filter::CategoryFilter;
use crate::core::pivot::{densify, sort};
use crate::core::workday::{Attribution, bucket_date};
use crate::models::aggregate::{Aggregate, AggregateMode};
use crate::models::event::Event;
use crate::models::pivot_table::{PivotRow, PivotTable};
use crate::models::shift::ShiftFilter;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Per-invocation knobs of the engine: how timestamps map to bucket dates,
/// what each event contributes, and which shifts survive.
#[derive(Debug, Clone, Copy, Default)]
pub struct PivotOptions {
    pub attribution: Attribution,
    pub mode: AggregateMode,
    pub shifts: ShiftFilter,
}

#[derive(Debug, Clone, Default)]
struct CategoryRecord {
    /// First spelling seen for this category; the map key is lowercased so
    /// case variants never split into separate rows.
    label: String,
    cells: BTreeMap<NaiveDate, Aggregate>,
}

/// Sparse category -> date -> aggregate map, one per source. Accumulators
/// from several sources merge by cell-wise summation before the table is
/// built.
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    categories: BTreeMap<String, CategoryRecord>,
    dates: BTreeSet<NaiveDate>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a source's events. Events failing the category filter or the
    /// shift filter are skipped before any bucket date is recorded. In
    /// duration mode an event without a positive resolved duration is not
    /// a valid occurrence and is dropped entirely.
    pub fn fold(events: &[Event], filter: &CategoryFilter, opts: &PivotOptions) -> Self {
        let mut acc = Self::new();

        for ev in events {
            if ev.category.is_empty() || !filter.allows(&ev.category) {
                continue;
            }
            if !opts.shifts.includes(ev.time()) {
                continue;
            }

            let minutes = match opts.mode {
                AggregateMode::Count => 0.0,
                AggregateMode::Duration => match ev.minutes {
                    Some(m) if m > 0.0 => m,
                    _ => continue,
                },
            };

            let day = bucket_date(ev.timestamp, opts.attribution);
            acc.record(&ev.category, day, minutes);
        }

        acc
    }

    /// Add one occurrence for (category, date).
    pub fn record(&mut self, category: &str, date: NaiveDate, minutes: f64) {
        self.bump(category, date, 1, minutes);
    }

    /// Add a pre-counted cell contribution (used by the matrix merge, where
    /// sources already carry counts).
    pub fn bump(&mut self, category: &str, date: NaiveDate, count: u64, minutes: f64) {
        let label = category.trim();
        let key = label.to_lowercase();

        let rec = self
            .categories
            .entry(key)
            .or_insert_with(|| CategoryRecord {
                label: label.to_string(),
                ..Default::default()
            });

        let cell = rec.cells.entry(date).or_default();
        cell.count += count;
        cell.minutes += minutes;

        self.dates.insert(date);
    }

    /// Register a date in the column axis without adding any cell value.
    /// Matrix sources keep their header dates even when a column is all
    /// zeros.
    pub fn observe_date(&mut self, date: NaiveDate) {
        self.dates.insert(date);
    }

    pub fn absorb(&mut self, other: Accumulator) {
        for (key, rec) in other.categories {
            let mine = self
                .categories
                .entry(key)
                .or_insert_with(|| CategoryRecord {
                    label: rec.label.clone(),
                    ..Default::default()
                });

            for (date, cell) in rec.cells {
                mine.cells.entry(date).or_default().absorb(&cell);
            }
        }
        self.dates.extend(other.dates);
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Densify, fill explicit zeros, total each row and sort. This is the
    /// only way out of the accumulator, so every produced table satisfies
    /// the row-sum and density invariants by construction.
    pub fn into_table(self, mode: AggregateMode) -> PivotTable {
        let columns = densify::date_columns(&self.dates);

        let mut rows: Vec<PivotRow> = self
            .categories
            .into_values()
            .map(|rec| {
                let mut total = Aggregate::default();
                let cells: Vec<Aggregate> = columns
                    .iter()
                    .map(|d| {
                        let cell = rec.cells.get(d).copied().unwrap_or_default();
                        total.absorb(&cell);
                        cell
                    })
                    .collect();

                PivotRow {
                    category: rec.label,
                    cells,
                    total,
                }
            })
            .collect();

        sort::sort_rows(&mut rows, mode);

        PivotTable {
            columns,
            rows,
            mode,
        }
    }
}
