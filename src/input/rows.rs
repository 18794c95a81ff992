//! CSV row collaborator: resolves named columns, parses cell values and
//! hands typed events to the engine. A row with an unparseable category or
//! timestamp is skipped, never fatal.

use crate::errors::{AppError, AppResult};
use crate::models::event::{Event, TrackerRecord};
use crate::utils::date::parse_timestamp;
use crate::utils::time::{minutes_between_wrapped, parse_time};
use std::path::Path;

const CATEGORY_HEADERS: [&str; 6] = [
    "category",
    "alarm",
    "alarm name",
    "name",
    "desc",
    "description",
];
const TIMESTAMP_HEADERS: [&str; 4] = ["timestamp", "datetime", "date", "time"];
const MINUTES_HEADERS: [&str; 4] = ["minutes", "duration", "duration_minutes", "time(min)"];
const COUNT_HEADERS: [&str; 4] = ["count", "freq", "frequency", "total frequency"];
const START_HEADERS: [&str; 3] = ["start", "start time", "start_time"];
const END_HEADERS: [&str; 3] = ["end", "end time", "end_time"];

fn find_column(headers: &csv::StringRecord, candidates: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| candidates.contains(&h.trim().to_lowercase().as_str()))
}

fn field<'a>(row: &'a csv::StringRecord, idx: Option<usize>) -> &'a str {
    idx.and_then(|i| row.get(i)).unwrap_or("").trim()
}

/// Read one source of raw events. Duration resolution cascade: explicit
/// minutes column first, then end - start with a +24h correction when the
/// interval crossed midnight. Unresolvable durations stay None; whether
/// that drops the event is the aggregation mode's decision.
pub fn read_events(path: &Path) -> AppResult<Vec<Event>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let headers = rdr.headers()?.clone();

    let cat_idx = find_column(&headers, &CATEGORY_HEADERS);
    let ts_idx = find_column(&headers, &TIMESTAMP_HEADERS);

    if cat_idx.is_none() || ts_idx.is_none() {
        return Err(AppError::MissingColumns(format!(
            "{} (need a category and a timestamp column)",
            path.display()
        )));
    }

    let min_idx = find_column(&headers, &MINUTES_HEADERS);
    let start_idx = find_column(&headers, &START_HEADERS);
    let end_idx = find_column(&headers, &END_HEADERS);

    let mut events = Vec::new();

    for row in rdr.records() {
        let row = row?;

        let category = field(&row, cat_idx);
        if category.is_empty() {
            continue;
        }

        let Some(ts) = parse_timestamp(field(&row, ts_idx)) else {
            continue;
        };

        let minutes = resolve_minutes(
            field(&row, min_idx),
            field(&row, start_idx),
            field(&row, end_idx),
        );

        let mut ev = Event::new(category, ts);
        ev.minutes = minutes;
        events.push(ev);
    }

    Ok(events)
}

fn resolve_minutes(explicit: &str, start: &str, end: &str) -> Option<f64> {
    if let Some(m) = parse_minutes_cell(explicit)
        && m > 0.0
    {
        return Some(m);
    }

    let s = parse_clock(start)?;
    let e = parse_clock(end)?;
    Some(minutes_between_wrapped(s, e))
}

fn parse_clock(s: &str) -> Option<chrono::NaiveTime> {
    if s.is_empty() {
        return None;
    }
    if let Some(dt) = parse_timestamp(s) {
        return Some(dt.time());
    }
    parse_time(s)
}

/// A minutes cell may hold a plain number or a clock value (HH:MM[:SS]),
/// in which case the time of day converts to minutes.
fn parse_minutes_cell(s: &str) -> Option<f64> {
    if s.is_empty() {
        return None;
    }
    if let Ok(v) = s.parse::<f64>() {
        return Some(v);
    }
    parse_time(s).map(|t| (t - chrono::NaiveTime::MIN).num_seconds() as f64 / 60.0)
}

/// Read one source of tracker records. Sources come in two shapes:
/// - pre-aggregated rows with an explicit count/frequency column, where a
///   row is dropped only when both count and minutes contribute nothing;
/// - raw occurrence rows (no count column, one occurrence each), where a
///   row without a positive resolved duration is dropped entirely.
pub fn read_tracker_records(path: &Path) -> AppResult<Vec<TrackerRecord>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let headers = rdr.headers()?.clone();

    let cat_idx = find_column(&headers, &CATEGORY_HEADERS);
    if cat_idx.is_none() {
        return Err(AppError::MissingColumns(format!(
            "{} (need a category column)",
            path.display()
        )));
    }

    let count_idx = find_column(&headers, &COUNT_HEADERS);
    let min_idx = find_column(&headers, &MINUTES_HEADERS);
    let start_idx = find_column(&headers, &START_HEADERS);
    let end_idx = find_column(&headers, &END_HEADERS);

    let pre_aggregated = count_idx.is_some();
    let mut records = Vec::new();

    for row in rdr.records() {
        let row = row?;

        let category = field(&row, cat_idx);
        if category.is_empty() {
            continue;
        }

        let minutes = resolve_minutes(
            field(&row, min_idx),
            field(&row, start_idx),
            field(&row, end_idx),
        )
        .unwrap_or(0.0);

        if pre_aggregated {
            let count = field(&row, count_idx).parse::<u64>().unwrap_or(0);
            if count == 0 && minutes <= 0.0 {
                continue;
            }
            records.push(TrackerRecord {
                category: category.to_string(),
                count,
                minutes,
            });
        } else {
            if minutes <= 0.0 {
                continue;
            }
            records.push(TrackerRecord {
                category: category.to_string(),
                count: 1,
                minutes,
            });
        }
    }

    Ok(records)
}
