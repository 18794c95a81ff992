//! Shift range construction and equipment status summation over
//! pre-aggregated JSON records.

use crate::models::shift::{DAY_START, NIGHT_START, SWING_START, ShiftFilter};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;
use std::collections::BTreeMap;

/// Per-record time sums, in seconds.
pub const TIME_KEYS: [&str; 12] = [
    "runTime",
    "activeRunTime",
    "dummyRunTime",
    "activeDummyRunTime",
    "waitingTime",
    "activeWaitingTime",
    "idleTime",
    "troubleTime",
    "dummyTroubleTime",
    "setupTime",
    "commDownTime",
    "lotDownTime",
];

/// Per-record occurrence counts.
pub const COUNT_KEYS: [&str; 9] = [
    "runCount",
    "dummyRunCount",
    "waitingCount",
    "idleCount",
    "troubleCount",
    "dummyTroubleCount",
    "setupCount",
    "commDownCount",
    "lotDownCount",
];

/// Fixed display order of the summary rows (base key, without the
/// Time/Count suffix).
pub const DISPLAY_ORDER: [&str; 12] = [
    "run",
    "activeRun",
    "dummyRun",
    "activeDummyRun",
    "waiting",
    "activeWaiting",
    "idle",
    "trouble",
    "dummyTrouble",
    "setup",
    "commDown",
    "lotDown",
];

pub fn display_name(base: &str) -> &'static str {
    match base {
        "run" => "Run",
        "activeRun" => "Active Run",
        "dummyRun" => "Dummy Run",
        "activeDummyRun" => "Active Dummy Run",
        "waiting" => "Waiting",
        "activeWaiting" => "Active Waiting",
        "idle" => "Idle",
        "trouble" => "Trouble",
        "dummyTrouble" => "Dummy Trouble",
        "setup" => "Setup",
        "commDown" => "Comm Down",
        "lotDown" => "Lot Down",
        _ => "?",
    }
}

const DAY_END: NaiveTime = NaiveTime::from_hms_opt(13, 59, 59).unwrap();
const SWING_END: NaiveTime = NaiveTime::from_hms_opt(21, 59, 59).unwrap();
const NIGHT_END: NaiveTime = NaiveTime::from_hms_opt(5, 59, 59).unwrap();
const MIDNIGHT: NaiveTime = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
const LAST_SECOND: NaiveTime = NaiveTime::from_hms_opt(23, 59, 59).unwrap();

/// Concrete datetime windows for the enabled shifts of a base date.
/// Night spans midnight, so it contributes two raw pieces; adjacent or
/// overlapping pieces (within one second) coalesce into a single range,
/// e.g. Day+Swing+Night becomes 06:00 through next-day 05:59:59.
pub fn shift_ranges(day: NaiveDate, shifts: ShiftFilter) -> Vec<(NaiveDateTime, NaiveDateTime)> {
    let inc_all = shifts.is_pass_all();
    let inc_day = inc_all || shifts.day;
    let inc_swing = inc_all || shifts.swing;
    let inc_night = inc_all || shifts.night;

    let mut raw = Vec::new();

    if inc_day {
        raw.push((day.and_time(DAY_START), day.and_time(DAY_END)));
    }

    if inc_swing {
        raw.push((day.and_time(SWING_START), day.and_time(SWING_END)));
    }

    if inc_night {
        raw.push((day.and_time(NIGHT_START), day.and_time(LAST_SECOND)));
        if let Some(next) = day.succ_opt() {
            raw.push((next.and_time(MIDNIGHT), next.and_time(NIGHT_END)));
        }
    }

    coalesce(raw)
}

fn coalesce(
    mut input: Vec<(NaiveDateTime, NaiveDateTime)>,
) -> Vec<(NaiveDateTime, NaiveDateTime)> {
    let mut out = Vec::new();
    if input.is_empty() {
        return out;
    }

    input.sort_by_key(|r| r.0);

    let (mut cur_start, mut cur_end) = input[0];
    for &(s, e) in &input[1..] {
        if s <= cur_end + Duration::seconds(1) {
            if e > cur_end {
                cur_end = e;
            }
        } else {
            out.push((cur_start, cur_end));
            cur_start = s;
            cur_end = e;
        }
    }
    out.push((cur_start, cur_end));

    out
}

/// Match a record against an equipment code and/or line number. Exact match
/// first, then case-insensitive substring, over both the `equipId` and
/// `equipLineNo` fields. With no selector every record matches.
pub fn matches_equipment(rec: &Value, code: Option<&str>, line: Option<&str>) -> bool {
    if code.is_none() && line.is_none() {
        return true;
    }

    let id = field_str(rec, "equipId");
    let ln = field_str(rec, "equipLineNo");

    for wanted in [code, line].into_iter().flatten() {
        if wanted.is_empty() {
            continue;
        }
        let w = wanted.to_lowercase();
        if id.to_lowercase() == w
            || ln.to_lowercase() == w
            || id.to_lowercase().contains(&w)
            || ln.to_lowercase().contains(&w)
        {
            return true;
        }
    }

    false
}

fn field_str(rec: &Value, key: &str) -> String {
    match rec.get(key) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(v) if !v.is_null() => v.to_string(),
        _ => String::new(),
    }
}

/// One rendered summary row. `count` is None for the active* series, which
/// carry no occurrence counter of their own.
#[derive(Debug, Clone)]
pub struct StatusRow {
    pub name: &'static str,
    pub seconds: i64,
    pub count: Option<i64>,
}

/// Running sums over all matching records of all fetched ranges.
#[derive(Debug, Clone, Default)]
pub struct StatusSums {
    time: BTreeMap<&'static str, i64>,
    count: BTreeMap<&'static str, i64>,
}

impl StatusSums {
    pub fn new() -> Self {
        let mut s = Self::default();
        for k in TIME_KEYS {
            s.time.insert(k, 0);
        }
        for k in COUNT_KEYS {
            s.count.insert(k, 0);
        }
        s
    }

    /// Add one record's numeric fields. Missing or non-numeric fields
    /// contribute nothing.
    pub fn accumulate(&mut self, rec: &Value) {
        for k in TIME_KEYS {
            if let Some(v) = field_i64(rec, k) {
                *self.time.entry(k).or_insert(0) += v;
            }
        }
        for k in COUNT_KEYS {
            if let Some(v) = field_i64(rec, k) {
                *self.count.entry(k).or_insert(0) += v;
            }
        }
    }

    pub fn rows(&self) -> Vec<StatusRow> {
        DISPLAY_ORDER
            .iter()
            .map(|base| {
                let time_key = format!("{base}Time");
                let count_key = format!("{base}Count");

                let seconds = self.time.get(time_key.as_str()).copied().unwrap_or(0);

                let count = if base.starts_with("active") {
                    None
                } else {
                    self.count.get(count_key.as_str()).copied()
                };

                StatusRow {
                    name: display_name(base),
                    seconds,
                    count,
                }
            })
            .collect()
    }
}

fn field_i64(rec: &Value, key: &str) -> Option<i64> {
    match rec.get(key) {
        // fractional-second timers round to whole seconds
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|v| v.round() as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
