//! Time utilities: parsing HH:MM[:SS], wrapped interval durations and
//! one-decimal minute formatting.

use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

/// Minutes from start to end. A negative difference means the interval
/// crossed midnight, so a full day is added back.
pub fn minutes_between_wrapped(start: NaiveTime, end: NaiveTime) -> f64 {
    let mut secs = (end - start).num_seconds() as f64;
    if secs < 0.0 {
        secs += 86_400.0;
    }
    secs / 60.0
}

/// Minutes with one decimal, invariant dot separator.
pub fn format_minutes(mins: f64) -> String {
    format!("{:.1}", (mins * 10.0).round() / 10.0)
}

/// Seconds rendered as minutes and as hours, both one decimal.
pub fn seconds_readable(secs: i64) -> (String, String) {
    let minutes = secs as f64 / 60.0;
    let hours = secs as f64 / 3600.0;
    (format!("{minutes:.1}"), format!("{hours:.1}"))
}
