//! Date parsing helpers: best-effort timestamp recognition across the
//! formats real exports actually use, plus OLE-automation serial dates.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
];

/// Best-effort timestamp parse. Tries the known datetime formats, then a
/// bare date (midnight), then an OLE-automation serial number.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    if let Some(d) = parse_date(s) {
        return Some(d.and_time(NaiveTime::MIN));
    }

    if let Ok(serial) = s.parse::<f64>() {
        return from_oa_date(serial);
    }

    None
}

/// OLE-automation date: fractional days since 1899-12-30.
pub fn from_oa_date(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial.abs() > 2_958_465.0 {
        return None;
    }

    let base = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_time(NaiveTime::MIN);
    let millis = (serial * 86_400_000.0).round() as i64;
    base.checked_add_signed(Duration::milliseconds(millis))
}
