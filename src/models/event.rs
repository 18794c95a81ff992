use chrono::{NaiveDateTime, NaiveTime};
use serde::Serialize;

/// One categorized, timestamped record as delivered by an input source.
/// Events are built row by row, consumed by a single aggregation pass
/// and then discarded; nothing is persisted between runs.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub category: String,          // trimmed, compared case-insensitively
    pub timestamp: NaiveDateTime,  // full date + time of the occurrence
    pub minutes: Option<f64>,      // resolved duration; None = plain count of 1
}

impl Event {
    pub fn new(category: &str, timestamp: NaiveDateTime) -> Self {
        Self {
            category: category.trim().to_string(),
            timestamp,
            minutes: None,
        }
    }

    pub fn with_minutes(category: &str, timestamp: NaiveDateTime, minutes: f64) -> Self {
        Self {
            category: category.trim().to_string(),
            timestamp,
            minutes: Some(minutes),
        }
    }

    pub fn time(&self) -> NaiveTime {
        self.timestamp.time()
    }
}

/// A pre-aggregated per-category record (count + minutes already summed by
/// the source). Used by the tracker summary, where sources may carry either
/// raw occurrences or daily rollups.
#[derive(Debug, Clone, Serialize)]
pub struct TrackerRecord {
    pub category: String,
    pub count: u64,
    pub minutes: f64,
}
