//! Calendar bucket attribution for timestamps.

use crate::models::shift::DAY_START;
use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Attribution {
    /// The timestamp's own calendar date.
    #[default]
    Plain,
    /// A workday runs 06:00:00 to 05:59:59 of the next day, so anything
    /// before 06:00 belongs to the previous date (the night shift's tail
    /// counts with the day the shift started on).
    Workday,
}

pub fn bucket_date(ts: NaiveDateTime, attribution: Attribution) -> NaiveDate {
    match attribution {
        Attribution::Plain => ts.date(),
        Attribution::Workday => {
            if ts.time() < DAY_START {
                ts.date().pred_opt().unwrap_or_else(|| ts.date())
            } else {
                ts.date()
            }
        }
    }
}
