//! Vision result collaborator: headerless CSV where the fourth column
//! holds the LEFT/RIGHT direction and the sixth the raw attempt count.
//! Rows that are too short, have a blank direction or an unknown direction
//! are skipped.

use crate::core::retry::{Direction, RetryDistribution};
use crate::errors::AppResult;
use std::path::Path;

const DIRECTION_COL: usize = 3;
const ATTEMPTS_COL: usize = 5;

pub fn read_retry_distribution(path: &Path) -> AppResult<RetryDistribution> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut dist = RetryDistribution::new();

    for row in rdr.records() {
        let row = row?;
        if row.len() <= ATTEMPTS_COL {
            continue;
        }

        let dir = row.get(DIRECTION_COL).unwrap_or("").trim();
        if dir.is_empty() {
            continue;
        }
        let Some(dir) = Direction::parse(dir) else {
            continue;
        };

        let attempts = parse_attempts(row.get(ATTEMPTS_COL).unwrap_or(""));
        dist.record(dir, attempts);
    }

    Ok(dist)
}

/// Attempt cells should be integers but show up as floats or grouped
/// numbers in practice; anything unreadable counts as 0 attempts.
fn parse_attempts(s: &str) -> i64 {
    let s = s.trim();
    if let Ok(v) = s.parse::<i64>() {
        return v;
    }
    if let Ok(v) = s.parse::<f64>() {
        return v.round() as i64;
    }

    let stripped: String = s.chars().filter(|c| *c != ',' && *c != ' ').collect();
    stripped
        .parse::<f64>()
        .map(|v| v.round() as i64)
        .unwrap_or(0)
}
