//! Pre-pivoted matrix collaborator: sources whose header row already holds
//! dates and whose cells already hold counts. Each file folds into an
//! accumulator; merging across files happens cell-wise like any other
//! multi-source run.

use crate::core::pivot::Accumulator;
use crate::errors::AppResult;
use crate::utils::date::{parse_date, parse_timestamp};
use chrono::NaiveDate;
use std::path::Path;

fn header_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    parse_date(s).or_else(|| parse_timestamp(s).map(|dt| dt.date()))
}

pub fn read_matrix(path: &Path) -> AppResult<Accumulator> {
    let mut rdr = csv::Reader::from_path(path)?;
    let headers = rdr.headers()?.clone();

    // Date columns start at the first header cell that parses as a date;
    // a later non-date header ends the run (trailing total columns etc.).
    let mut date_cols: Vec<(usize, NaiveDate)> = Vec::new();
    let mut started = false;
    for (idx, h) in headers.iter().enumerate().skip(1) {
        match header_date(h) {
            Some(d) => {
                started = true;
                date_cols.push((idx, d));
            }
            None => {
                if started {
                    break;
                }
            }
        }
    }

    let mut acc = Accumulator::new();
    if date_cols.is_empty() {
        return Ok(acc);
    }
    for (_, date) in &date_cols {
        acc.observe_date(*date);
    }

    for row in rdr.records() {
        let row = row?;

        let category = row.get(0).unwrap_or("").trim();
        if category.is_empty() || category.eq_ignore_ascii_case("total") {
            continue;
        }

        for (idx, date) in &date_cols {
            let v = row
                .get(*idx)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .unwrap_or(0);
            if v == 0 {
                continue;
            }
            acc.bump(category, *date, v, 0.0);
        }
    }

    Ok(acc)
}
