use crate::cli::parser::Commands;
use crate::core::status::{StatusSums, matches_equipment, shift_ranges};
use crate::errors::{AppError, AppResult};
use crate::input::status::read_status_records;
use crate::models::shift::ShiftFilter;
use crate::utils::date::parse_date;
use crate::utils::table::{Column, Table};
use crate::utils::time::seconds_readable;
use std::path::Path;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Status {
        files,
        date,
        day,
        swing,
        night,
        eqp,
        line,
    } = cmd
    {
        let base = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;
        let shifts = ShiftFilter::new(*day, *swing, *night);

        let ranges = shift_ranges(base, shifts);
        println!(
            "Date {} | Shifts [{}] | {} range(s):",
            base,
            shifts.labels().join(","),
            ranges.len()
        );
        for (from, to) in &ranges {
            println!("  {} .. {}", from.format("%Y-%m-%d %H:%M:%S"), to.format("%Y-%m-%d %H:%M:%S"));
        }

        let mut sums = StatusSums::new();
        let mut matched = 0usize;

        for f in files {
            for rec in read_status_records(Path::new(f))? {
                if !matches_equipment(&rec, eqp.as_deref(), line.as_deref()) {
                    continue;
                }
                sums.accumulate(&rec);
                matched += 1;
            }
        }

        println!("Matched {} record(s).\n", matched);

        let mut out = Table::new(vec![
            Column::left("Item"),
            Column::right("Seconds"),
            Column::right("Minutes"),
            Column::right("Hours"),
            Column::right("Count"),
        ]);

        for row in sums.rows() {
            let (minutes, hours) = seconds_readable(row.seconds);
            out.add_row(vec![
                row.name.to_string(),
                row.seconds.to_string(),
                minutes,
                hours,
                row.count.map(|c| c.to_string()).unwrap_or_default(),
            ]);
        }

        print!("{}", out.render());
    }
    Ok(())
}
