use crate::cli::parser::Commands;
use crate::core::filter::CategoryFilter;
use crate::core::tracker::summarize;
use crate::errors::AppResult;
use crate::export::tracker_to_tsv;
use crate::input::{rows, whitelist};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_minutes;
use std::path::Path;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Tracker {
        files,
        whitelist: list_file,
        avg,
        copy,
    } = cmd
    {
        let filter = match list_file {
            Some(p) => whitelist::load_whitelist(Path::new(p))?,
            None => CategoryFilter::pass_all(),
        };

        let mut records = Vec::new();
        for f in files {
            records.extend(rows::read_tracker_records(Path::new(f))?);
        }

        let summary = summarize(&records, &filter);

        if *copy {
            print!("{}", tracker_to_tsv(&summary.rows, *avg));
            return Ok(());
        }

        if summary.is_empty() {
            println!("No rows aggregated.");
            return Ok(());
        }

        let mut columns = vec![
            Column::left("Category"),
            Column::right("Count"),
            Column::right("Total Minutes"),
        ];
        if *avg {
            columns.push(Column::right("Min/Count"));
        }

        let mut out = Table::new(columns);
        for row in &summary.rows {
            let mut values = vec![
                row.category.clone(),
                row.count.to_string(),
                format_minutes(row.minutes),
            ];
            if *avg {
                values.push(format_minutes(row.minutes_per_count()));
            }
            out.add_row(values);
        }

        print!("{}", out.render());
        println!(
            "\nTotal: {} occurrences, {} minutes",
            summary.total_count(),
            format_minutes(summary.total_minutes())
        );
    }
    Ok(())
}
