use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::CategoryFilter;
use crate::core::pivot::{Accumulator, PivotOptions, merge_all};
use crate::core::workday::Attribution;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, export_table, pivot_to_tsv};
use crate::input::{rows, whitelist};
use crate::models::aggregate::AggregateMode;
use crate::models::pivot_table::PivotTable;
use crate::models::shift::ShiftFilter;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pivot {
        files,
        workday,
        day,
        swing,
        night,
        whitelist: list_file,
        merge,
        copy,
        export,
        file,
        force,
    } = cmd
    {
        // Exports and copy blocks carry no source labels, so several
        // per-source tables would be indistinguishable in one stream.
        if files.len() > 1 && !merge && (export.is_some() || *copy) {
            return Err(AppError::Usage(
                "cannot combine several per-source tables into one export or copy block; add --merge"
                    .into(),
            ));
        }

        let opts = PivotOptions {
            attribution: if *workday || cfg.workday_attribution {
                Attribution::Workday
            } else {
                Attribution::Plain
            },
            mode: AggregateMode::Count,
            shifts: ShiftFilter::new(*day, *swing, *night),
        };

        // An explicit --whitelist applies to every source and must exist;
        // otherwise each source may pick up its own list from the config
        // mapping (missing mapped files degrade to pass-all).
        let explicit = match list_file {
            Some(p) => Some(whitelist::load_whitelist(Path::new(p))?),
            None => None,
        };

        let mut sources = Vec::new();
        for (i, f) in files.iter().enumerate() {
            let filter = match &explicit {
                Some(w) => w.clone(),
                None => source_filter(cfg, i + 1),
            };

            let events = rows::read_events(Path::new(f))?;
            sources.push((f.as_str(), Accumulator::fold(&events, &filter, &opts)));
        }

        if *merge {
            let merged = merge_all(sources.into_iter().map(|(_, a)| a));
            let table = merged.into_table(opts.mode);
            emit(&table, "merged", *copy, export, file, *force)?;
        } else {
            for (label, acc) in sources {
                let table = acc.into_table(opts.mode);
                emit(&table, label, *copy, export, file, *force)?;
            }
        }
    }
    Ok(())
}

fn source_filter(cfg: &Config, source_index: usize) -> CategoryFilter {
    let Some(name) = cfg.whitelists.get(&source_index) else {
        return CategoryFilter::pass_all();
    };

    let path = expand_tilde(&cfg.lists_dir).join(format!("{name}.txt"));
    match whitelist::load_optional(&path) {
        Some(filter) => filter,
        None => {
            warning(format!(
                "whitelist for source {} not found ({}); no filter applied",
                source_index,
                path.display()
            ));
            CategoryFilter::pass_all()
        }
    }
}

fn emit(
    table: &PivotTable,
    label: &str,
    copy: bool,
    export: &Option<ExportFormat>,
    file: &Option<String>,
    force: bool,
) -> AppResult<()> {
    if copy {
        print!("{}", pivot_to_tsv(table));
    } else {
        print_table(table, label);
    }

    if let (Some(fmt), Some(out)) = (export, file) {
        export_table(table, fmt, out, force)?;
    }

    Ok(())
}

pub(crate) fn print_table(table: &PivotTable, label: &str) {
    println!("\n=== {} ===", label);

    if table.is_empty() {
        println!("No rows aggregated.");
        return;
    }

    let mut columns = vec![Column::left("Category")];
    columns.extend(table.column_headers().iter().map(|h| Column::right(h)));
    columns.push(Column::right("TOTAL"));

    let mut out = Table::new(columns);
    for row in &table.rows {
        out.add_row(crate::export::pivot_row_values(table, row));
    }

    print!("{}", out.render());
}
