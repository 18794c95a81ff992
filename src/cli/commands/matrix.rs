use crate::cli::parser::Commands;
use crate::core::pivot::merge_all;
use crate::errors::AppResult;
use crate::export::{export_table, pivot_to_tsv};
use crate::input::matrix::read_matrix;
use crate::models::aggregate::AggregateMode;
use std::path::Path;

use super::pivot::print_table;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Matrix {
        files,
        copy,
        export,
        file,
        force,
    } = cmd
    {
        let mut sources = Vec::new();
        for f in files {
            sources.push(read_matrix(Path::new(f))?);
        }

        let mut table = merge_all(sources).into_table(AggregateMode::Count);
        // categories that only ever carried zero cells are noise here
        table.retain_nonzero();

        if *copy {
            print!("{}", pivot_to_tsv(&table));
        } else {
            print_table(&table, "merged matrix");
        }

        if let (Some(fmt), Some(out)) = (export, file) {
            export_table(&table, fmt, out, *force)?;
        }
    }
    Ok(())
}
