use crate::cli::parser::Commands;
use crate::core::retry::RetryDistribution;
use crate::errors::AppResult;
use crate::export::retry_to_tsv;
use crate::input::retry::read_retry_distribution;
use crate::utils::table::{Column, Table};
use std::path::Path;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Retry { files, copy } = cmd {
        let mut dist = RetryDistribution::new();
        for f in files {
            dist.absorb(read_retry_distribution(Path::new(f))?);
        }

        if *copy {
            print!("{}", retry_to_tsv(&dist.rows()));
            return Ok(());
        }

        if dist.is_empty() {
            println!("No rows aggregated.");
            return Ok(());
        }

        let mut out = Table::new(vec![
            Column::left("Retries"),
            Column::right("Left"),
            Column::right("Right"),
            Column::right("Total"),
        ]);

        for row in dist.rows() {
            out.add_row(vec![
                row.retries.to_string(),
                row.left.to_string(),
                row.right.to_string(),
                row.total().to_string(),
            ]);
        }
        out.add_row(vec![
            "TOTAL".to_string(),
            dist.left_total().to_string(),
            dist.right_total().to_string(),
            (dist.left_total() + dist.right_total()).to_string(),
        ]);

        print!("{}", out.render());
        println!(
            "\nLeft total: {} | Right total: {} | Retry range: 0~{}",
            dist.left_total(),
            dist.right_total(),
            dist.max_retries()
        );
    }
    Ok(())
}
