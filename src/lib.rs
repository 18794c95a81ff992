//! shiftpivot library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod input;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Pivot { .. } => cli::commands::pivot::handle(&cli.command, cfg),
        Commands::Matrix { .. } => cli::commands::matrix::handle(&cli.command),
        Commands::Tracker { .. } => cli::commands::tracker::handle(&cli.command),
        Commands::Retry { .. } => cli::commands::retry::handle(&cli.command),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once, then apply command-line overrides
    let mut cfg = Config::load();

    if let Some(lists) = &cli.lists {
        cfg.lists_dir = lists.clone();
    }

    dispatch(&cli, &cfg)
}
