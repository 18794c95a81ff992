use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftpivot
/// CLI application to pivot categorized event logs into dense tables
#[derive(Parser)]
#[command(
    name = "shiftpivot",
    version = env!("CARGO_PKG_VERSION"),
    about = "Pivot categorized event logs into category x date tables with shift filtering",
    long_about = None
)]
pub struct Cli {
    /// Override the whitelist directory (useful for tests or custom lists)
    #[arg(global = true, long = "lists")]
    pub lists: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and whitelist directory
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration for missing list files")]
        check: bool,
    },

    /// Pivot event sources into category x date occurrence counts
    Pivot {
        /// Event CSV files, one per source (sheet)
        #[arg(required = true)]
        files: Vec<String>,

        /// Attribute timestamps before 06:00 to the previous workday
        #[arg(long, help = "Attribute times before 06:00 to the previous day")]
        workday: bool,

        /// Keep only Day shift events (06:00-13:59)
        #[arg(long)]
        day: bool,

        /// Keep only Swing shift events (14:00-21:59)
        #[arg(long)]
        swing: bool,

        /// Keep only Night shift events (22:00-05:59)
        #[arg(long)]
        night: bool,

        /// Whitelist file applied to every source (one category per line)
        #[arg(long, value_name = "FILE")]
        whitelist: Option<String>,

        /// Sum all sources into one merged table
        #[arg(long)]
        merge: bool,

        /// Print the tab-separated copy block instead of the table
        #[arg(long)]
        copy: bool,

        /// Export the table to a file
        #[arg(long, value_enum, requires = "file")]
        export: Option<ExportFormat>,

        /// Output file for --export
        #[arg(long, value_name = "FILE", requires = "export")]
        file: Option<String>,

        /// Overwrite the output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Merge pre-pivoted matrices (date columns already in the header)
    Matrix {
        /// Matrix CSV files; first column = category, headers = dates
        #[arg(required = true)]
        files: Vec<String>,

        /// Print the tab-separated copy block instead of the table
        #[arg(long)]
        copy: bool,

        /// Export the merged table to a file
        #[arg(long, value_enum, requires = "file")]
        export: Option<ExportFormat>,

        /// Output file for --export
        #[arg(long, value_name = "FILE", requires = "export")]
        file: Option<String>,

        /// Overwrite the output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Per-category occurrence count and total minutes across all sources
    Tracker {
        /// Event or rollup CSV files
        #[arg(required = true)]
        files: Vec<String>,

        /// Whitelist file (one category per line); missing file is fatal
        #[arg(long, value_name = "FILE")]
        whitelist: Option<String>,

        /// Add the minutes-per-occurrence column
        #[arg(long)]
        avg: bool,

        /// Print the tab-separated copy block instead of the table
        #[arg(long)]
        copy: bool,
    },

    /// LEFT/RIGHT retry distribution from vision result files
    Retry {
        /// Headerless vision CSV files (direction in column 4, attempts in
        /// column 6)
        #[arg(required = true)]
        files: Vec<String>,

        /// Print the tab-separated copy block instead of the table
        #[arg(long)]
        copy: bool,
    },

    /// Sum equipment status documents over the selected shifts of a date
    Status {
        /// Status JSON documents (one per fetched range)
        #[arg(required = true)]
        files: Vec<String>,

        /// Base date of the shifts (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        date: String,

        /// Include the Day shift range
        #[arg(long)]
        day: bool,

        /// Include the Swing shift range
        #[arg(long)]
        swing: bool,

        /// Include the Night shift range (22:00 through next-day 05:59)
        #[arg(long)]
        night: bool,

        /// Equipment code to match (e.g. RLTC-01)
        #[arg(long)]
        eqp: Option<String>,

        /// Equipment line number to match
        #[arg(long)]
        line: Option<String>,
    },
}
