use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rworktime
/// CLI application to measure working time against a day-by-day calendar
#[derive(Parser)]
#[command(
    name = "rworktime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Measure working time between timestamps, skipping nights, weekends and holidays",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or per-project calendars)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Normalize a schedule table and show the resulting day windows
    Schedule {
        /// Schedule CSV (columns named as in the configuration)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Print the day windows as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Working time between two timestamps
    Calc {
        /// Schedule CSV
        #[arg(long, value_name = "FILE")]
        schedule: String,

        /// Start timestamp (YYYY-MM-DD HH:MM[:SS])
        #[arg(long)]
        start: String,

        /// End timestamp (YYYY-MM-DD HH:MM[:SS])
        #[arg(long)]
        end: String,

        /// Print only the number of seconds
        #[arg(long)]
        seconds: bool,
    },

    /// Measure every case of a cases table and export the results
    Batch {
        /// Schedule CSV
        #[arg(long, value_name = "FILE")]
        schedule: String,

        /// Cases CSV (id, start, end columns as in the configuration)
        #[arg(long, value_name = "FILE")]
        cases: String,

        /// Export format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
