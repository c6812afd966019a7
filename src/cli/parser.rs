use crate::core::calculator::Granularity;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for ridelog
#[derive(Parser)]
#[command(
    name = "ridelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log your ride-hailing work days and see earnings, costs and rides per month, week and day",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Add the work day for DATE, replacing any entry already logged that day
    Add {
        /// Date of the work day (YYYY-MM-DD)
        date: String,

        #[arg(long, allow_negative_numbers = true, help = "Gross earnings")]
        earnings: f64,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true, help = "Expenses (fuel, tolls, ...)")]
        expenses: f64,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true, help = "Distance driven")]
        distance: f64,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true, help = "Hours worked")]
        hours: f64,

        #[arg(long, default_value_t = 0, help = "Rides on Uber")]
        uber: u64,

        #[arg(long = "ninety-nine", default_value_t = 0, help = "Rides on 99")]
        ninety_nine: u64,

        #[arg(long = "indriver", default_value_t = 0, help = "Rides on inDriver")]
        in_driver: u64,
    },

    /// Replace an entry with a copy carrying the given changes
    Edit {
        /// Entry id (or a unique prefix of it)
        id: String,

        #[arg(long, help = "Move the entry to another date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, allow_negative_numbers = true)]
        earnings: Option<f64>,

        #[arg(long, allow_negative_numbers = true)]
        expenses: Option<f64>,

        #[arg(long, allow_negative_numbers = true)]
        distance: Option<f64>,

        #[arg(long, allow_negative_numbers = true)]
        hours: Option<f64>,

        #[arg(long)]
        uber: Option<u64>,

        #[arg(long = "ninety-nine")]
        ninety_nine: Option<u64>,

        #[arg(long = "indriver")]
        in_driver: Option<u64>,
    },

    /// Delete an entry by id
    Del {
        /// Entry id (or a unique prefix of it)
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List logged work days, newest first
    List {
        /// Filter by period.
        ///
        /// Supported formats: YYYY, YYYY-MM, YYYY-MM-DD, ranges like
        /// YYYY-MM:YYYY-MM, or `all`. Default: all.
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Show statistics (current month by default)
    Stats {
        #[arg(long, help = "Monthly totals and averages")]
        month: bool,

        #[arg(long, help = "Rides per platform since Sunday")]
        week: bool,

        #[arg(long, value_name = "DATE", help = "Figures for a single day (YYYY-MM-DD)")]
        day: Option<String>,

        #[arg(long, value_name = "DATE", help = "Reference date instead of today (YYYY-MM-DD)")]
        at: Option<String>,
    },

    /// Totals grouped by day, week, month or year
    Report {
        #[arg(long, value_enum, default_value = "month")]
        by: Granularity,

        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Store the copy in a .zip archive")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite without confirmation")]
        force: bool,
    },

    /// Export logged entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Date range to export (same formats as `list --period`)
        #[arg(long, value_name = "RANGE")]
        range: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
