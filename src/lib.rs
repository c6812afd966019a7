//! ridelog library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! storage / statistics modules the commands are built on.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

pub use crate::core::calculator::{
    DailyStats, Granularity, PeriodStats, PeriodSummary, WeeklyStats, daily_stats, monthly_stats,
    period_stats, summarize_by_period, weekly_stats,
};
pub use crate::core::persistence::{DEFAULT_STORAGE_KEY, Persistence};
pub use crate::core::repository::{LoadReport, Repository};
pub use crate::db::{KeyValueStore, MemoryKv, SqliteKv};
pub use crate::errors::{AppError, AppResult};
pub use crate::models::{EntryId, Platform, RideCounts, WorkSessionEntry};

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use tracing::debug;
use utils::path::expand_tilde_str;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command, cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Config is loaded once and handed to every command
    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_db_path(&expand_tilde_str(custom_db))
            .to_string_lossy()
            .to_string();
    }

    logging::init(&cfg.log_level);
    debug!(database = %cfg.database, key = %cfg.storage_key, "configuration loaded");

    dispatch(&cli, &cfg)
}
