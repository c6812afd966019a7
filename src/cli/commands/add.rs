use crate::cli::commands::parse_cli_date;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::open_repository;
use crate::errors::AppResult;
use crate::models::{RideCounts, WorkSessionEntry};

/// Add or replace the entry for a date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        earnings,
        expenses,
        distance,
        hours,
        uber,
        ninety_nine,
        in_driver,
    } = cmd
    {
        let d = parse_cli_date(date)?;

        let entry = WorkSessionEntry::new(
            d,
            *earnings,
            *expenses,
            *distance,
            *hours,
            RideCounts::new(*uber, *ninety_nine, *in_driver),
        );

        let mut repo = open_repository(cfg)?;
        AddLogic::apply(&mut repo, entry)?;
    }

    Ok(())
}
