use crate::cli::commands::{parse_cli_date, resolve_id};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, EntryChanges};
use crate::core::open_repository;
use crate::errors::{AppError, AppResult};
use crate::models::Platform;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
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
        let new_date = date.as_deref().map(parse_cli_date).transpose()?;

        let rides: Vec<(Platform, u64)> = [
            (Platform::Uber, *uber),
            (Platform::NinetyNine, *ninety_nine),
            (Platform::InDriver, *in_driver),
        ]
        .into_iter()
        .filter_map(|(p, count)| count.map(|c| (p, c)))
        .collect();

        let changes = EntryChanges {
            date: new_date,
            earnings: *earnings,
            expenses: *expenses,
            distance: *distance,
            hours_worked: *hours,
            rides,
        };

        let mut repo = open_repository(cfg)?;
        let resolved = resolve_id(&repo, id)?
            .ok_or_else(|| AppError::Other(format!("no entry with id {id}")))?;

        EditLogic::apply(&mut repo, &resolved, changes)?;
    }

    Ok(())
}
