use crate::cli::commands::resolve_id;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::core::open_repository;
use crate::errors::AppResult;
use crate::export::fs_utils::confirm;
use crate::models::EntryId;
use crate::ui::messages::{info, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut repo = open_repository(cfg)?;

        // Unknown ids fall through to a no-op delete
        let target = resolve_id(&repo, id)?.unwrap_or_else(|| EntryId::new(id.trim()));

        if let Some(entry) = repo.get(&target) {
            if !*yes {
                warning(format!(
                    "Delete entry {} for {}? This action is irreversible.",
                    entry.id, entry.date
                ));
                if !confirm("Confirm")? {
                    info("Operation cancelled.");
                    return Ok(());
                }
            }
        }

        DeleteLogic::apply(&mut repo, &target)?;
    }

    Ok(())
}
