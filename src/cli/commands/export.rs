use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::open_repository;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let path = expand_tilde(file);
        let repo = open_repository(cfg)?;

        ExportLogic::export(repo.list(), *format, &path, range.as_deref(), *force)?;
    }
    Ok(())
}
