pub mod add;
pub mod backup;
pub mod calculator;
pub mod del;
pub mod edit;
pub mod persistence;
pub mod repository;

use crate::config::Config;
use crate::db::kv::SqliteKv;
use crate::errors::AppResult;
use persistence::Persistence;
use repository::{LoadReport, Repository};
use tracing::{info, warn};

/// Open the repository configured in `cfg` (database file + storage key).
///
/// An unreadable slot is logged and the repository starts empty.
pub fn open_repository(cfg: &Config) -> AppResult<Repository<SqliteKv>> {
    let store = SqliteKv::open(&cfg.database)?;
    let repo = Repository::init(Persistence::new(store, cfg.storage_key.clone()));

    match repo.load_report() {
        LoadReport::Recovered(e) => {
            warn!(key = %cfg.storage_key, error = %e, "stored entries unreadable; starting empty")
        }
        LoadReport::Restored(n) => info!(key = %cfg.storage_key, entries = n, "entries restored"),
        LoadReport::Empty => info!(key = %cfg.storage_key, "no stored entries"),
    }

    Ok(repo)
}
