use crate::core::repository::Repository;
use crate::db::kv::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::{EntryId, WorkSessionEntry};
use crate::ui::messages::{info, success};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove the entry with `id`. An unknown id is not an error.
    pub fn apply<S: KeyValueStore>(
        repo: &mut Repository<S>,
        id: &EntryId,
    ) -> AppResult<Option<WorkSessionEntry>> {
        let removed = repo.remove(id);

        if let Some(e) = repo.last_flush_error() {
            return Err(AppError::Other(format!("deletion was not saved: {e}")));
        }

        match &removed {
            Some(entry) => success(format!("Entry {} ({}) deleted.", id, entry.date)),
            None => info(format!("No entry with id {id}: nothing to delete.")),
        }

        Ok(removed)
    }
}
