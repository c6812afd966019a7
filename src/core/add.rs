use crate::core::repository::Repository;
use crate::db::kv::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::WorkSessionEntry;
use crate::ui::messages::{info, success};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate and upsert `entry` for its date.
    ///
    /// Returns the id of the entry it replaced, if any.
    pub fn apply<S: KeyValueStore>(
        repo: &mut Repository<S>,
        entry: WorkSessionEntry,
    ) -> AppResult<Option<String>> {
        entry.validate()?;

        let date = entry.date;
        let replaced = repo.find_by_date(date).map(|e| e.id.to_string());

        repo.add(entry);

        if let Some(e) = repo.last_flush_error() {
            return Err(AppError::Other(format!(
                "entry for {date} was not saved: {e}"
            )));
        }

        match &replaced {
            Some(old) => {
                info(format!("Existing entry {old} replaced."));
                success(format!("Entry for {date} updated."));
            }
            None => success(format!("Entry for {date} added.")),
        }

        Ok(replaced)
    }
}
