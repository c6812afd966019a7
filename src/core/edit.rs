use crate::core::repository::Repository;
use crate::db::kv::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::{EntryId, Platform, WorkSessionEntry};
use crate::ui::messages::success;
use chrono::NaiveDate;

/// Field overrides for an edit; `None` keeps the current value.
#[derive(Debug, Default, Clone)]
pub struct EntryChanges {
    pub date: Option<NaiveDate>,
    pub earnings: Option<f64>,
    pub expenses: Option<f64>,
    pub distance: Option<f64>,
    pub hours_worked: Option<f64>,
    pub rides: Vec<(Platform, u64)>,
}

pub struct EditLogic;

impl EditLogic {
    /// Replace the entry `id` with a new record built from it and `changes`.
    ///
    /// Entries are never patched in place: the result is a fresh record with
    /// a new id and a recomputed earnings/km. When the date moves, the old
    /// record is removed and the new one upserts on its new date.
    pub fn apply<S: KeyValueStore>(
        repo: &mut Repository<S>,
        id: &EntryId,
        changes: EntryChanges,
    ) -> AppResult<WorkSessionEntry> {
        let current = repo
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::Other(format!("no entry with id {id}")))?;

        let mut rides = current.rides_by_platform;
        for (platform, count) in &changes.rides {
            rides.set(*platform, *count);
        }

        let updated = WorkSessionEntry::new(
            changes.date.unwrap_or(current.date),
            changes.earnings.unwrap_or(current.earnings),
            changes.expenses.unwrap_or(current.expenses),
            changes.distance.unwrap_or(current.distance),
            changes.hours_worked.unwrap_or(current.hours_worked),
            rides,
        );
        updated.validate()?;

        if updated.date != current.date {
            repo.remove(&current.id);
        }
        repo.add(updated.clone());

        if let Some(e) = repo.last_flush_error() {
            return Err(AppError::Other(format!("edit was not saved: {e}")));
        }

        success(format!(
            "Entry for {} updated (new id {}).",
            updated.date, updated.id
        ));
        Ok(updated)
    }
}
