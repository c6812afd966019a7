//! Persistence adapter: the whole entry set as one JSON array in one slot.

use crate::db::kv::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::WorkSessionEntry;
use tracing::debug;

/// Default slot name.
pub const DEFAULT_STORAGE_KEY: &str = "ride-report-entries";

pub struct Persistence<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Serialize `entries` and overwrite the slot.
    ///
    /// A set holding a NaN or infinite amount is refused and the slot keeps
    /// its previous content.
    pub fn save(&mut self, entries: &[WorkSessionEntry]) -> AppResult<()> {
        if let Some(err) = entries.iter().find_map(WorkSessionEntry::non_finite_amount) {
            return Err(err);
        }
        let blob = serde_json::to_string(entries)?;
        self.store.set(&self.key, &blob)?;
        debug!(key = %self.key, entries = entries.len(), "entries flushed");
        Ok(())
    }

    /// Read the slot.
    ///
    /// `Ok(None)` when the slot was never written, `AppError::Corrupt` when
    /// its content is not a valid entry array.
    pub fn load_checked(&self) -> AppResult<Option<Vec<WorkSessionEntry>>> {
        let Some(blob) = self.store.get(&self.key)? else {
            return Ok(None);
        };

        let entries: Vec<WorkSessionEntry> =
            serde_json::from_str(&blob).map_err(|e| AppError::Corrupt {
                key: self.key.clone(),
                reason: e.to_string(),
            })?;

        debug!(key = %self.key, entries = entries.len(), "entries loaded");
        Ok(Some(entries))
    }

    /// Read the slot, falling back to an empty set on any failure.
    pub fn load(&self) -> Vec<WorkSessionEntry> {
        self.load_checked().ok().flatten().unwrap_or_default()
    }
}
