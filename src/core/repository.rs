//! Entry repository: owner of the canonical set of work-session entries.
//!
//! Every mutation is applied in memory first and then flushed through the
//! persistence adapter. A failed flush is recorded and logged but never
//! undoes the in-memory change; the in-memory set stays authoritative for
//! the rest of the session.

use crate::core::persistence::Persistence;
use crate::db::kv::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::{EntryId, WorkSessionEntry};
use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Outcome of the last `load`.
#[derive(Debug)]
pub enum LoadReport {
    /// Slot read and parsed; number of entries kept
    Restored(usize),
    /// Slot never written
    Empty,
    /// Slot unreadable; the repository started empty
    Recovered(AppError),
}

impl LoadReport {
    pub fn is_recovered(&self) -> bool {
        matches!(self, LoadReport::Recovered(_))
    }
}

pub struct Repository<S: KeyValueStore> {
    persistence: Persistence<S>,
    entries: Vec<WorkSessionEntry>,
    load_report: LoadReport,
    last_flush_error: Option<AppError>,
}

impl<S: KeyValueStore> Repository<S> {
    /// Build the repository and restore the stored entries.
    ///
    /// Never fails: an unreadable slot leaves the repository empty and is
    /// reported through `load_report()`.
    pub fn init(persistence: Persistence<S>) -> Self {
        let mut repo = Self {
            persistence,
            entries: Vec::new(),
            load_report: LoadReport::Empty,
            last_flush_error: None,
        };
        repo.load();
        repo
    }

    /// Re-read the slot, replacing the in-memory set.
    pub fn load(&mut self) -> &[WorkSessionEntry] {
        match self.persistence.load_checked() {
            Ok(Some(entries)) => {
                self.entries = dedup_by_date(entries);
                self.load_report = LoadReport::Restored(self.entries.len());
            }
            Ok(None) => {
                self.entries.clear();
                self.load_report = LoadReport::Empty;
            }
            Err(e) => {
                self.entries.clear();
                self.load_report = LoadReport::Recovered(e);
            }
        }
        &self.entries
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    /// Insert `entry`, replacing whatever entry shares its date.
    ///
    /// The entry is not validated here; callers taking user input run
    /// `WorkSessionEntry::validate` first. A non-finite amount makes the
    /// flush fail (see `last_flush_error`) so the stored slot is never
    /// replaced by an unreadable one.
    pub fn add(&mut self, entry: WorkSessionEntry) {
        match self.entries.iter().position(|e| e.date == entry.date) {
            Some(idx) => {
                debug!(date = %entry.date, old = %self.entries[idx].id, new = %entry.id, "entry replaced");
                self.entries[idx] = entry;
            }
            None => {
                debug!(date = %entry.date, id = %entry.id, "entry added");
                self.entries.push(entry);
            }
        }
        self.flush();
    }

    /// Delete the entry with `id`. Unknown ids are a no-op.
    /// Returns the removed entry, if any.
    pub fn remove(&mut self, id: &EntryId) -> Option<WorkSessionEntry> {
        let removed = self
            .entries
            .iter()
            .position(|e| &e.id == id)
            .map(|idx| self.entries.remove(idx));

        if removed.is_none() {
            debug!(%id, "remove: no such entry");
        }
        self.flush();
        removed
    }

    /// Current entries. No particular order is guaranteed.
    pub fn list(&self) -> &[WorkSessionEntry] {
        &self.entries
    }

    pub fn get(&self, id: &EntryId) -> Option<&WorkSessionEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn find_by_date(&self, date: NaiveDate) -> Option<&WorkSessionEntry> {
        self.entries.iter().find(|e| e.date == date)
    }

    /// Copy of the entries, newest date first.
    pub fn history(&self) -> Vec<WorkSessionEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Error of the most recent flush, cleared by the next successful one.
    pub fn last_flush_error(&self) -> Option<&AppError> {
        self.last_flush_error.as_ref()
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    /// Flush one last time and release the storage backend.
    pub fn close(mut self) -> AppResult<S> {
        self.persistence.save(&self.entries)?;
        Ok(self.persistence.into_store())
    }

    fn flush(&mut self) {
        match self.persistence.save(&self.entries) {
            Ok(()) => self.last_flush_error = None,
            Err(e) => {
                warn!(key = %self.persistence.key(), error = %e, "flush failed; keeping in-memory entries");
                self.last_flush_error = Some(e);
            }
        }
    }
}

/// Keep one entry per date; the later occurrence in stored order wins.
fn dedup_by_date(entries: Vec<WorkSessionEntry>) -> Vec<WorkSessionEntry> {
    let total = entries.len();
    let mut seen = HashSet::new();

    let mut kept: Vec<WorkSessionEntry> = entries
        .into_iter()
        .rev()
        .filter(|e| seen.insert(e.date))
        .collect();
    kept.reverse();

    if kept.len() < total {
        warn!(dropped = total - kept.len(), "stored entries shared a date; kept the last of each");
    }
    kept
}
