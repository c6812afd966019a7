pub mod add;
pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod report;
pub mod stats;

use crate::core::repository::Repository;
use crate::db::kv::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::EntryId;
use crate::utils::date;
use chrono::NaiveDate;

/// Resolve a full id or a unique id prefix to a stored entry id.
///
/// `Ok(None)` when nothing matches; blank input and ambiguous prefixes are
/// errors.
pub(crate) fn resolve_id<S: KeyValueStore>(
    repo: &Repository<S>,
    input: &str,
) -> AppResult<Option<EntryId>> {
    let input = input.trim();
    if input.is_empty() {
        return Err(AppError::Other("an entry id is required".to_string()));
    }

    let exact = EntryId::new(input);
    if repo.get(&exact).is_some() {
        return Ok(Some(exact));
    }

    let matches: Vec<&EntryId> = repo
        .list()
        .iter()
        .map(|e| &e.id)
        .filter(|id| id.as_str().starts_with(input))
        .collect();

    match matches.as_slice() {
        [] => Ok(None),
        [one] => Ok(Some((*one).clone())),
        _ => Err(AppError::Other(format!(
            "id prefix '{input}' matches {} entries; use more characters",
            matches.len()
        ))),
    }
}

pub(crate) fn parse_cli_date(s: &str) -> AppResult<NaiveDate> {
    date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}
