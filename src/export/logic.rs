use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::models::WorkSessionEntry;
use crate::ui::messages::warning;
use crate::utils::period::{contains, parse_period};
use std::path::Path;
use tracing::info;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export entries, oldest first.
    ///
    /// - `path`: absolute path of the output file
    /// - `range`: `None`, `"all"` or a period expression (`YYYY`, `YYYY-MM`,
    ///   `YYYY-MM-DD`, or `start:end` ranges of the same shape)
    ///
    /// Returns the number of exported entries; nothing is written when the
    /// range is empty.
    pub fn export(
        entries: &[WorkSessionEntry],
        format: ExportFormat,
        path: &Path,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {}",
                path.display()
            )));
        }

        let bounds = match range {
            Some(r) => parse_period(r)?,
            None => None,
        };

        let mut selected: Vec<&WorkSessionEntry> =
            entries.iter().filter(|e| contains(&bounds, &e.date)).collect();
        selected.sort_by_key(|e| e.date);

        if selected.is_empty() {
            warning("No entries found for selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        let rows: Vec<EntryExport> = selected.into_iter().map(EntryExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }
        info!(format = format.as_str(), entries = rows.len(), path = %path.display(), "export written");

        Ok(rows.len())
    }
}
