use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// Check whether a file may be created or overwritten.
///
/// - file does not exist → Ok
/// - file exists and `force` → Ok
/// - file exists without `force` → ask the user
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    if !confirm("Overwrite?")? {
        return Err(AppError::Export(format!(
            "cancelled: '{}' not overwritten",
            path.display()
        )));
    }

    info("Existing file will be overwritten.");
    Ok(())
}

/// Ask a yes/no question on stdin; anything but y/yes is a no.
pub fn confirm(prompt: &str) -> AppResult<bool> {
    print!("{prompt} [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
