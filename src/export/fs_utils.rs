// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::export::naming::backup_path;
use crate::ui::messages::{info, warning};
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

/// Check whether a file can be created or replaced.
///
/// - file does NOT exist → Ok
/// - file exists and `overwrite` → Ok (it will be replaced, never merged)
/// - file exists and `!overwrite` → `FileWriteConflict`
pub(crate) fn ensure_writable(path: &Path, overwrite: bool) -> AppResult<()> {
    if !path.exists() {
        return Ok(());
    }

    if !overwrite {
        return Err(AppError::FileWriteConflict(path.display().to_string()));
    }

    warning(format!(
        "The file '{}' already exists and will be overwritten.",
        path.display()
    ));
    Ok(())
}

/// Copy an existing file aside before it gets replaced.
pub(crate) fn backup_existing(path: &Path, timestamp: NaiveDateTime) -> AppResult<Option<PathBuf>> {
    if !path.exists() {
        return Ok(None);
    }

    let backup = backup_path(path, timestamp);
    fs::copy(path, &backup)?;
    info(format!("Previous file backed up to {}", backup.display()));
    Ok(Some(backup))
}

/// Create the output directory (and parents) when missing.
pub(crate) fn ensure_dir(dir: &Path) -> AppResult<()> {
    if !dir.is_dir() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
