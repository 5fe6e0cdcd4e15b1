//! "Last, First" name handling.

use crate::errors::{AppError, AppResult};

/// Split a payroll-style `"Last, First"` name into `(first, last)`.
///
/// Splits on the first comma only; both parts are trimmed.
pub fn split_name(full: &str) -> AppResult<(String, String)> {
    let (last, first) = full
        .split_once(',')
        .ok_or_else(|| AppError::MalformedName(full.to_string()))?;

    Ok((first.trim().to_string(), last.trim().to_string()))
}

/// Inverse of [`split_name`].
pub fn join_name(first: &str, last: &str) -> String {
    format!("{}, {}", last.trim(), first.trim())
}
