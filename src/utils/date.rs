//! Serial-date conversion.
//!
//! Every date the engine compares is reduced to a day count from the
//! spreadsheet epoch 1899-12-30, so two dates are equal iff their serials are
//! equal, whatever format the source used to display them.

use crate::errors::{AppError, AppResult};
use crate::sheet::Cell;
use chrono::{Datelike, NaiveDate};

/// U.S. month/day/year, the format ADP exports use.
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

/// Sentinel for a missing (or unreadable) date.
pub const MISSING_DATE: i64 = -1;

/// `num_days_from_ce` of 1899-12-30.
const EXCEL_EPOCH_DAYS_FROM_CE: i64 = 693_594;

pub fn date_to_serial(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - EXCEL_EPOCH_DAYS_FROM_CE
}

pub fn serial_to_date(serial: i64) -> Option<NaiveDate> {
    if serial < 0 {
        return None;
    }
    let days = i32::try_from(serial + EXCEL_EPOCH_DAYS_FROM_CE).ok()?;
    NaiveDate::from_num_days_from_ce_opt(days)
}

/// `YYYY-MM-DD` for a serial, `None` for the missing sentinel.
pub fn serial_to_iso(serial: i64) -> Option<String> {
    serial_to_date(serial).map(|d| d.format("%Y-%m-%d").to_string())
}

/// Parse a date string with `format` into a serial date.
pub fn parse_serial_date(s: &str, format: &str) -> AppResult<i64> {
    NaiveDate::parse_from_str(s.trim(), format)
        .map(date_to_serial)
        .map_err(|_| AppError::InvalidDate {
            value: s.to_string(),
            format: format.to_string(),
        })
}

/// Convert a cell to a serial date.
///
/// - numbers are already serials (native spreadsheet dates) and pass through;
///   any time-of-day fraction is dropped
/// - empty cells give [`MISSING_DATE`]
/// - text is parsed with `format`
pub fn to_serial_date(value: &Cell, format: &str) -> AppResult<i64> {
    match value {
        Cell::Number(n) => Ok(n.trunc() as i64),
        Cell::Empty => Ok(MISSING_DATE),
        Cell::Text(s) if s.trim().is_empty() => Ok(MISSING_DATE),
        Cell::Text(s) => parse_serial_date(s, format),
    }
}

/// Per-record variant of [`to_serial_date`]: an unparseable value becomes
/// [`MISSING_DATE`] and is noted in `anomalies` instead of failing the run.
pub fn serial_date_or_missing(
    value: &Cell,
    format: &str,
    field: &str,
    anomalies: &mut Vec<String>,
) -> i64 {
    match to_serial_date(value, format) {
        Ok(serial) => serial,
        Err(_) => {
            anomalies.push(format!("invalid {field} '{value}'"));
            MISSING_DATE
        }
    }
}
