// src/export/excel_date.rs

use crate::utils::date::date_to_serial;
use chrono::NaiveDate;

/// Number format applied to date cells in the report.
pub(crate) const DATE_NUM_FORMAT: &str = "mm/dd/yyyy";

/// Interpret a report date (`YYYY-MM-DD`) as an Excel serial, so it lands in
/// the workbook as a real date cell instead of text.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<f64> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| date_to_serial(d) as f64)
}
