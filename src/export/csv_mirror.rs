// src/export/csv_mirror.rs

use crate::errors::AppResult;
use crate::export::model::{ReportRow, get_headers};
use crate::export::notify_export_success;
use std::path::Path;

/// Plain CSV twin of the xlsx report (header included thanks to serde).
pub(crate) fn export_csv(rows: &[ReportRow], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    // serde only emits the header alongside the first record
    if rows.is_empty() {
        wtr.write_record(get_headers().iter().map(|(h, _)| *h))?;
    }

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
