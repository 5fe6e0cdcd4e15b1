// src/export/mod.rs

mod csv_mirror;
mod excel_date;
mod fs_utils;
pub mod model;
mod naming;
mod xlsx;

pub use model::{ReportRow, append_anomalies, comment_with_anomalies};
pub use naming::{backup_path, report_file_name};

use crate::errors::AppResult;
use crate::models::{PlanType, ProviderFormat};
use crate::ui::messages::success;
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

/// Common completion message for written files.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} written: {}", path.display()));
}

/// Where and how a finished report is written.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    pub output_dir: PathBuf,
    pub provider: ProviderFormat,
    pub plan: PlanType,
    pub timestamp: NaiveDateTime,
    pub overwrite: bool,
    pub backup_existing: bool,
    pub csv_mirror: bool,
}

/// Write the report workbook (and its CSV twin when enabled).
/// Returns the path of the xlsx file.
pub fn write_report(rows: &[ReportRow], opts: &WriteOptions) -> AppResult<PathBuf> {
    fs_utils::ensure_dir(&opts.output_dir)?;

    let xlsx_path = opts
        .output_dir
        .join(report_file_name(opts.provider, opts.plan, opts.timestamp, "xlsx"));
    let csv_path = xlsx_path.with_extension("csv");

    fs_utils::ensure_writable(&xlsx_path, opts.overwrite)?;
    if opts.csv_mirror {
        fs_utils::ensure_writable(&csv_path, opts.overwrite)?;
    }

    if opts.backup_existing {
        fs_utils::backup_existing(&xlsx_path, opts.timestamp)?;
        if opts.csv_mirror {
            fs_utils::backup_existing(&csv_path, opts.timestamp)?;
        }
    }

    xlsx::export_xlsx(rows, &xlsx_path)?;

    if opts.csv_mirror
        && let Err(e) = csv_mirror::export_csv(rows, &csv_path)
    {
        // a report is either complete or absent
        fs::remove_file(&xlsx_path).ok();
        return Err(e);
    }

    Ok(xlsx_path)
}
