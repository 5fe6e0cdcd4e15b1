// src/export/naming.rs

use crate::models::{PlanType, ProviderFormat};
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// `StatusReport_{provider}_{plan}_{yyyyMMdd_HHmmss}.{ext}`
pub fn report_file_name(
    provider: ProviderFormat,
    plan: PlanType,
    timestamp: NaiveDateTime,
    ext: &str,
) -> String {
    format!(
        "StatusReport_{}_{}_{}.{}",
        provider.file_tag(),
        plan.file_tag(),
        timestamp.format(TIMESTAMP_FORMAT),
        ext
    )
}

/// `{stem}_backup_{timestamp}.{ext}` next to `path`.
pub fn backup_path(path: &Path, timestamp: NaiveDateTime) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!(
            "{stem}_backup_{}.{}",
            timestamp.format(TIMESTAMP_FORMAT),
            ext.to_string_lossy()
        ),
        None => format!("{stem}_backup_{}", timestamp.format(TIMESTAMP_FORMAT)),
    };
    path.with_file_name(name)
}
