// src/sheet/loader.rs

use crate::errors::{AppError, AppResult};
use crate::sheet::{RawSheet, SheetSelector, Table, read_sheet};
use std::path::Path;

/// Where a format keeps its header: the sheet, and the column/label pair that
/// anchors the header row below any title block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    pub sheet: SheetSelector,
    pub anchor_column: usize,
    pub anchor_label: String,
}

impl SheetLayout {
    pub fn new(sheet: SheetSelector, anchor_column: usize, anchor_label: &str) -> Self {
        Self {
            sheet,
            anchor_column,
            anchor_label: anchor_label.to_string(),
        }
    }
}

/// Locate the header row by scanning `anchor_column` top-to-bottom for
/// `anchor_label`, then re-read everything below it as data.
///
/// Fully blank rows under the header are dropped.
pub fn load(raw: &RawSheet, anchor_column: usize, anchor_label: &str) -> AppResult<Table> {
    let header_row = raw
        .rows
        .iter()
        .position(|row| {
            row.get(anchor_column)
                .is_some_and(|c| c.matches_label(anchor_label))
        })
        .ok_or_else(|| AppError::HeaderNotFound {
            sheet: raw.name.clone(),
            column: anchor_column,
            label: anchor_label.to_string(),
        })?;

    let headers: Vec<String> = raw.rows[header_row].iter().map(|c| c.as_text()).collect();

    let rows: Vec<_> = raw.rows[header_row + 1..]
        .iter()
        .filter(|row| !row.iter().all(|c| c.is_blank()))
        .cloned()
        .collect();

    Ok(Table::new(raw.name.clone(), headers, rows))
}

/// Read the sheet named by `layout` from `path` and load it.
pub fn load_table(path: &Path, layout: &SheetLayout) -> AppResult<Table> {
    let raw = read_sheet(path, &layout.sheet)?;
    load(&raw, layout.anchor_column, &layout.anchor_label)
}
