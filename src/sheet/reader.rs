// src/sheet/reader.rs

use crate::errors::{AppError, AppResult};
use crate::sheet::Cell;
use calamine::{Data, Range, Reader, open_workbook_auto};
use std::fmt;
use std::path::Path;

/// Which sheet of a workbook to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSelector {
    Name(String),
    Index(usize),
}

impl fmt::Display for SheetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetSelector::Name(name) => write!(f, "{name}"),
            SheetSelector::Index(i) => write!(f, "#{i}"),
        }
    }
}

/// Sheet contents as read, before any header detection.
/// Row and column indices are absolute: index 0 is spreadsheet row 1 / column A.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

impl RawSheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }
}

/// Read one sheet from an xlsx/xls/ods workbook.
pub fn read_sheet(path: &Path, sheet: &SheetSelector) -> AppResult<RawSheet> {
    let mut workbook = open_workbook_auto(path)?;
    let names = workbook.sheet_names();

    let name = match sheet {
        SheetSelector::Name(n) => names.iter().find(|s| *s == n).cloned(),
        SheetSelector::Index(i) => names.get(*i).cloned(),
    }
    .ok_or_else(|| AppError::SheetNotFound {
        path: path.display().to_string(),
        sheet: sheet.to_string(),
    })?;

    let range = workbook.worksheet_range(&name)?;
    Ok(RawSheet::new(name, materialize(&range)))
}

/// Expand a calamine range into an absolute grid (the range may not start at A1).
fn materialize(range: &Range<Data>) -> Vec<Vec<Cell>> {
    let (start_row, start_col) = range.start().unwrap_or((0, 0));
    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); start_row as usize];

    for data_row in range.rows() {
        let mut row = vec![Cell::Empty; start_col as usize];
        row.extend(data_row.iter().map(Cell::from));
        rows.push(row);
    }

    rows
}
