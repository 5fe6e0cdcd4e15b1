// src/sheet/table.rs

use crate::errors::{AppError, AppResult};
use crate::sheet::Cell;

static EMPTY_CELL: Cell = Cell::Empty;

/// A sheet re-read under its detected header row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub sheet: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(sheet: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            sheet: sheet.into(),
            headers,
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of an optional column.
    pub fn find_column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name.trim())
    }

    /// Position of a required column.
    pub fn column(&self, name: &str) -> AppResult<usize> {
        self.find_column(name).ok_or_else(|| AppError::MissingColumn {
            sheet: self.sheet.clone(),
            column: name.to_string(),
        })
    }

    /// Cell at (`row`, `col`); short rows read as empty.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY_CELL)
    }

    /// Cell by column name; a missing column reads as empty.
    pub fn get(&self, row: usize, column: &str) -> &Cell {
        match self.find_column(column) {
            Some(col) => self.cell(row, col),
            None => &EMPTY_CELL,
        }
    }
}
