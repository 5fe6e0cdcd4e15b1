// src/sheet/mod.rs

mod cell;
mod loader;
mod reader;
mod table;

pub use cell::Cell;
pub use loader::{SheetLayout, load, load_table};
pub use reader::{RawSheet, SheetSelector, read_sheet};
pub use table::Table;
