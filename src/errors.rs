//! Unified application error type.
//! Loader, engine, export and CLI layers all return AppError so that a failed
//! report surfaces as exactly one terminal message.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("XLSX write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Layout errors
    // ---------------------------
    #[error("Sheet '{sheet}' not found in {path}")]
    SheetNotFound { path: String, sheet: String },

    #[error("Header '{label}' not found in column {column} of sheet '{sheet}' (unsupported file layout)")]
    HeaderNotFound {
        sheet: String,
        column: usize,
        label: String,
    },

    #[error("Column '{column}' missing from sheet '{sheet}'")]
    MissingColumn { sheet: String, column: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Malformed name (expected \"Last, First\"): {0}")]
    MalformedName(String),

    #[error("Invalid date '{value}' (expected format {format})")]
    InvalidDate { value: String, format: String },

    // ---------------------------
    // Report errors
    // ---------------------------
    #[error("No report available for provider {provider} and plan type {plan}")]
    UnsupportedCombination { provider: String, plan: String },

    #[error("Output file already exists and overwrite is disabled: {0}")]
    FileWriteConflict(String),

    #[error("Cannot generate report:\n- {}", .0.join("\n- "))]
    InvalidRequest(Vec<String>),

    #[error("{failed} of {total} batch jobs failed")]
    Batch { failed: usize, total: usize },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
