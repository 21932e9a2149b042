//! Error types for the parcoords library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for parcoords operations.
#[derive(Debug, Error)]
pub enum ParcoordsError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing delimited or fixed-width data.
    #[error("Parse error at row {row}, column {column}: {message}")]
    Parse {
        row: usize,
        column: usize,
        message: String,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error reading a workbook.
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// File format not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Empty file or no data to load.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// A column selected for date conversion holds a value that is not a date.
    #[error("Column '{column}' could not be parsed as a date: '{value}'")]
    DateParse { column: String, value: String },

    /// Column lookup failed.
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Two columns share a name.
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    /// A column does not have as many values as the table has rows.
    #[error("Column '{column}' has {actual} values, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Error fetching a dataset over HTTP.
    #[error("HTTP error for '{url}': {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Malformed upload payload.
    #[error("Upload error: {0}")]
    Upload(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for parcoords operations.
pub type Result<T> = std::result::Result<T, ParcoordsError>;
