//! Error types for the report pipeline.

use thiserror::Error;

/// Result type alias for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while assembling or writing the report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Failed to read standard input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The spreadsheet library refused a cell, format, or save
    #[error("workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// A chart could not be rendered to its PNG file
    #[error("chart rendering error: {0}")]
    Chart(String),
}
