//! Error types for the CSV exporter.

use thiserror::Error;

/// Errors that can occur during CSV export.
#[derive(Error, Debug)]
pub enum CsvExportError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Header row does not match the export projection.
    #[error("Unexpected CSV header: expected {expected:?}, found {found:?}")]
    UnexpectedHeader {
        expected: Vec<String>,
        found: Vec<String>,
    },
}
