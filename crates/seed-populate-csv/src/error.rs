//! Error types for the CSV populator.

use thiserror::Error;

/// Errors that can occur while writing CSV files.
#[derive(Error, Debug)]
pub enum CSVPopulatorError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A schema column names a key the record does not have.
    #[error("Table '{table}' has no field '{field}'")]
    UnknownField { table: String, field: String },

    /// The configured date format could not render a value.
    #[error("Date format {0:?} cannot be rendered")]
    DateFormat(String),
}
