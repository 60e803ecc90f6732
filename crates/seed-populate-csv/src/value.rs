//! Cell value -> CSV string conversion.

use crate::error::CSVPopulatorError;
use seed_core::CellValue;
use std::fmt::Write;

/// Wrapper for CSV string values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvValue(pub String);

impl CsvValue {
    /// Render a cell, formatting instants with `date_format`.
    pub fn from_cell(value: CellValue, date_format: &str) -> Result<Self, CSVPopulatorError> {
        let rendered = match value {
            // Null - empty string
            CellValue::Null => String::new(),
            CellValue::UInt(n) => n.to_string(),
            CellValue::Float(f) => f.to_string(),
            CellValue::Text(s) => s,
            CellValue::DateTime(dt) => {
                let mut out = String::new();
                write!(out, "{}", dt.format(date_format))
                    .map_err(|_| CSVPopulatorError::DateFormat(date_format.to_string()))?;
                out
            }
        };
        Ok(CsvValue(rendered))
    }

    /// Get the inner CSV string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get a reference to the inner CSV string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
