//! Scalar cell values handed from generated entities to tabular writers.

use chrono::NaiveDateTime;

/// A single scalar cell of an output row.
///
/// Writers decide how each variant is rendered; `Null` is always an empty cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Absent optional field
    Null,

    /// Unsigned integer: ids, counts, ages
    UInt(u64),

    /// Floating point number
    Float(f64),

    /// Plain text
    Text(String),

    /// Calendar instant, rendered with the writer's date format
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Whether this cell is an absent optional value.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl From<Option<NaiveDateTime>> for CellValue {
    fn from(value: Option<NaiveDateTime>) -> Self {
        value.map_or(CellValue::Null, CellValue::DateTime)
    }
}

impl From<u64> for CellValue {
    fn from(value: u64) -> Self {
        CellValue::UInt(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::UInt(u64::from(value))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

/// Record that exposes its fields by key.
///
/// Returns `None` for a key the record does not have, and `Some(CellValue::Null)`
/// for a known optional field that is absent.
pub trait ToRow {
    fn field(&self, key: &str) -> Option<CellValue>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_optional_datetime_conversion() {
        let dt = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();

        assert_eq!(CellValue::from(Some(dt)), CellValue::DateTime(dt));
        assert!(CellValue::from(None::<NaiveDateTime>).is_null());
    }

    #[test]
    fn test_integer_conversions() {
        assert_eq!(CellValue::from(42u64), CellValue::UInt(42));
        assert_eq!(CellValue::from(7u32), CellValue::UInt(7));
        assert_eq!(CellValue::from(u64::MAX), CellValue::UInt(u64::MAX));
    }
}
