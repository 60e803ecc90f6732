//! Dataset configuration.
//!
//! Row counts are configuration, not runtime flags: they come from a YAML file
//! or from the defaults below.
//!
//! ```yaml
//! user_count: 1000
//! order_count: 6000
//! product_count: 10
//! output_dir: ./data
//! date_format: "%-m/%-d/%Y"
//! ```

use crate::catalog::PRODUCT_CATALOG;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Orders placed per calendar-month bucket.
pub const ORDERS_PER_MONTH: u64 = 1000;

pub const DEFAULT_USER_COUNT: u64 = 1000;
pub const DEFAULT_ORDER_COUNT: u64 = 6000;
pub const DEFAULT_PRODUCT_COUNT: u64 = 10;
pub const DEFAULT_OUTPUT_DIR: &str = "./data";
/// Short US date, e.g. `3/7/2024`.
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Errors detected before any generation starts.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error reading the config file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("order_count must be a positive multiple of 1000, got {0}")]
    InvalidOrderCount(u64),

    #[error("order_count {count} spans more months than the calendar holds (at most {max})")]
    OrderCountOutOfRange { count: u64, max: u64 },

    #[error("user_count must be positive, got {0}")]
    InvalidUserCount(u64),

    #[error("product_count must be between 1 and {catalog_len} (catalog size), got {count}")]
    InvalidProductCount { count: u64, catalog_len: usize },

    #[error("Invalid date format: {0:?}")]
    InvalidDateFormat(String),

    #[error("Invalid reference date {0:?}, expected YYYY-MM-DD")]
    InvalidReferenceDate(String),
}

/// Sizing and output settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedConfig {
    /// Number of users to generate
    pub user_count: u64,
    /// Number of orders (and order items) to generate
    pub order_count: u64,
    /// Number of catalog products orders may reference
    pub product_count: u64,
    /// Directory receiving one CSV file per table
    pub output_dir: PathBuf,
    /// chrono strftime format for `created_at` / `solved_at`
    pub date_format: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            user_count: DEFAULT_USER_COUNT,
            order_count: DEFAULT_ORDER_COUNT,
            product_count: DEFAULT_PRODUCT_COUNT,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl SeedConfig {
    /// Load and validate a config from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a config from a YAML string. Missing keys keep their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: SeedConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every setting, reporting the first offending value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.order_count == 0 || self.order_count % ORDERS_PER_MONTH != 0 {
            return Err(ConfigError::InvalidOrderCount(self.order_count));
        }
        if self.month_count() > max_month_count() {
            return Err(ConfigError::OrderCountOutOfRange {
                count: self.order_count,
                max: max_month_count() * ORDERS_PER_MONTH,
            });
        }
        if self.user_count == 0 {
            return Err(ConfigError::InvalidUserCount(self.user_count));
        }
        let catalog_len = PRODUCT_CATALOG.len();
        if self.product_count == 0 || self.product_count > catalog_len as u64 {
            return Err(ConfigError::InvalidProductCount {
                count: self.product_count,
                catalog_len,
            });
        }
        // Unknown specifiers and offset specifiers (%z, %Z) fail to render a naive instant.
        let mut sample = String::new();
        if self.date_format.is_empty()
            || write!(sample, "{}", NaiveDateTime::default().format(&self.date_format)).is_err()
        {
            return Err(ConfigError::InvalidDateFormat(self.date_format.clone()));
        }
        Ok(())
    }

    /// Number of calendar-month buckets the orders are spread over.
    pub fn month_count(&self) -> u64 {
        self.order_count / ORDERS_PER_MONTH
    }
}

/// Number of calendar months between chrono's first and last representable dates.
fn max_month_count() -> u64 {
    let ordinal = |date: NaiveDate| i64::from(date.year()) * 12 + i64::from(date.month0());
    (ordinal(NaiveDate::MAX) - ordinal(NaiveDate::MIN)).unsigned_abs()
}

/// Parse a `YYYY-MM-DD` reference date into midnight of that day.
pub fn parse_reference_date(s: &str) -> Result<NaiveDateTime, ConfigError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| ConfigError::InvalidReferenceDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = SeedConfig::default();
        config.validate().unwrap();
        assert_eq!(config.month_count(), 6);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = SeedConfig::from_yaml("order_count: 2000\n").unwrap();

        assert_eq!(config.order_count, 2000);
        assert_eq!(config.user_count, DEFAULT_USER_COUNT);
        assert_eq!(config.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(config.month_count(), 2);
    }

    #[test]
    fn test_order_count_must_be_multiple_of_month_size() {
        for bad in [0, 999, 1500, 6001] {
            let config = SeedConfig {
                order_count: bad,
                ..SeedConfig::default()
            };
            match config.validate() {
                Err(ConfigError::InvalidOrderCount(n)) => assert_eq!(n, bad),
                other => panic!("Expected InvalidOrderCount for {bad}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_order_count_beyond_calendar_rejected() {
        let huge = ORDERS_PER_MONTH * (1u64 << 50);
        let config = SeedConfig {
            order_count: huge,
            ..SeedConfig::default()
        };

        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OrderCountOutOfRange { count, .. } if count == huge
        ));
        assert!(err.to_string().contains(&huge.to_string()));

        let widest = SeedConfig {
            order_count: max_month_count() * ORDERS_PER_MONTH,
            ..SeedConfig::default()
        };
        widest.validate().unwrap();
    }

    #[test]
    fn test_error_message_names_offending_value() {
        let err = SeedConfig::from_yaml("order_count: 2500\n").unwrap_err();
        assert!(err.to_string().contains("2500"));
    }

    #[test]
    fn test_zero_users_rejected() {
        let result = SeedConfig::from_yaml("user_count: 0\n");
        assert!(matches!(result, Err(ConfigError::InvalidUserCount(0))));
    }

    #[test]
    fn test_product_count_bounded_by_catalog() {
        let too_many = PRODUCT_CATALOG.len() as u64 + 1;
        let config = SeedConfig {
            product_count: too_many,
            ..SeedConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidProductCount { count, .. }) if count == too_many
        ));

        let config = SeedConfig {
            product_count: 0,
            ..SeedConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_date_format() {
        let result = SeedConfig::from_yaml("date_format: \"%Q-%m\"\n");
        assert!(matches!(result, Err(ConfigError::InvalidDateFormat(_))));
    }

    #[test]
    fn test_offset_date_format_rejected() {
        for format in ["%Y %z", "%Z", "%:z", ""] {
            let config = SeedConfig {
                date_format: format.to_string(),
                ..SeedConfig::default()
            };
            match config.validate() {
                Err(ConfigError::InvalidDateFormat(f)) => assert_eq!(f, format),
                other => panic!("Expected InvalidDateFormat for {format:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = SeedConfig::from_yaml("orders: 1000\n");
        assert!(matches!(result, Err(ConfigError::YamlError(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "user_count: 50").unwrap();
        writeln!(file, "order_count: 3000").unwrap();
        file.flush().unwrap();

        let config = SeedConfig::from_file(file.path()).unwrap();
        assert_eq!(config.user_count, 50);
        assert_eq!(config.month_count(), 3);
    }

    #[test]
    fn test_missing_file() {
        let result = SeedConfig::from_file("/nonexistent/seed.yaml");
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_parse_reference_date() {
        let dt = parse_reference_date("2024-01-15").unwrap();
        assert_eq!(dt.to_string(), "2024-01-15 00:00:00");

        assert!(matches!(
            parse_reference_date("15.01.2024"),
            Err(ConfigError::InvalidReferenceDate(_))
        ));
    }
}
