//! Data generator for the shop-seed fixture dataset.
//!
//! The generator turns a validated [`seed_core::SeedConfig`] and a reference
//! instant into a [`Dataset`] of users, orders, order items and products.
//!
//! # Architecture
//!
//! ```text
//! SeedConfig + reference instant
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │    DataGenerator     │
//! │                      │
//! │  - GenerationPlan    │
//! │  - ValueProvider     │
//! └──────────┬───────────┘
//!            │  users ─ orders/items (month buckets) ─ products
//!            ▼
//!         Dataset
//! ```
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use seed_core::SeedConfig;
//! use seed_generator::{DataGenerator, FakerProvider, GenerationPlan};
//!
//! let reference = NaiveDate::from_ymd_opt(2024, 5, 20)
//!     .unwrap()
//!     .and_hms_opt(12, 0, 0)
//!     .unwrap();
//! let config = SeedConfig { order_count: 2000, ..SeedConfig::default() };
//! let plan = GenerationPlan::from_config(&config, reference).unwrap();
//!
//! let provider = FakerProvider::new(StdRng::seed_from_u64(42));
//! let dataset = DataGenerator::new(plan, provider).generate().unwrap();
//! assert_eq!(dataset.orders.len(), 2000);
//! ```

pub mod calendar;
pub mod generator;
pub mod orders;
pub mod products;
pub mod provider;
pub mod users;

// Re-exports for convenience
pub use calendar::{plan_buckets, shift_months, MonthBucket, YearMonth};
pub use generator::{DataGenerator, Dataset, GenerationPlan, GeneratorError};
pub use orders::{derive_status, StatusRule, CURRENT_MONTH_STATUS_RULES};
pub use provider::{FakerProvider, ValueProvider};
