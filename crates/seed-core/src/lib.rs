//! Core types for the shop-seed fixture generator.
//!
//! This crate provides the foundational types shared by the generator and
//! the writers:
//!
//! - [`User`], [`Order`], [`OrderItem`], [`Product`] - the generated entities
//! - [`CellValue`] and [`ToRow`] - scalar cells and the field-key lookup used by writers
//! - [`TableSchema`] - ordered `(field-key, column-title)` pairs per output table
//! - [`SeedConfig`] - dataset sizing and output settings loaded from YAML
//! - [`catalog`] - the compiled-in product catalog
//!
//! # Architecture
//!
//! ```text
//! seed-core (this crate)
//!    │
//!    ├─── seed-generator      (builds a Dataset from SeedConfig)
//!    │
//!    └─── seed-populate-csv   (writes each table with its TableSchema)
//! ```

pub mod catalog;
pub mod config;
pub mod model;
pub mod schema;
pub mod values;

// Re-exports for convenience
pub use catalog::{CatalogProduct, PRODUCT_CATALOG};
pub use config::{parse_reference_date, ConfigError, SeedConfig, ORDERS_PER_MONTH};
pub use model::{Gender, Order, OrderItem, OrderStatus, Product, User};
pub use schema::{Column, TableSchema, ALL_TABLES, ORDERS, ORDER_ITEMS, PRODUCTS, USERS};
pub use values::{CellValue, ToRow};
