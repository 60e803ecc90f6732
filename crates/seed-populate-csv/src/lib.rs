//! CSV writer for the shop-seed fixture dataset.
//!
//! Each table is written to `<output_dir>/<table>.csv` with a header row taken
//! from its [`seed_core::TableSchema`] and one row per record.
//!
//! # Example
//!
//! ```ignore
//! use seed_populate_csv::CSVPopulator;
//!
//! let populator = CSVPopulator::new("./data").with_date_format("%Y-%m-%d");
//! let metrics = populator.populate_dataset(&dataset)?;
//! ```

pub mod args;
mod error;
mod populator;
mod value;

pub use args::CSVPopulateArgs;
pub use error::CSVPopulatorError;
pub use populator::{CSVPopulator, PopulateMetrics, DEFAULT_BUFFER_SIZE};
pub use value::CsvValue;
