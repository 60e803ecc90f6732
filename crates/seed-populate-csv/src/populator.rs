//! CSV populator writing one file per table.

use crate::error::CSVPopulatorError;
use crate::value::CsvValue;
use csv::Writer;
use seed_core::config::DEFAULT_DATE_FORMAT;
use seed_core::{TableSchema, ToRow, ORDERS, ORDER_ITEMS, PRODUCTS, USERS};
use seed_generator::Dataset;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from writing one table.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Table name.
    pub table: String,
    /// Number of rows written, excluding the header.
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes tables as CSV files into an output directory.
pub struct CSVPopulator {
    output_dir: PathBuf,
    date_format: String,
    include_header: bool,
}

impl CSVPopulator {
    /// Create a populator writing into `output_dir`.
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            include_header: true,
        }
    }

    /// Set the chrono format used for date cells.
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    /// Set whether to include a header row in the CSV output.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Destination file of a table.
    pub fn table_path(&self, table: &TableSchema) -> PathBuf {
        self.output_dir.join(format!("{}.csv", table.name))
    }

    /// Write `records` to the table's file, creating or overwriting it.
    pub fn populate<T: ToRow>(
        &self,
        table: &TableSchema,
        records: &[T],
    ) -> Result<PopulateMetrics, CSVPopulatorError> {
        let start_time = Instant::now();
        let output_path = self.table_path(table);
        info!(
            "Writing CSV file '{}' with {} rows for table '{}'",
            output_path.display(),
            records.len(),
            table.name
        );

        let file = File::create(&output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut writer = Writer::from_writer(buf_writer);

        if self.include_header {
            writer.write_record(table.titles())?;
        }

        let mut metrics = PopulateMetrics {
            table: table.name.to_string(),
            ..PopulateMetrics::default()
        };
        for record in records {
            let row = record_to_csv_row(record, table, &self.date_format)?;
            writer.write_record(&row)?;
            metrics.rows_written += 1;

            if metrics.rows_written % 1000 == 0 {
                debug!("Written {} rows to '{}'", metrics.rows_written, table.name);
            }
        }

        writer.flush()?;
        drop(writer);

        metrics.file_size_bytes = std::fs::metadata(&output_path)?.len();
        metrics.total_duration = start_time.elapsed();

        info!(
            "CSV write complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    /// Write all four tables of a dataset, creating the output directory if needed.
    ///
    /// Stops at the first failure; files written before it are left in place.
    pub fn populate_dataset(
        &self,
        dataset: &Dataset,
    ) -> Result<Vec<PopulateMetrics>, CSVPopulatorError> {
        std::fs::create_dir_all(&self.output_dir)?;

        Ok(vec![
            self.populate(&USERS, &dataset.users)?,
            self.populate(&ORDERS, &dataset.orders)?,
            self.populate(&ORDER_ITEMS, &dataset.order_items)?,
            self.populate(&PRODUCTS, &dataset.products)?,
        ])
    }
}

/// Convert a record into CSV cells in column order.
fn record_to_csv_row<T: ToRow>(
    record: &T,
    table: &TableSchema,
    date_format: &str,
) -> Result<Vec<String>, CSVPopulatorError> {
    table
        .columns
        .iter()
        .map(|column| {
            let value = record
                .field(column.key)
                .ok_or_else(|| CSVPopulatorError::UnknownField {
                    table: table.name.to_string(),
                    field: column.key.to_string(),
                })?;
            CsvValue::from_cell(value, date_format).map(CsvValue::into_inner)
        })
        .collect()
}
