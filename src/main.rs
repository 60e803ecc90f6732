//! Command-line interface for shop-seed
//!
//! # Usage Examples
//!
//! ```bash
//! # Write users.csv, orders.csv, order_items.csv and products.csv into ./data
//! shop-seed
//!
//! # Resize the dataset through a config file
//! shop-seed --config seed.yaml --output-dir ./fixtures
//!
//! # Pin "now" so the month window is predictable
//! shop-seed --reference-date 2024-01-15 --date-format "%Y-%m-%d"
//! ```

use anyhow::Context;
use clap::Parser;
use seed_core::parse_reference_date;
use seed_generator::FakerProvider;
use seed_populate_csv::CSVPopulateArgs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shop-seed")]
#[command(about = "Generate users, orders, order items and products as CSV fixture files")]
#[command(long_about = None)]
struct Cli {
    /// YAML config file with user_count, order_count, product_count, output_dir, date_format
    #[arg(long, short = 'c', value_name = "PATH", env = "SHOP_SEED_CONFIG")]
    config: Option<PathBuf>,

    /// Date (YYYY-MM-DD) treated as "now"; the last month bucket is its month
    #[arg(long, value_name = "DATE")]
    reference_date: Option<String>,

    #[command(flatten)]
    output: CSVPopulateArgs,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = shop_seed::resolve_config(cli.config.as_deref(), &cli.output)?;

    let reference = match &cli.reference_date {
        Some(date) => parse_reference_date(date).context("Invalid --reference-date")?,
        None => chrono::Local::now().naive_local(),
    };

    tracing::info!(
        "Generating fixture dataset into {} (reference {})",
        config.output_dir.display(),
        reference
    );

    let summary = shop_seed::run(
        &config,
        reference,
        FakerProvider::from_entropy(),
        cli.output.dry_run,
    )?;

    for table in &summary.tables {
        tracing::info!(
            "{}: {} rows, {} bytes in {:?}",
            table.table,
            table.rows_written,
            table.file_size_bytes,
            table.total_duration
        );
    }

    Ok(())
}
