//! shop-seed library
//!
//! Synthesizes a small relational fixture dataset (users, orders, order items,
//! products) and writes one CSV file per table.
//!
//! # Crates
//!
//! - `seed_core` - entities, table schemas, product catalog, configuration
//! - `seed_generator` - month buckets, status derivation and record generation
//! - `seed_populate_csv` - CSV output
//!
//! # CLI Usage
//!
//! ```bash
//! # Defaults: 1000 users, 6000 orders over 6 months, 10 products into ./data
//! shop-seed
//!
//! # Sizes from a config file, window ending in a fixed month
//! shop-seed --config seed.yaml --reference-date 2024-05-20 -o ./fixtures
//!
//! # Validate the config and log the month buckets only
//! RUST_LOG=debug shop-seed --dry-run
//! ```

use anyhow::Context;
use chrono::NaiveDateTime;
use seed_core::SeedConfig;
use seed_generator::{DataGenerator, GenerationPlan, MonthBucket, ValueProvider};
use seed_populate_csv::{CSVPopulateArgs, CSVPopulator, PopulateMetrics};
use std::path::Path;

/// Outcome of one run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Month buckets the orders were spread over
    pub buckets: Vec<MonthBucket>,
    /// One entry per written table; empty on a dry run
    pub tables: Vec<PopulateMetrics>,
}

/// Load the config file (or defaults) and apply CLI overrides, then validate.
pub fn resolve_config(
    config_path: Option<&Path>,
    args: &CSVPopulateArgs,
) -> anyhow::Result<SeedConfig> {
    let mut config = match config_path {
        Some(path) => SeedConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {path:?}"))?,
        None => SeedConfig::default(),
    };

    if let Some(output_dir) = &args.output_dir {
        config.output_dir = output_dir.clone();
    }
    if let Some(date_format) = &args.date_format {
        config.date_format = date_format.clone();
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Generate the dataset and write it, or only plan it when `dry_run` is set.
pub fn run<P: ValueProvider>(
    config: &SeedConfig,
    reference: NaiveDateTime,
    provider: P,
    dry_run: bool,
) -> anyhow::Result<RunSummary> {
    let plan = GenerationPlan::from_config(config, reference)?;
    let mut generator = DataGenerator::new(plan, provider);
    let buckets = generator.buckets()?;

    for bucket in &buckets {
        tracing::debug!(
            "Bucket {}: {} (current: {}) created_at in [{}, {})",
            bucket.index,
            bucket.month,
            bucket.is_current,
            bucket.window_start,
            bucket.window_end
        );
    }

    if dry_run {
        tracing::info!(
            "Dry run: configuration valid, {} month buckets ending {}; no files written",
            buckets.len(),
            reference.date()
        );
        return Ok(RunSummary {
            buckets,
            tables: Vec::new(),
        });
    }

    let dataset = generator.generate().context("Failed to generate dataset")?;

    let populator =
        CSVPopulator::new(&config.output_dir).with_date_format(config.date_format.clone());
    let tables = populator.populate_dataset(&dataset).with_context(|| {
        format!(
            "Failed to write CSV files to {}",
            config.output_dir.display()
        )
    })?;

    Ok(RunSummary { buckets, tables })
}
