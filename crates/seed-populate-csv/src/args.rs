//! CLI argument definitions for the CSV output.

use clap::Args;
use std::path::PathBuf;

/// CSV output arguments. Unset values fall back to the config file.
#[derive(Args, Clone, Debug, Default)]
pub struct CSVPopulateArgs {
    /// Output directory for CSV files (one file per table)
    #[arg(long, short = 'o', env = "SHOP_SEED_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// chrono strftime format for created_at / solved_at (e.g. "%Y-%m-%d")
    #[arg(long)]
    pub date_format: Option<String>,

    /// Dry-run mode: validate configuration and plan month buckets without writing files
    #[arg(long)]
    pub dry_run: bool,
}
