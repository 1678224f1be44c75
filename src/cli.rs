use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

impl Cli {
    /// Convenience constructor to avoid redundant `Parser` imports in main.
    pub fn new() -> Self {
        Cli::parse()
    }
}

// Structs

#[derive(Parser, Debug)]
#[command(name = "billcheck", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    //
    // Global args start here..
    //

    //
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    pub format: OutputFormat,

    /// Compact JSON on a single line.
    #[arg(long, default_value_t = false, global = true)]
    pub unformatted: bool,

    /// Log filter, e.g. 'info' or 'billcheck=debug'. Logs go to stderr.
    #[arg(long, env = "BILLCHECK_LOG", default_value = "warn", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate what a metrics snapshot costs.
    ///
    /// Missing or null metrics are priced as zero usage. Run `validate` first
    /// and don't trust the figure when it fails.
    Price(PriceArgs),

    /// Check that a metrics snapshot is complete enough to price.
    ///
    /// Exits with 0 when the snapshot passes and 2 when it does not.
    Validate(ValidateArgs),
}

#[derive(clap::Args, Debug)]
pub struct PriceArgs {
    /// Metrics snapshot, a JSON document.
    pub file: PathBuf,

    /// Number of days in the billing period.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub days: u32,
}

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Metrics snapshot, a JSON document.
    pub file: PathBuf,
}

#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}
