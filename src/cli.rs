use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Sirocco drought analysis toolkit.
#[derive(Parser)]
#[command(
    name = "sirocco",
    version,
    about = "SPI-3 drought composites and training samples"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the full analysis pipeline.
    Analyze(AnalyzeArgs),
    /// Validate the configuration and inspect the archive.
    Check(CheckArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "sirocco.toml")]
    pub config: PathBuf,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override sample CSV path from config.
    #[arg(long)]
    pub samples_out: Option<PathBuf>,

    /// Override composite GeoTIFF path from config.
    #[arg(long)]
    pub composite_out: Option<PathBuf>,

    /// Override report JSON path from config.
    #[arg(long)]
    pub report_out: Option<PathBuf>,
}

/// Arguments for the `check` subcommand.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "sirocco.toml")]
    pub config: PathBuf,
}
