//! Check command: validate the configuration and inspect archive coverage.

use anyhow::{Context, Result};
use tracing::{info_span, warn};

use sirocco_io::DirectoryStore;

use crate::cli::CheckArgs;
use crate::config::SiroccoConfig;
use crate::convert;

/// Validate every pipeline config and report what the archive covers.
///
/// Runs the same conversions as `analyze` but stops before any computation,
/// so a broken config fails here with the same message.
pub fn run(args: &CheckArgs) -> Result<()> {
    let _cmd = info_span!("check").entered();

    // 1. Load project TOML
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: SiroccoConfig =
        toml::from_str(&toml_str).context("failed to parse TOML config")?;

    // 2. Build every pipeline config, surfacing the first problem
    let range = convert::build_month_range(&config.range)?;
    let spi_cfg = convert::build_spi_config(&config.aggregation, &config.spi)?;
    let periods = convert::build_periods(&config.periods)?;
    let classes = convert::build_classes(&config.classes)?;
    convert::build_sample_config(&config.sampling)?;
    convert::build_study_area(&config.region)?;
    convert::build_zonal_config(&config.export)?;

    println!("config OK: {}", args.config.display());
    println!(
        "  range: {} to {} ({} months, {}-month window)",
        range.start(),
        range.end(),
        range.n_months(),
        spi_cfg.window_months()
    );
    for period in &periods {
        println!(
            "  period {:?}: {} to {}",
            period.name(),
            period.interval().start(),
            period.interval().end()
        );
    }
    for class in &classes {
        println!(
            "  class {} ({}): [{}, {})",
            class.id(),
            class.label(),
            class.min(),
            class.max()
        );
    }

    // 3. Probe the archive when one is configured
    let Some(ref directory) = config.io.directory else {
        warn!("no [io].directory configured, skipping archive check");
        return Ok(());
    };
    let store = DirectoryStore::open(directory, &config.io.prefix, &config.io.band)
        .with_context(|| format!("failed to index archive: {}", directory.display()))?;
    match (store.first_date(), store.last_date()) {
        (Some(first), Some(last)) => {
            println!("  archive: {} files, {} to {}", store.len(), first, last);
            if first > range.start() {
                warn!(%first, start = %range.start(), "archive begins after the analysis range");
            }
            if last < range.end() {
                warn!(%last, end = %range.end(), "archive ends before the analysis range");
            }
        }
        _ => warn!(
            directory = %directory.display(),
            prefix = %config.io.prefix,
            "archive matched no files"
        ),
    }

    Ok(())
}
