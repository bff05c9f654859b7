//! Analyze command: daily archive -> SPI-3 -> composites -> samples.

use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span, warn};

use sirocco_composite::{alltime_extremes, combined_composite, filter_period, period_mean};
use sirocco_io::{DirectoryStore, RasterStore, write_geotiff, write_samples_csv};
use sirocco_sample::stratified_sample;
use sirocco_spi::{aggregate_monthly, estimate_climatology, standardize};
use sirocco_zonal::{Reducer, reduce_region};

use crate::cli::AnalyzeArgs;
use crate::config::SiroccoConfig;
use crate::convert;
use crate::report::{ClassReport, ConfigSummary, PeriodReport, RunReport, write_report};

/// Run the full analysis pipeline.
pub fn run(args: &AnalyzeArgs) -> Result<()> {
    let _cmd = info_span!("analyze").entered();

    // Step 1: Load project TOML and apply CLI overrides
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let mut config: SiroccoConfig =
        toml::from_str(&toml_str).context("failed to parse TOML config")?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(ref path) = args.samples_out {
        config.export.samples_path = path.clone();
    }
    if let Some(ref path) = args.composite_out {
        config.export.composite_path = path.clone();
    }
    if let Some(ref path) = args.report_out {
        config.export.report_path = path.clone();
    }

    // Step 2: Build configs from TOML
    let range = convert::build_month_range(&config.range)?;
    let spi_cfg = convert::build_spi_config(&config.aggregation, &config.spi)?;
    let periods = convert::build_periods(&config.periods)?;
    let classes = convert::build_classes(&config.classes)?;
    let sample_cfg = convert::build_sample_config(&config.sampling)?;
    let area = convert::build_study_area(&config.region)?;
    let zonal_cfg = convert::build_zonal_config(&config.export)?;

    // Step 3: Create seeded RNG
    let mut rng = match config.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    // Step 4: Index the archive and load the daily range
    let directory = config
        .io
        .directory
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("no archive directory: set [io].directory in config"))?;
    let store = DirectoryStore::open(directory, &config.io.prefix, &config.io.band)
        .with_context(|| format!("failed to index archive: {}", directory.display()))?;
    let daily = store
        .fetch(&config.io.band, range.start(), range.end())
        .with_context(|| format!("failed to load archive: {}", directory.display()))?;
    if daily.is_empty() {
        bail!(
            "archive has no {} images in {} to {}",
            config.io.band,
            range.start(),
            range.end()
        );
    }
    info!(n_images = daily.len(), "daily precipitation loaded");

    // Step 5: Rolling sums, climatology, standardization
    let aggregated = aggregate_monthly(&daily, &range, &spi_cfg)?;
    info!(n_months = aggregated.len(), "monthly windows aggregated");
    let climatology = estimate_climatology(&aggregated)?;
    let spi = standardize(&aggregated, &climatology, &spi_cfg)?;
    info!(n_months = spi.len(), "SPI computed");

    // Step 6: Per-period composites and statistics
    let mut period_reports = Vec::with_capacity(periods.len());
    for period in &periods {
        let matched = filter_period(&spi, period);
        let summary = match period_mean(&spi, period)? {
            Some(mean) => Some(reduce_region(&mean, &area, Reducer::MinMaxMean, &zonal_cfg)?),
            None => {
                warn!(period = period.name(), "no SPI months in period");
                None
            }
        };
        info!(
            period = period.name(),
            n_images = matched.len(),
            "period composited"
        );
        period_reports.push(PeriodReport {
            name: period.name().to_string(),
            start: period.interval().start(),
            end: period.interval().end(),
            n_images: matched.len(),
            summary,
        });
    }

    // Step 7: Combined composite and all-time extremes
    let composite = combined_composite(&spi, &periods, &area)?;
    let composite_summary = reduce_region(&composite, &area, Reducer::MinMaxMean, &zonal_cfg)?;
    info!(
        mean = composite_summary.mean(),
        n_pixels = composite_summary.n_pixels(),
        "combined composite reduced"
    );
    let (spi_max, spi_min) = alltime_extremes(&spi)?;
    let max_summary = reduce_region(&spi_max, &area, Reducer::MinMaxMean, &zonal_cfg)?;
    let min_summary = reduce_region(&spi_min, &area, Reducer::MinMaxMean, &zonal_cfg)?;

    // Step 8: Stratified sampling
    let samples = stratified_sample(&composite, &area, &classes, &sample_cfg, &mut rng)?;
    info!(
        n_samples = samples.len(),
        n_short = samples.shortfalls().len(),
        "samples drawn"
    );
    let class_reports: Vec<ClassReport> = classes
        .iter()
        .map(|class| ClassReport {
            id: class.id(),
            label: class.label().to_string(),
            min: class.min(),
            max: class.max(),
            requested: sample_cfg.samples_per_class(),
            drawn: samples.count_for(class.id()),
        })
        .collect();

    // Step 9: Write samples CSV, then the report, then the composite raster
    write_samples_csv(&config.export.samples_path, samples.samples())
        .with_context(|| format!("failed to write samples: {}", config.export.samples_path.display()))?;
    info!(path = %config.export.samples_path.display(), "samples written");

    let report = RunReport {
        config: ConfigSummary {
            range_start: range.start(),
            range_end: range.end(),
            n_months: spi.len(),
            window_months: spi_cfg.window_months(),
            std_floor: spi_cfg.std_floor(),
            seed: config.seed,
            samples_per_class: sample_cfg.samples_per_class(),
            scale: zonal_cfg.scale(),
            n_daily_images: daily.len(),
        },
        periods: period_reports,
        composite: composite_summary,
        alltime_max: max_summary,
        alltime_min: min_summary,
        classes: class_reports,
        shortfalls: samples.shortfalls().to_vec(),
        n_samples: samples.len(),
    };
    write_report(&report, &config.export.report_path)?;
    info!(path = %config.export.report_path.display(), "report written");

    write_geotiff(
        &composite,
        &config.export.composite_path,
        config.export.max_pixels,
    )
    .with_context(|| {
        format!(
            "failed to write composite: {}",
            config.export.composite_path.display()
        )
    })?;
    info!(path = %config.export.composite_path.display(), "composite written");

    Ok(())
}
