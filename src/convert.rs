//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};
use chrono::NaiveDate;

use crate::config::*;

// Import crate types
use sirocco_calendar::MonthRange;
use sirocco_composite::DroughtPeriod;
use sirocco_grid::StudyArea;
use sirocco_sample::{DroughtClass, SampleConfig, validate_classes};
use sirocco_spi::SpiConfig;
use sirocco_zonal::ZonalConfig;

/// Parses a `YYYY-MM-DD` date string.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(_) => bail!("invalid date {s:?}, expected YYYY-MM-DD"),
    }
}

/// Builds a [`MonthRange`] from the TOML range configuration.
pub fn build_month_range(range: &RangeToml) -> Result<MonthRange> {
    let start = parse_date(&range.start)?;
    let end = parse_date(&range.end)?;
    Ok(MonthRange::new(start, end)?)
}

/// Builds a [`SpiConfig`] from the TOML aggregation and SPI configurations.
pub fn build_spi_config(aggregation: &AggregationToml, spi: &SpiToml) -> Result<SpiConfig> {
    let cfg = SpiConfig::new()
        .with_window_months(aggregation.window_months)
        .with_std_floor(spi.std_floor);
    cfg.validate()?;
    Ok(cfg)
}

/// Builds the [`DroughtPeriod`] list from the TOML period tables.
pub fn build_periods(periods: &[PeriodToml]) -> Result<Vec<DroughtPeriod>> {
    if periods.is_empty() {
        bail!("at least one [[periods]] entry is required");
    }
    periods
        .iter()
        .map(|p| {
            let start = parse_date(&p.start)?;
            let end = parse_date(&p.end)?;
            Ok(DroughtPeriod::new(&p.name, start, end)?)
        })
        .collect()
}

/// Builds the validated [`DroughtClass`] list from the TOML class tables.
pub fn build_classes(classes: &[ClassToml]) -> Result<Vec<DroughtClass>> {
    let classes = classes
        .iter()
        .map(|c| Ok(DroughtClass::new(c.id, &c.label, c.min, c.max)?))
        .collect::<Result<Vec<_>>>()?;
    validate_classes(&classes)?;
    Ok(classes)
}

/// Builds a [`SampleConfig`] from the TOML sampling configuration.
pub fn build_sample_config(sampling: &SamplingToml) -> Result<SampleConfig> {
    let cfg = SampleConfig::new().with_samples_per_class(sampling.samples_per_class);
    cfg.validate()?;
    Ok(cfg)
}

/// Builds the [`StudyArea`] from the TOML region configuration.
pub fn build_study_area(region: &RegionToml) -> Result<StudyArea> {
    if region.ring.len() < 3 {
        bail!(
            "region.ring needs at least 3 vertices, got {}",
            region.ring.len()
        );
    }
    let ring: Vec<(f64, f64)> = region.ring.iter().map(|&[x, y]| (x, y)).collect();
    Ok(StudyArea::from_ring(&ring)?)
}

/// Builds a [`ZonalConfig`] from the TOML export configuration.
pub fn build_zonal_config(export: &ExportToml) -> Result<ZonalConfig> {
    let cfg = ZonalConfig::new(export.scale).with_best_effort(export.best_effort);
    cfg.validate()?;
    Ok(cfg)
}
