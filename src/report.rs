//! JSON output structures for the analysis report.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;

use sirocco_sample::ClassShortfall;
use sirocco_zonal::RegionSummary;

/// Top-level `analyze` run report.
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// Configuration summary.
    pub config: ConfigSummary,
    /// Per-period image counts and study-area statistics.
    pub periods: Vec<PeriodReport>,
    /// Combined-composite statistics over the study area.
    pub composite: RegionSummary,
    /// All-time maximum statistics over the study area.
    pub alltime_max: RegionSummary,
    /// All-time minimum statistics over the study area.
    pub alltime_min: RegionSummary,
    /// Per-class sample tallies.
    pub classes: Vec<ClassReport>,
    /// Classes that drew fewer samples than requested.
    pub shortfalls: Vec<ClassShortfall>,
    /// Total points drawn across all classes.
    pub n_samples: usize,
}

/// Summary of the configuration used.
#[derive(Debug, Serialize)]
pub struct ConfigSummary {
    pub range_start: NaiveDate,
    pub range_end: NaiveDate,
    pub n_months: usize,
    pub window_months: u32,
    pub std_floor: f64,
    pub seed: Option<u64>,
    pub samples_per_class: usize,
    pub scale: f64,
    pub n_daily_images: usize,
}

/// Image count and statistics for one drought period.
#[derive(Debug, Serialize)]
pub struct PeriodReport {
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub n_images: usize,
    /// `None` when no SPI month fell inside the period.
    pub summary: Option<RegionSummary>,
}

/// Sample tally for one severity class.
#[derive(Debug, Serialize)]
pub struct ClassReport {
    pub id: u32,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub requested: usize,
    pub drawn: usize,
}

/// Serializes the report as pretty JSON and writes it to `path`.
pub fn write_report(report: &RunReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write report: {}", path.display()))?;
    Ok(())
}
