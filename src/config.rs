use std::path::PathBuf;

use serde::Deserialize;

/// Top-level Sirocco configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiroccoConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Analysis date range.
    #[serde(default)]
    pub range: RangeToml,

    /// Rolling-window aggregation settings.
    #[serde(default)]
    pub aggregation: AggregationToml,

    /// Standardization settings.
    #[serde(default)]
    pub spi: SpiToml,

    /// Drought periods feeding the combined composite.
    #[serde(default = "default_periods")]
    pub periods: Vec<PeriodToml>,

    /// Severity classes for stratified sampling.
    #[serde(default = "default_classes")]
    pub classes: Vec<ClassToml>,

    /// Sampling settings.
    #[serde(default)]
    pub sampling: SamplingToml,

    /// Study-area polygon.
    #[serde(default)]
    pub region: RegionToml,

    /// Archive settings.
    #[serde(default)]
    pub io: IoToml,

    /// Export settings.
    #[serde(default)]
    pub export: ExportToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeToml {
    #[serde(default = "default_range_start")]
    pub start: String,
    #[serde(default = "default_range_end")]
    pub end: String,
}

impl Default for RangeToml {
    fn default() -> Self {
        Self {
            start: default_range_start(),
            end: default_range_end(),
        }
    }
}

fn default_range_start() -> String {
    "2005-01-01".to_string()
}
fn default_range_end() -> String {
    "2024-12-31".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AggregationToml {
    #[serde(default = "default_window_months")]
    pub window_months: u32,
}

impl Default for AggregationToml {
    fn default() -> Self {
        Self {
            window_months: default_window_months(),
        }
    }
}

fn default_window_months() -> u32 {
    3
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpiToml {
    #[serde(default = "default_std_floor")]
    pub std_floor: f64,
}

impl Default for SpiToml {
    fn default() -> Self {
        Self {
            std_floor: default_std_floor(),
        }
    }
}

fn default_std_floor() -> f64 {
    0.001
}

/// One historical drought window, `[start, end)` after parsing.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PeriodToml {
    pub name: String,
    pub start: String,
    pub end: String,
}

fn default_periods() -> Vec<PeriodToml> {
    let raw = [
        ("2005 Drought", "2004-06-01", "2006-01-31"),
        ("2010-2011 Drought", "2010-06-01", "2011-12-31"),
        ("2016-2017 Drought", "2016-06-01", "2017-12-31"),
        ("2020-2022 Drought", "2020-06-01", "2022-12-31"),
    ];
    raw.iter()
        .map(|(name, start, end)| PeriodToml {
            name: name.to_string(),
            start: start.to_string(),
            end: end.to_string(),
        })
        .collect()
}

/// One severity class, `[min, max)` over composite SPI values.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassToml {
    pub id: u32,
    pub label: String,
    pub min: f64,
    pub max: f64,
}

fn default_classes() -> Vec<ClassToml> {
    let raw = [
        (0, "Severe to Extreme Drought", -0.4, -0.3),
        (1, "Moderate Drought", -0.3, -0.2),
        (2, "Mild Drought", -0.2, 0.0),
        (3, "Near Normal Conditions", 0.0, 0.06),
    ];
    raw.iter()
        .map(|&(id, label, min, max)| ClassToml {
            id,
            label: label.to_string(),
            min,
            max,
        })
        .collect()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamplingToml {
    #[serde(default = "default_samples_per_class")]
    pub samples_per_class: usize,
}

impl Default for SamplingToml {
    fn default() -> Self {
        Self {
            samples_per_class: default_samples_per_class(),
        }
    }
}

fn default_samples_per_class() -> usize {
    200
}

/// Study-area outer ring as `[x, y]` pairs; closure is implicit.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RegionToml {
    #[serde(default)]
    pub ring: Vec<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    /// Directory holding the daily GeoTIFF archive.
    pub directory: Option<PathBuf>,
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default = "default_band")]
    pub band: String,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            directory: None,
            prefix: default_prefix(),
            band: default_band(),
        }
    }
}

fn default_prefix() -> String {
    "chirps-v2.0".to_string()
}
fn default_band() -> String {
    "precipitation".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportToml {
    #[serde(default = "default_samples_path")]
    pub samples_path: PathBuf,
    #[serde(default = "default_composite_path")]
    pub composite_path: PathBuf,
    #[serde(default = "default_report_path")]
    pub report_path: PathBuf,
    #[serde(default = "default_max_pixels")]
    pub max_pixels: u64,
    /// Probe spacing for region summaries, in CRS units.
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default = "default_true")]
    pub best_effort: bool,
}

impl Default for ExportToml {
    fn default() -> Self {
        Self {
            samples_path: default_samples_path(),
            composite_path: default_composite_path(),
            report_path: default_report_path(),
            max_pixels: default_max_pixels(),
            scale: default_scale(),
            best_effort: true,
        }
    }
}

fn default_samples_path() -> PathBuf {
    PathBuf::from("samples.csv")
}
fn default_composite_path() -> PathBuf {
    PathBuf::from("composite.tif")
}
fn default_report_path() -> PathBuf {
    PathBuf::from("report.json")
}
fn default_max_pixels() -> u64 {
    10_000_000_000_000
}
fn default_scale() -> f64 {
    0.05
}
fn default_true() -> bool {
    true
}
