//! # sirocco-zonal
//!
//! Reduces a raster over a study-area geometry into summary statistics.
//!
//! The reduction walks a regular grid of probe points spaced `scale`
//! CRS-units apart across the geometry's bounding rectangle, keeps the
//! points inside the geometry, and reduces the nearest-pixel values read
//! at those points. At the raster's native spacing this visits each
//! covered pixel exactly once; a finer scale reads pixels repeatedly and
//! a coarser one subsamples.
//!
//! ## Quick Start
//!
//! ```ignore
//! use sirocco_zonal::{Reducer, ZonalConfig, reduce_region};
//!
//! let config = ZonalConfig::new(0.05);
//! let summary = reduce_region(&composite, &area, Reducer::MinMaxMean, &config)?;
//! println!("mean SPI {:?}", summary.mean());
//! ```

mod error;

pub use error::ZonalError;

use sirocco_grid::{RasterImage, StudyArea};

/// Which statistics a reduction reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reducer {
    /// Arithmetic mean only.
    Mean,
    /// Minimum only.
    Min,
    /// Maximum only.
    Max,
    /// Minimum, maximum, and mean in a single pass over the same pixels.
    MinMaxMean,
}

/// Tuning knobs for [`reduce_region`].
#[derive(Debug, Clone, PartialEq)]
pub struct ZonalConfig {
    scale: f64,
    best_effort: bool,
}

impl ZonalConfig {
    /// Creates a configuration with the given probe spacing and best-effort
    /// mode on.
    pub fn new(scale: f64) -> Self {
        Self {
            scale,
            best_effort: true,
        }
    }

    /// Sets strict mode: with best-effort off, probe points that read no
    /// valid pixel fail the reduction instead of being skipped.
    pub fn with_best_effort(mut self, best_effort: bool) -> Self {
        self.best_effort = best_effort;
        self
    }

    /// Probe spacing in CRS units.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Whether partial coverage is tolerated.
    pub fn best_effort(&self) -> bool {
        self.best_effort
    }

    /// Checks that the configuration is usable.
    pub fn validate(&self) -> Result<(), ZonalError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ZonalError::InvalidScale { scale: self.scale });
        }
        Ok(())
    }
}

/// Statistics reduced over one geometry.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RegionSummary {
    band: String,
    mean: Option<f64>,
    min: Option<f64>,
    max: Option<f64>,
    n_pixels: usize,
}

impl RegionSummary {
    /// Band the statistics were reduced from.
    pub fn band(&self) -> &str {
        &self.band
    }

    /// Mean value, when the reducer reports one.
    pub fn mean(&self) -> Option<f64> {
        self.mean
    }

    /// Minimum value, when the reducer reports one.
    pub fn min(&self) -> Option<f64> {
        self.min
    }

    /// Maximum value, when the reducer reports one.
    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// Number of probe points that contributed a value.
    pub fn n_pixels(&self) -> usize {
        self.n_pixels
    }
}

/// Reduces a raster's primary band over a geometry.
///
/// Probe points outside the raster or on NaN pixels contribute nothing.
/// In best-effort mode they are skipped; in strict mode any such point
/// fails the reduction with [`ZonalError::PartialCoverage`].
///
/// The combined [`Reducer::MinMaxMean`] accumulates all three statistics
/// in the same pass over the same probe points, so its values match the
/// single-statistic reducers bit for bit.
///
/// # Errors
///
/// Returns [`ZonalError::EmptyRegion`] when no probe point inside the
/// geometry reads a finite value.
#[tracing::instrument(skip_all, fields(band = image.band_name(), scale = config.scale()))]
pub fn reduce_region(
    image: &RasterImage,
    area: &StudyArea,
    reducer: Reducer,
    config: &ZonalConfig,
) -> Result<RegionSummary, ZonalError> {
    config.validate()?;

    let Some(bbox) = area.bounding_box() else {
        return Err(ZonalError::EmptyRegion);
    };

    let scale = config.scale();
    let transform = image.transform();

    let mut n_probed = 0usize;
    let mut n_valid = 0usize;
    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    let mut y = bbox.min().y + scale / 2.0;
    while y < bbox.max().y {
        let mut x = bbox.min().x + scale / 2.0;
        while x < bbox.max().x {
            if area.contains_point(x, y) {
                n_probed += 1;
                let (row, col) = transform.geo_to_pixel(x, y);
                if let Some(value) = image.get(row, col) {
                    if value.is_finite() {
                        n_valid += 1;
                        sum += value;
                        if value < min {
                            min = value;
                        }
                        if value > max {
                            max = value;
                        }
                    }
                }
            }
            x += scale;
        }
        y += scale;
    }

    if n_valid == 0 {
        return Err(ZonalError::EmptyRegion);
    }
    if !config.best_effort() && n_valid < n_probed {
        return Err(ZonalError::PartialCoverage { n_probed, n_valid });
    }

    let mean = sum / n_valid as f64;
    let (mean, min, max) = match reducer {
        Reducer::Mean => (Some(mean), None, None),
        Reducer::Min => (None, Some(min), None),
        Reducer::Max => (None, None, Some(max)),
        Reducer::MinMaxMean => (Some(mean), Some(min), Some(max)),
    };

    Ok(RegionSummary {
        band: image.band_name().to_string(),
        mean,
        min,
        max,
        n_pixels: n_valid,
    })
}
