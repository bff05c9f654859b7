//! Stratified random sampling of a composite raster.

use rand::Rng;
use sirocco_grid::{RasterImage, StudyArea};

use crate::class::{DroughtClass, validate_classes};
use crate::error::SampleError;

/// Default number of points requested per class.
pub const DEFAULT_SAMPLES_PER_CLASS: usize = 200;

/// Tuning knobs for [`stratified_sample`].
#[derive(Debug, Clone, PartialEq)]
pub struct SampleConfig {
    samples_per_class: usize,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            samples_per_class: DEFAULT_SAMPLES_PER_CLASS,
        }
    }
}

impl SampleConfig {
    /// Creates a configuration with the default per-class count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of points requested per class.
    pub fn with_samples_per_class(mut self, samples_per_class: usize) -> Self {
        self.samples_per_class = samples_per_class;
        self
    }

    /// Number of points requested per class.
    pub fn samples_per_class(&self) -> usize {
        self.samples_per_class
    }

    /// Checks that the configuration is usable.
    pub fn validate(&self) -> Result<(), SampleError> {
        if self.samples_per_class == 0 {
            return Err(SampleError::InvalidConfig {
                reason: "samples_per_class must be >= 1".to_string(),
            });
        }
        Ok(())
    }
}

/// One sampled pixel, located at its pixel center.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Sample {
    /// Longitude of the pixel center.
    pub longitude: f64,
    /// Latitude of the pixel center.
    pub latitude: f64,
    /// Composite SPI value at the pixel.
    #[serde(rename = "spi3")]
    pub spi: f64,
    /// Class the value fell into.
    pub class_id: u32,
}

/// Record of a class that could not fill its requested count.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ClassShortfall {
    /// Class that came up short.
    pub class_id: u32,
    /// Points requested for the class.
    pub requested: usize,
    /// Points actually drawn.
    pub drawn: usize,
}

/// Samples drawn across all classes plus any per-class shortfalls.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    samples: Vec<Sample>,
    shortfalls: Vec<ClassShortfall>,
}

impl SampleSet {
    /// All drawn samples, grouped by class in class order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Classes that could not fill their requested count.
    pub fn shortfalls(&self) -> &[ClassShortfall] {
        &self.shortfalls
    }

    /// Number of samples drawn for one class.
    pub fn count_for(&self, class_id: u32) -> usize {
        self.samples
            .iter()
            .filter(|sample| sample.class_id == class_id)
            .count()
    }

    /// Total number of samples drawn.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples were drawn at all.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Draws up to `samples_per_class` pixels per class from a composite,
/// without replacement, restricted to the study area.
///
/// A pixel is eligible for a class when its value is finite, falls in the
/// class range, and its center lies inside the area. Classes with fewer
/// eligible pixels than requested simply yield fewer points; the deficit
/// is logged and recorded as a [`ClassShortfall`], never an error.
///
/// Determinism follows the caller's `rng`: a seeded generator reproduces
/// the exact same draw.
///
/// # Errors
///
/// Returns a [`SampleError`] when the configuration or class list fails
/// validation. Drawing itself cannot fail.
#[tracing::instrument(skip_all, fields(n_classes = classes.len()))]
pub fn stratified_sample(
    composite: &RasterImage,
    area: &StudyArea,
    classes: &[DroughtClass],
    config: &SampleConfig,
    rng: &mut impl Rng,
) -> Result<SampleSet, SampleError> {
    config.validate()?;
    validate_classes(classes)?;

    let requested = config.samples_per_class();
    let transform = composite.transform();
    let data = composite.data();

    let mut samples = Vec::new();
    let mut shortfalls = Vec::new();
    for class in classes {
        let eligible: Vec<(usize, usize, f64)> = data
            .indexed_iter()
            .filter(|&((row, col), &value)| {
                value.is_finite() && class.contains(value) && {
                    let (x, y) = transform.pixel_center(row, col);
                    area.contains_point(x, y)
                }
            })
            .map(|((row, col), &value)| (row, col, value))
            .collect();

        let amount = requested.min(eligible.len());
        for index in rand::seq::index::sample(rng, eligible.len(), amount) {
            let (row, col, value) = eligible[index];
            let (longitude, latitude) = transform.pixel_center(row, col);
            samples.push(Sample {
                longitude,
                latitude,
                spi: value,
                class_id: class.id(),
            });
        }

        if amount < requested {
            tracing::warn!(
                class_id = class.id(),
                requested,
                drawn = amount,
                "class has fewer eligible pixels than requested"
            );
            shortfalls.push(ClassShortfall {
                class_id: class.id(),
                requested,
                drawn: amount,
            });
        }
    }

    tracing::debug!(n_samples = samples.len(), n_shortfalls = shortfalls.len(), "sampling done");
    Ok(SampleSet { samples, shortfalls })
}
