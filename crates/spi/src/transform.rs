//! Standardization of aggregated rasters against a climatology.

use ndarray::Array2;
use rayon::prelude::*;
use sirocco_grid::{RasterImage, RasterSequence};

use crate::climatology::Climatology;
use crate::config::SpiConfig;
use crate::error::SpiError;

/// Band name carried by standardized rasters.
pub const SPI_BAND: &str = "spi3";

/// Standardizes every aggregated raster as `(value - mean) / std`.
///
/// Where the climatological std is exactly zero the configured floor is
/// substituted as the divisor, so a constant pixel standardizes to zero
/// instead of NaN. The floor is applied pixel-wise against the fully
/// reduced climatology, never as a running estimate. Outputs mirror the
/// input timestamps one-to-one and carry the [`SPI_BAND`] band.
///
/// # Errors
///
/// Returns [`SpiError::ShapeMismatch`] when the climatology was estimated
/// on a different grid.
#[tracing::instrument(skip_all, fields(n_images = aggregated.len()))]
pub fn standardize(
    aggregated: &RasterSequence,
    climatology: &Climatology,
    config: &SpiConfig,
) -> Result<RasterSequence, SpiError> {
    config.validate()?;

    let Some(first) = aggregated.first() else {
        return Ok(RasterSequence::empty());
    };
    let (rows, cols) = first.shape();
    let (climatology_rows, climatology_cols) = climatology.mean().shape();
    if (rows, cols) != (climatology_rows, climatology_cols) {
        return Err(SpiError::ShapeMismatch {
            climatology_rows,
            climatology_cols,
            rows,
            cols,
        });
    }

    let floor = config.std_floor();
    let mean = climatology.mean().data();
    let std = climatology.std().data();

    let images = aggregated
        .images()
        .par_iter()
        .map(|image| {
            let mut out = Array2::from_elem((rows, cols), f64::NAN);
            for ((row, col), &value) in image.data().indexed_iter() {
                let divisor = match std[[row, col]] {
                    s if s == 0.0 => floor,
                    s => s,
                };
                out[[row, col]] = (value - mean[[row, col]]) / divisor;
            }
            let derived = image.derived(SPI_BAND, out)?;
            Ok(match image.timestamp() {
                Some(ts) => derived.with_timestamp(ts),
                None => derived,
            })
        })
        .collect::<Result<Vec<_>, SpiError>>()?;

    Ok(RasterSequence::new(images)?)
}
