//! Per-pixel climatological statistics over an aggregated sequence.

use ndarray::Array2;
use rayon::prelude::*;
use sirocco_grid::{RasterImage, RasterSequence};

use crate::error::SpiError;

/// Per-pixel statistics reduced over a full aggregated sequence.
///
/// All four rasters live on the input grid and carry no timestamp.
#[derive(Debug, Clone)]
pub struct Climatology {
    mean: RasterImage,
    std: RasterImage,
    max: RasterImage,
    min: RasterImage,
}

impl Climatology {
    /// Per-pixel mean of the finite values.
    pub fn mean(&self) -> &RasterImage {
        &self.mean
    }

    /// Per-pixel sample standard deviation (N-1) of the finite values.
    pub fn std(&self) -> &RasterImage {
        &self.std
    }

    /// Per-pixel maximum of the finite values.
    pub fn max(&self) -> &RasterImage {
        &self.max
    }

    /// Per-pixel minimum of the finite values.
    pub fn min(&self) -> &RasterImage {
        &self.min
    }
}

struct PixelStats {
    mean: f64,
    std: f64,
    max: f64,
    min: f64,
}

/// Reduces an aggregated sequence to its per-pixel mean, sample standard
/// deviation, maximum, and minimum.
///
/// Statistics cover the finite values at each pixel. A pixel with a single
/// finite value gets zero spread; a pixel with none stays NaN in all four
/// outputs. Zero-variance pixels are legal here and handled downstream by
/// the standardization floor.
///
/// # Errors
///
/// Returns [`SpiError::EmptySequence`] when the sequence has no images.
#[tracing::instrument(skip_all, fields(n_images = aggregated.len()))]
pub fn estimate_climatology(aggregated: &RasterSequence) -> Result<Climatology, SpiError> {
    let Some(first) = aggregated.first() else {
        return Err(SpiError::EmptySequence);
    };
    let (rows, cols) = first.shape();

    let stats: Vec<PixelStats> = (0..rows)
        .into_par_iter()
        .flat_map_iter(|row| (0..cols).map(move |col| (row, col)))
        .map(|(row, col)| pixel_stats(aggregated, row, col))
        .collect();

    let mut mean = Array2::from_elem((rows, cols), f64::NAN);
    let mut std = Array2::from_elem((rows, cols), f64::NAN);
    let mut max = Array2::from_elem((rows, cols), f64::NAN);
    let mut min = Array2::from_elem((rows, cols), f64::NAN);
    for (index, pixel) in stats.iter().enumerate() {
        let (row, col) = (index / cols, index % cols);
        mean[[row, col]] = pixel.mean;
        std[[row, col]] = pixel.std;
        max[[row, col]] = pixel.max;
        min[[row, col]] = pixel.min;
    }

    Ok(Climatology {
        mean: first.derived("mean", mean)?,
        std: first.derived("std", std)?,
        max: first.derived("max", max)?,
        min: first.derived("min", min)?,
    })
}

/// Two-pass mean and std plus extremes over the finite values at one pixel.
fn pixel_stats(aggregated: &RasterSequence, row: usize, col: usize) -> PixelStats {
    let mut n = 0usize;
    let mut sum = 0.0;
    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;
    for image in aggregated {
        let value = image.data()[[row, col]];
        if value.is_finite() {
            n += 1;
            sum += value;
            if value > max {
                max = value;
            }
            if value < min {
                min = value;
            }
        }
    }

    if n == 0 {
        return PixelStats {
            mean: f64::NAN,
            std: f64::NAN,
            max: f64::NAN,
            min: f64::NAN,
        };
    }

    let mean = sum / n as f64;
    let std = if n < 2 {
        0.0
    } else {
        let squared: f64 = aggregated
            .iter()
            .map(|image| {
                let value = image.data()[[row, col]];
                if value.is_finite() {
                    let delta = value - mean;
                    delta * delta
                } else {
                    0.0
                }
            })
            .sum();
        (squared / (n - 1) as f64).sqrt()
    };

    PixelStats { mean, std, max, min }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use ndarray::Array2;
    use sirocco_grid::{Band, GeoTransform};

    fn image(day: u32, data: Array2<f64>) -> RasterImage {
        RasterImage::single_band(
            Band::new("precipitation", data).unwrap(),
            GeoTransform::new(0.0, 10.0, 1.0, -1.0).unwrap(),
            Default::default(),
        )
        .unwrap()
        .with_timestamp(NaiveDate::from_ymd_opt(2005, day, 1).unwrap())
    }

    fn sequence(values: &[f64]) -> RasterSequence {
        let images = values
            .iter()
            .enumerate()
            .map(|(index, &value)| image(index as u32 + 1, Array2::from_elem((2, 2), value)))
            .collect();
        RasterSequence::new(images).unwrap()
    }

    #[test]
    fn mean_uses_all_finite_values() {
        let climatology = estimate_climatology(&sequence(&[10.0, 20.0, 30.0])).unwrap();
        assert_eq!(climatology.mean().data()[[0, 0]], 20.0);
        assert_eq!(climatology.max().data()[[0, 0]], 30.0);
        assert_eq!(climatology.min().data()[[0, 0]], 10.0);
    }

    #[test]
    fn std_uses_sample_denominator() {
        let climatology = estimate_climatology(&sequence(&[10.0, 20.0, 30.0])).unwrap();
        // Sample variance of {10, 20, 30} is 100, not 200/3.
        assert_relative_eq!(climatology.std().data()[[1, 1]], 10.0, max_relative = 1e-12);
    }

    #[test]
    fn constant_sequence_has_zero_std() {
        let climatology = estimate_climatology(&sequence(&[7.5, 7.5, 7.5, 7.5])).unwrap();
        assert_eq!(climatology.std().data()[[0, 1]], 0.0);
        assert_eq!(climatology.mean().data()[[0, 1]], 7.5);
        assert_eq!(climatology.max().data()[[0, 1]], 7.5);
        assert_eq!(climatology.min().data()[[0, 1]], 7.5);
    }

    #[test]
    fn single_image_gets_zero_spread() {
        let climatology = estimate_climatology(&sequence(&[3.0])).unwrap();
        assert_eq!(climatology.mean().data()[[0, 0]], 3.0);
        assert_eq!(climatology.std().data()[[0, 0]], 0.0);
    }

    #[test]
    fn nan_values_are_excluded_per_pixel() {
        let mut first = Array2::from_elem((2, 2), 4.0);
        first[[0, 0]] = f64::NAN;
        let second = Array2::from_elem((2, 2), 8.0);
        let mut third = Array2::from_elem((2, 2), 12.0);
        third[[1, 1]] = f64::NAN;

        let images = vec![image(1, first), image(2, second), image(3, third)];
        let climatology = estimate_climatology(&RasterSequence::new(images).unwrap()).unwrap();

        // [0, 0] sees {8, 12}; [1, 1] sees {4, 8}; [0, 1] sees all three.
        assert_eq!(climatology.mean().data()[[0, 0]], 10.0);
        assert_eq!(climatology.mean().data()[[1, 1]], 6.0);
        assert_eq!(climatology.mean().data()[[0, 1]], 8.0);
        assert_eq!(climatology.max().data()[[1, 1]], 8.0);
        assert_eq!(climatology.min().data()[[0, 0]], 8.0);
    }

    #[test]
    fn all_nan_pixel_stays_nan_everywhere() {
        let mut data = Array2::from_elem((2, 2), 1.0);
        data[[1, 0]] = f64::NAN;
        let images = vec![image(1, data.clone()), image(2, data)];
        let climatology = estimate_climatology(&RasterSequence::new(images).unwrap()).unwrap();

        assert!(climatology.mean().data()[[1, 0]].is_nan());
        assert!(climatology.std().data()[[1, 0]].is_nan());
        assert!(climatology.max().data()[[1, 0]].is_nan());
        assert!(climatology.min().data()[[1, 0]].is_nan());
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let err = estimate_climatology(&RasterSequence::empty()).unwrap_err();
        assert!(matches!(err, SpiError::EmptySequence));
    }

    #[test]
    fn outputs_carry_no_timestamp() {
        let climatology = estimate_climatology(&sequence(&[1.0, 2.0])).unwrap();
        assert_eq!(climatology.mean().timestamp(), None);
        assert_eq!(climatology.std().band_name(), "std");
    }
}
