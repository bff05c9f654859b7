//! Rolling-window aggregation of daily rasters into monthly sums.

use chrono::NaiveDate;
use ndarray::Array2;
use rayon::prelude::*;
use sirocco_calendar::{MonthRange, window_bounds};
use sirocco_grid::{RasterImage, RasterSequence};

use crate::config::SpiConfig;
use crate::error::SpiError;

/// Sums daily precipitation into one raster per calendar month.
///
/// Each anchor month `M` receives the pixel-wise sum of every daily image
/// whose timestamp falls in `[M - (window - 1) months, M + 1 day)`, i.e.
/// the preceding `window - 1` months in full plus the anchor day itself.
/// The earliest `window - 1` anchors of a range reach back before the
/// archive start; their truncated sums are kept as-is rather than dropped.
///
/// NaN source pixels are treated as missing. A pixel sums its finite
/// contributions only and stays NaN where nothing finite was seen.
///
/// # Errors
///
/// Returns [`SpiError::DataGap`] when some window matches no source image
/// at all. Partial coverage is not an error.
#[tracing::instrument(skip_all, fields(n_months = range.n_months(), n_daily = daily.len()))]
pub fn aggregate_monthly(
    daily: &RasterSequence,
    range: &MonthRange,
    config: &SpiConfig,
) -> Result<RasterSequence, SpiError> {
    config.validate()?;

    let window_months = config.window_months();
    let images = range
        .anchors()
        .par_iter()
        .map(|&anchor| sum_window(daily, anchor, window_months))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(n_aggregated = images.len(), "monthly aggregation complete");
    Ok(RasterSequence::new(images)?)
}

/// Sums the daily images falling inside one anchor's window.
fn sum_window(
    daily: &RasterSequence,
    anchor: NaiveDate,
    window_months: u32,
) -> Result<RasterImage, SpiError> {
    let window = window_bounds(anchor, window_months)?;
    let matched: Vec<&RasterImage> = daily
        .iter()
        .filter(|image| image.timestamp().is_some_and(|ts| window.contains(ts)))
        .collect();

    let Some(first) = matched.first() else {
        return Err(SpiError::DataGap {
            window_start: window.start(),
            window_end: window.end(),
        });
    };

    let (rows, cols) = first.shape();
    let mut sum = Array2::from_elem((rows, cols), f64::NAN);
    for image in &matched {
        for ((row, col), &value) in image.data().indexed_iter() {
            if value.is_finite() {
                let cell = &mut sum[[row, col]];
                *cell = if cell.is_finite() { *cell + value } else { value };
            }
        }
    }

    Ok(first.derived(first.band_name(), sum)?.with_timestamp(anchor))
}
