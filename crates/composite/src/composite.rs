//! Mean and extreme composites over selected SPI images.

use ndarray::Array2;
use sirocco_grid::{RasterImage, RasterSequence, StudyArea};

use crate::error::CompositeError;
use crate::period::{DroughtPeriod, filter_period};

/// Band name carried by the all-time maximum composite.
pub const MAX_BAND: &str = "spi3_max";

/// Band name carried by the all-time minimum composite.
pub const MIN_BAND: &str = "spi3_min";

/// Pixel-wise mean of one period's SPI images.
///
/// Returns `Ok(None)` when the period matches nothing; an individual quiet
/// period is unremarkable and must not abort a run.
pub fn period_mean(
    spi: &RasterSequence,
    period: &DroughtPeriod,
) -> Result<Option<RasterImage>, CompositeError> {
    let pool = filter_period(spi, period);
    if pool.is_empty() {
        return Ok(None);
    }
    Ok(Some(mean_of_pool(&pool)?))
}

/// Pixel-wise mean over the pooled matches of every period, clipped to the
/// study area.
///
/// Periods are merged before averaging, so an image matched by `k` periods
/// contributes `k` times. Overlapping periods therefore weight their shared
/// months more heavily than a deduplicated union would.
///
/// # Errors
///
/// Returns [`CompositeError::EmptyComposite`] when no image falls inside
/// any period.
#[tracing::instrument(skip_all, fields(n_images = spi.len(), n_periods = periods.len()))]
pub fn combined_composite(
    spi: &RasterSequence,
    periods: &[DroughtPeriod],
    area: &StudyArea,
) -> Result<RasterImage, CompositeError> {
    let mut pool: Vec<&RasterImage> = Vec::new();
    for period in periods {
        let matched = filter_period(spi, period);
        tracing::debug!(period = period.name(), n_matched = matched.len(), "period selected");
        pool.extend(matched);
    }
    if pool.is_empty() {
        return Err(CompositeError::EmptyComposite);
    }

    let mean = mean_of_pool(&pool)?;
    Ok(area.mask(&mean)?)
}

/// Pixel-wise all-time maximum and minimum over the full SPI sequence.
///
/// NaN values are skipped; a pixel with no finite value in any image stays
/// NaN in both outputs.
///
/// # Errors
///
/// Returns [`CompositeError::EmptySequence`] when the sequence is empty.
pub fn alltime_extremes(
    spi: &RasterSequence,
) -> Result<(RasterImage, RasterImage), CompositeError> {
    let Some(first) = spi.first() else {
        return Err(CompositeError::EmptySequence);
    };
    let (rows, cols) = first.shape();

    let mut max = Array2::from_elem((rows, cols), f64::NAN);
    let mut min = Array2::from_elem((rows, cols), f64::NAN);
    for image in spi {
        for ((row, col), &value) in image.data().indexed_iter() {
            if !value.is_finite() {
                continue;
            }
            let high = &mut max[[row, col]];
            if !high.is_finite() || value > *high {
                *high = value;
            }
            let low = &mut min[[row, col]];
            if !low.is_finite() || value < *low {
                *low = value;
            }
        }
    }

    Ok((
        first.derived(MAX_BAND, max)?,
        first.derived(MIN_BAND, min)?,
    ))
}

/// NaN-aware pixel mean over a pool of same-grid images.
fn mean_of_pool(pool: &[&RasterImage]) -> Result<RasterImage, CompositeError> {
    let first = pool[0];
    let (rows, cols) = first.shape();

    let mut sum = Array2::<f64>::zeros((rows, cols));
    let mut count = Array2::<f64>::zeros((rows, cols));
    for image in pool {
        for ((row, col), &value) in image.data().indexed_iter() {
            if value.is_finite() {
                sum[[row, col]] += value;
                count[[row, col]] += 1.0;
            }
        }
    }

    let mut mean = Array2::from_elem((rows, cols), f64::NAN);
    for ((row, col), &n) in count.indexed_iter() {
        if n > 0.0 {
            mean[[row, col]] = sum[[row, col]] / n;
        }
    }

    Ok(first.derived(first.band_name(), mean)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ndarray::Array2;
    use sirocco_grid::{Band, GeoTransform};

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn spi_image(date: NaiveDate, value: f64) -> RasterImage {
        RasterImage::single_band(
            Band::new("spi3", Array2::from_elem((2, 2), value)).unwrap(),
            GeoTransform::new(0.0, 2.0, 1.0, -1.0).unwrap(),
            Default::default(),
        )
        .unwrap()
        .with_timestamp(date)
    }

    /// Covers the whole 2x2 grid whose pixel centers lie in (0..2, 0..2).
    fn whole_area() -> StudyArea {
        StudyArea::from_ring(&[(-1.0, -1.0), (3.0, -1.0), (3.0, 3.0), (-1.0, 3.0)]).unwrap()
    }

    #[test]
    fn period_mean_averages_the_matches() {
        let spi = RasterSequence::new(vec![
            spi_image(ymd(2005, 1, 1), 1.0),
            spi_image(ymd(2005, 2, 1), 3.0),
            spi_image(ymd(2005, 6, 1), 100.0),
        ])
        .unwrap();
        let period = DroughtPeriod::new("early", ymd(2005, 1, 1), ymd(2005, 3, 1)).unwrap();

        let mean = period_mean(&spi, &period).unwrap().unwrap();
        assert_eq!(mean.data()[[0, 0]], 2.0);
        assert_eq!(mean.band_name(), "spi3");
        assert_eq!(mean.timestamp(), None);
    }

    #[test]
    fn quiet_period_is_none_not_an_error() {
        let spi = RasterSequence::new(vec![spi_image(ymd(2005, 1, 1), 1.0)]).unwrap();
        let period = DroughtPeriod::new("quiet", ymd(2010, 1, 1), ymd(2011, 1, 1)).unwrap();
        assert!(period_mean(&spi, &period).unwrap().is_none());
    }

    #[test]
    fn overlapping_periods_double_count_shared_months() {
        let spi = RasterSequence::new(vec![
            spi_image(ymd(2005, 1, 1), 1.0),
            spi_image(ymd(2005, 2, 1), 2.0),
            spi_image(ymd(2005, 3, 1), 4.0),
        ])
        .unwrap();
        // First period matches Jan + Feb, second matches Feb + Mar: the
        // pool is [1, 2, 2, 4], not the deduplicated [1, 2, 4].
        let periods = vec![
            DroughtPeriod::new("a", ymd(2005, 1, 1), ymd(2005, 3, 1)).unwrap(),
            DroughtPeriod::new("b", ymd(2005, 2, 1), ymd(2005, 4, 1)).unwrap(),
        ];

        let composite = combined_composite(&spi, &periods, &whole_area()).unwrap();
        assert_eq!(composite.data()[[1, 1]], 9.0 / 4.0);
    }

    #[test]
    fn single_period_composite_equals_its_mean() {
        let spi = RasterSequence::new(vec![
            spi_image(ymd(2005, 1, 1), -1.5),
            spi_image(ymd(2005, 2, 1), -0.5),
        ])
        .unwrap();
        let period = DroughtPeriod::new("only", ymd(2005, 1, 1), ymd(2005, 12, 1)).unwrap();

        let combined =
            combined_composite(&spi, std::slice::from_ref(&period), &whole_area()).unwrap();
        let mean = period_mean(&spi, &period).unwrap().unwrap();

        assert_eq!(
            combined.data()[[0, 1]].to_bits(),
            mean.data()[[0, 1]].to_bits()
        );
    }

    #[test]
    fn composite_is_clipped_to_the_study_area() {
        let spi = RasterSequence::new(vec![spi_image(ymd(2005, 1, 1), 1.0)]).unwrap();
        let period = DroughtPeriod::new("all", ymd(2005, 1, 1), ymd(2006, 1, 1)).unwrap();
        // Covers only the left column of pixel centers (x = 0.5).
        let area =
            StudyArea::from_ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 2.0), (0.0, 2.0)]).unwrap();

        let composite = combined_composite(&spi, std::slice::from_ref(&period), &area).unwrap();

        assert_eq!(composite.data()[[0, 0]], 1.0);
        assert!(composite.data()[[0, 1]].is_nan());
    }

    #[test]
    fn no_matches_anywhere_is_an_error() {
        let spi = RasterSequence::new(vec![spi_image(ymd(2005, 1, 1), 1.0)]).unwrap();
        let periods = vec![DroughtPeriod::new("late", ymd(2020, 1, 1), ymd(2021, 1, 1)).unwrap()];

        assert!(matches!(
            combined_composite(&spi, &periods, &whole_area()),
            Err(CompositeError::EmptyComposite)
        ));
    }

    #[test]
    fn extremes_track_pixel_maxima_and_minima() {
        let mut low = Array2::from_elem((2, 2), -2.0);
        low[[0, 1]] = f64::NAN;
        let spi = RasterSequence::new(vec![
            RasterImage::single_band(
                Band::new("spi3", low).unwrap(),
                GeoTransform::new(0.0, 2.0, 1.0, -1.0).unwrap(),
                Default::default(),
            )
            .unwrap()
            .with_timestamp(ymd(2005, 1, 1)),
            spi_image(ymd(2005, 2, 1), 1.5),
        ])
        .unwrap();

        let (max, min) = alltime_extremes(&spi).unwrap();

        assert_eq!(max.band_name(), MAX_BAND);
        assert_eq!(min.band_name(), MIN_BAND);
        assert_eq!(max.data()[[0, 0]], 1.5);
        assert_eq!(min.data()[[0, 0]], -2.0);
        // The NaN first value leaves the second as both extremes.
        assert_eq!(max.data()[[0, 1]], 1.5);
        assert_eq!(min.data()[[0, 1]], 1.5);
    }

    #[test]
    fn extremes_need_at_least_one_image() {
        assert!(matches!(
            alltime_extremes(&RasterSequence::empty()),
            Err(CompositeError::EmptySequence)
        ));
    }
}
