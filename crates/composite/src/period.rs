//! Named drought periods and per-period selection.

use chrono::NaiveDate;
use sirocco_calendar::DateInterval;
use sirocco_grid::{RasterImage, RasterSequence};

use crate::error::CompositeError;

/// A named historical drought episode.
///
/// Selection is half-open: an SPI image belongs to the period when its
/// timestamp satisfies `start <= ts < end`.
#[derive(Debug, Clone, PartialEq)]
pub struct DroughtPeriod {
    name: String,
    interval: DateInterval,
}

impl DroughtPeriod {
    /// Creates a named period over `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`CompositeError::InvalidPeriod`] when `end <= start`.
    pub fn new(
        name: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, CompositeError> {
        let name = name.into();
        let interval = DateInterval::new(start, end)
            .map_err(|_| CompositeError::InvalidPeriod { name: name.clone(), start, end })?;
        Ok(Self { name, interval })
    }

    /// Label of the period.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Half-open date interval covered by the period.
    pub fn interval(&self) -> DateInterval {
        self.interval
    }

    /// Whether a timestamp falls inside the period.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.interval.contains(date)
    }
}

/// Borrows the images of `spi` whose timestamp falls inside `period`.
pub fn filter_period<'a>(spi: &'a RasterSequence, period: &DroughtPeriod) -> Vec<&'a RasterImage> {
    spi.iter()
        .filter(|image| image.timestamp().is_some_and(|ts| period.contains(ts)))
        .collect()
}
