//! Month anchors, inclusive month counting, and aggregation windows.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::error::CalendarError;
use crate::interval::DateInterval;

/// Returns the first day of the month containing `date`.
pub fn month_floor(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Number of calendar months covered by `[start, end]`, counting both
/// endpoint months. Returns 0 when `end` precedes `start`.
pub fn months_inclusive(start: NaiveDate, end: NaiveDate) -> usize {
    if end < start {
        return 0;
    }
    let span = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    (span + 1) as usize
}

/// Backward-looking aggregation window for one month anchor.
///
/// For a window of `window_months` months the interval is
/// `[anchor - (window_months - 1) months, anchor + 1 day)`: the two
/// preceding months in full plus the anchor day itself. Anchors are
/// always first-of-month dates, so for the default 3-month window this
/// reproduces the `[M - 2 months, M + 1 day)` filter of the SPI-3
/// definition.
pub fn window_bounds(
    anchor: NaiveDate,
    window_months: u32,
) -> Result<DateInterval, CalendarError> {
    if window_months == 0 {
        return Err(CalendarError::ZeroWindow);
    }
    let start = anchor
        .checked_sub_months(Months::new(window_months - 1))
        .ok_or(CalendarError::ArithmeticOverflow { date: anchor })?;
    let end = anchor
        .checked_add_days(Days::new(1))
        .ok_or(CalendarError::ArithmeticOverflow { date: anchor })?;
    DateInterval::new(start, end)
}

/// A validated global analysis range with precomputed month anchors.
///
/// The range is inclusive on both ends and must start on the first day of
/// a month; the end date may fall anywhere inside its month. One anchor
/// (a first-of-month date) is produced per calendar month in the range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthRange {
    start: NaiveDate,
    end: NaiveDate,
    anchors: Vec<NaiveDate>,
}

impl MonthRange {
    /// Creates a validated range.
    ///
    /// Returns [`CalendarError::NotMonthAligned`] when `start` is not the
    /// first of its month and [`CalendarError::EmptyRange`] when `end`
    /// precedes `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CalendarError> {
        if start.day() != 1 {
            return Err(CalendarError::NotMonthAligned { date: start });
        }
        if end < start {
            return Err(CalendarError::EmptyRange { start, end });
        }

        let n = months_inclusive(start, end);
        let mut anchors = Vec::with_capacity(n);
        let mut year = start.year();
        let mut month = start.month();
        for _ in 0..n {
            let anchor = NaiveDate::from_ymd_opt(year, month, 1)
                .ok_or(CalendarError::ArithmeticOverflow { date: start })?;
            anchors.push(anchor);
            month += 1;
            if month > 12 {
                month = 1;
                year += 1;
            }
        }

        Ok(Self { start, end, anchors })
    }

    /// Inclusive start of the range.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Inclusive end of the range.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar months in the range.
    pub fn n_months(&self) -> usize {
        self.anchors.len()
    }

    /// First-of-month anchor dates, one per month, time-ascending.
    pub fn anchors(&self) -> &[NaiveDate] {
        &self.anchors
    }
}
