//! Half-open date intervals.

use chrono::NaiveDate;

use crate::error::CalendarError;

/// A half-open date interval `[start, end)`.
///
/// Both drought periods and aggregation windows filter raster timestamps
/// with this type, so the exclusive-end convention is applied in exactly
/// one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateInterval {
    /// Creates a new interval.
    ///
    /// Returns [`CalendarError::EmptyInterval`] when `end <= start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CalendarError> {
        if end <= start {
            return Err(CalendarError::EmptyInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Inclusive start of the interval.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Exclusive end of the interval.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true when `date` falls inside `[start, end)`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn contains_is_half_open() {
        let iv = DateInterval::new(date(2005, 6, 1), date(2006, 1, 31)).unwrap();
        assert!(iv.contains(date(2005, 6, 1)));
        assert!(iv.contains(date(2006, 1, 30)));
        assert!(!iv.contains(date(2006, 1, 31)));
        assert!(!iv.contains(date(2005, 5, 31)));
    }

    #[test]
    fn rejects_empty_interval() {
        let d = date(2005, 6, 1);
        assert_eq!(
            DateInterval::new(d, d),
            Err(CalendarError::EmptyInterval { start: d, end: d })
        );
    }

    #[test]
    fn rejects_reversed_interval() {
        let result = DateInterval::new(date(2006, 1, 1), date(2005, 1, 1));
        assert!(matches!(result, Err(CalendarError::EmptyInterval { .. })));
    }

    #[test]
    fn accessors() {
        let iv = DateInterval::new(date(2010, 6, 1), date(2011, 12, 31)).unwrap();
        assert_eq!(iv.start(), date(2010, 6, 1));
        assert_eq!(iv.end(), date(2011, 12, 31));
    }
}
