//! Error types for the sirocco-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the sirocco-calendar crate.
///
/// Covers validation failures for analysis date ranges, half-open
/// intervals, and month-window arithmetic.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when an analysis range does not start on the first day of a month.
    #[error("date range must start on the first day of a month, got {date}")]
    NotMonthAligned {
        /// The misaligned start date that was provided.
        date: NaiveDate,
    },

    /// Returned when an analysis range ends before it starts.
    #[error("degenerate date range: end {end} precedes start {start}")]
    EmptyRange {
        /// Start of the range.
        start: NaiveDate,
        /// End of the range.
        end: NaiveDate,
    },

    /// Returned when a half-open interval has no interior.
    #[error("empty interval: end {end} must be after start {start}")]
    EmptyInterval {
        /// Start of the interval.
        start: NaiveDate,
        /// End of the interval.
        end: NaiveDate,
    },

    /// Returned when an aggregation window of zero months is requested.
    #[error("aggregation window must cover at least one month")]
    ZeroWindow,

    /// Returned when month or day arithmetic leaves the representable date range.
    #[error("date arithmetic out of range near {date}")]
    ArithmeticOverflow {
        /// The date at which the arithmetic failed.
        date: NaiveDate,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn error_not_month_aligned() {
        let e = CalendarError::NotMonthAligned {
            date: date(2005, 1, 15),
        };
        assert_eq!(
            e.to_string(),
            "date range must start on the first day of a month, got 2005-01-15"
        );
    }

    #[test]
    fn error_empty_range() {
        let e = CalendarError::EmptyRange {
            start: date(2010, 1, 1),
            end: date(2005, 1, 1),
        };
        assert_eq!(
            e.to_string(),
            "degenerate date range: end 2005-01-01 precedes start 2010-01-01"
        );
    }

    #[test]
    fn error_empty_interval() {
        let e = CalendarError::EmptyInterval {
            start: date(2005, 6, 1),
            end: date(2005, 6, 1),
        };
        assert_eq!(
            e.to_string(),
            "empty interval: end 2005-06-01 must be after start 2005-06-01"
        );
    }

    #[test]
    fn error_zero_window() {
        let e = CalendarError::ZeroWindow;
        assert_eq!(
            e.to_string(),
            "aggregation window must cover at least one month"
        );
    }

    #[test]
    fn error_arithmetic_overflow() {
        let e = CalendarError::ArithmeticOverflow {
            date: date(2005, 1, 1),
        };
        assert_eq!(e.to_string(), "date arithmetic out of range near 2005-01-01");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
