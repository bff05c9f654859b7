//! Error types for period selection and compositing.

use chrono::NaiveDate;
use sirocco_grid::GridError;

/// Errors produced while selecting drought periods or building composites.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CompositeError {
    /// Returned when a drought period's dates are reversed or equal.
    #[error("drought period '{name}' is empty: [{start}, {end})")]
    InvalidPeriod {
        /// Label of the offending period.
        name: String,
        /// Configured start date.
        start: NaiveDate,
        /// Configured end date.
        end: NaiveDate,
    },

    /// Returned when no SPI image falls inside any configured period.
    #[error("no SPI images fall inside any configured drought period")]
    EmptyComposite,

    /// Returned when extremes are requested over an empty sequence.
    #[error("cannot composite an empty SPI sequence")]
    EmptySequence,

    /// Propagated from raster construction.
    #[error(transparent)]
    Grid(#[from] GridError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_period() {
        let err = CompositeError::InvalidPeriod {
            name: "2005 Drought".to_string(),
            start: NaiveDate::from_ymd_opt(2006, 1, 31).unwrap(),
            end: NaiveDate::from_ymd_opt(2004, 6, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "drought period '2005 Drought' is empty: [2006-01-31, 2004-06-01)"
        );
    }

    #[test]
    fn display_empty_composite() {
        assert_eq!(
            CompositeError::EmptyComposite.to_string(),
            "no SPI images fall inside any configured drought period"
        );
    }

    #[test]
    fn display_empty_sequence() {
        assert_eq!(
            CompositeError::EmptySequence.to_string(),
            "cannot composite an empty SPI sequence"
        );
    }

    #[test]
    fn implements_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<CompositeError>();
    }
}
