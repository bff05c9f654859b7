//! Error types for the aggregation and standardization stages.

use chrono::NaiveDate;
use sirocco_calendar::CalendarError;
use sirocco_grid::GridError;

/// Errors produced while aggregating or standardizing precipitation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SpiError {
    /// Returned when the stage configuration is unusable.
    #[error("invalid SPI configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },

    /// Returned when an aggregation window contains no source image at all.
    ///
    /// Partial coverage is accepted; a completely empty window is not,
    /// because the monthly sum would be undefined rather than merely weak.
    #[error("no precipitation coverage in aggregation window [{window_start}, {window_end})")]
    DataGap {
        /// Inclusive start of the empty window.
        window_start: NaiveDate,
        /// Exclusive end of the empty window.
        window_end: NaiveDate,
    },

    /// Returned when a climatology is requested over an empty sequence.
    #[error("cannot estimate a climatology from an empty sequence")]
    EmptySequence,

    /// Returned when the climatology grid does not match the sequence grid.
    #[error(
        "climatology grid is {climatology_rows}x{climatology_cols} but the sequence grid is {rows}x{cols}"
    )]
    ShapeMismatch {
        /// Rows of the climatology rasters.
        climatology_rows: usize,
        /// Columns of the climatology rasters.
        climatology_cols: usize,
        /// Rows of the sequence rasters.
        rows: usize,
        /// Columns of the sequence rasters.
        cols: usize,
    },

    /// Propagated from month arithmetic.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Propagated from raster construction.
    #[error(transparent)]
    Grid(#[from] GridError),
}
