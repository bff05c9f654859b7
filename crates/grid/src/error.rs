//! Error types for the sirocco-grid crate.

/// Error type for all fallible operations in the sirocco-grid crate.
///
/// Covers raster construction problems, sequence ordering violations,
/// geo-transform validation, and study-area geometry validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Returned when a raster band has a zero-sized dimension.
    #[error("raster band must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid {
        /// Number of rows provided.
        rows: usize,
        /// Number of columns provided.
        cols: usize,
    },

    /// Returned when an image is constructed without any band.
    #[error("raster image needs at least one band")]
    NoBands,

    /// Returned when a band's shape differs from the image grid.
    #[error("band '{band}' shape {rows}x{cols} does not match grid {expected_rows}x{expected_cols}")]
    BandShapeMismatch {
        /// Name of the offending band.
        band: String,
        /// Expected number of rows.
        expected_rows: usize,
        /// Expected number of columns.
        expected_cols: usize,
        /// Actual number of rows.
        rows: usize,
        /// Actual number of columns.
        cols: usize,
    },

    /// Returned when a sequence member lacks a timestamp.
    #[error("sequence image at index {index} has no timestamp")]
    MissingTimestamp {
        /// Position of the offending image.
        index: usize,
    },

    /// Returned when sequence timestamps are not strictly ascending.
    #[error("sequence timestamps not strictly ascending at index {index}")]
    UnorderedTimestamps {
        /// Position of the offending image.
        index: usize,
    },

    /// Returned when a sequence member sits on a different grid than the first.
    #[error("sequence image at index {index} is on a different grid")]
    NonUniformGrid {
        /// Position of the offending image.
        index: usize,
    },

    /// Returned when a geo-transform has a non-finite or zero pixel size.
    #[error("degenerate geo-transform: pixel size {pixel_width}x{pixel_height}")]
    DegenerateTransform {
        /// Pixel width provided.
        pixel_width: f64,
        /// Pixel height provided.
        pixel_height: f64,
    },

    /// Returned when a study-area ring has fewer than three points.
    #[error("study-area ring needs at least 3 points, got {n_points}")]
    InvalidRing {
        /// Number of ring points provided.
        n_points: usize,
    },
}
