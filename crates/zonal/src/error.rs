//! Error types for region reductions.

/// Errors produced while reducing a raster over a geometry.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ZonalError {
    /// Returned when the probe spacing is not a positive finite number.
    #[error("reduction scale must be finite and positive, got {scale}")]
    InvalidScale {
        /// The rejected spacing.
        scale: f64,
    },

    /// Returned when no probe point inside the geometry reads a valid pixel.
    #[error("geometry covers no valid pixels at the requested scale")]
    EmptyRegion,

    /// Returned in strict mode when the geometry only partially overlaps
    /// valid data.
    #[error(
        "geometry only partially overlaps valid data: {n_valid} of {n_probed} probe points read a pixel"
    )]
    PartialCoverage {
        /// Probe points that fell inside the geometry.
        n_probed: usize,
        /// Probe points that read a finite pixel value.
        n_valid: usize,
    },
}
