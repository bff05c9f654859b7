//! Error types for sirocco-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the sirocco-io crate.
///
/// This enum covers filesystem failures, format-specific errors from the
/// TIFF and CSV libraries, export-cap violations, and data-model mismatches
/// encountered when reading or writing rasters and sample tables.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file or directory does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the operating system.
    #[error("io error: {reason}")]
    Io {
        /// Description of the underlying filesystem failure.
        reason: String,
    },

    /// Wraps an error originating from the TIFF library.
    #[error("tiff error: {reason}")]
    Tiff {
        /// Description of the underlying TIFF failure.
        reason: String,
    },

    /// Wraps an error originating from the CSV library.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Wraps an error originating from the sirocco-grid crate.
    #[error("grid error: {reason}")]
    Grid {
        /// Description of the underlying raster-model failure.
        reason: String,
    },

    /// Returned when a TIFF stores its pixels in a format the reader does
    /// not handle.
    #[error("unsupported TIFF sample format in {}", path.display())]
    UnsupportedSampleFormat {
        /// Path to the offending file.
        path: PathBuf,
    },

    /// Returned when a GeoTIFF lacks the tags needed to georeference it.
    #[error("no usable georeferencing tags in {}", path.display())]
    MissingGeoReference {
        /// Path to the offending file.
        path: PathBuf,
    },

    /// Returned when a raster export would exceed the pixel cap.
    ///
    /// The cap exists to fail loudly instead of truncating the output; the
    /// in-memory results that produced the raster stay valid.
    #[error("raster export of {pixels} pixels exceeds the {max_pixels} pixel cap")]
    ExportTooLarge {
        /// Pixels the export would write.
        pixels: u64,
        /// Configured cap.
        max_pixels: u64,
    },

    /// Returned when a multi-band image reaches the single-band writer.
    #[error("GeoTIFF export writes a single band, image has {bands}")]
    UnsupportedBandCount {
        /// Bands carried by the rejected image.
        bands: usize,
    },

    /// Returned when a store is asked for a band it does not serve.
    #[error("band '{band}' is not served by this store")]
    UnknownBand {
        /// The requested band name.
        band: String,
    },
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Io {
            reason: e.to_string(),
        }
    }
}

impl From<tiff::TiffError> for IoError {
    fn from(e: tiff::TiffError) -> Self {
        IoError::Tiff {
            reason: e.to_string(),
        }
    }
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<sirocco_grid::GridError> for IoError {
    fn from(e: sirocco_grid::GridError) -> Self {
        IoError::Grid {
            reason: e.to_string(),
        }
    }
}
