//! # sirocco-io
//!
//! Read daily precipitation archives from GeoTIFF directories and write
//! pipeline outputs back out as GeoTIFF rasters and CSV sample tables.
//! Bridges external file formats into sirocco's in-memory raster model.

mod error;
mod geotiff;
mod samples;
mod store;

pub use error::IoError;
pub use geotiff::{DEFAULT_MAX_PIXELS, read_geotiff, write_geotiff};
pub use samples::write_samples_csv;
pub use store::{DirectoryStore, MemoryStore, RasterStore};
