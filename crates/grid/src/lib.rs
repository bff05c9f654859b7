//! # sirocco-grid
//!
//! Georeferenced raster grids for the SPI pipeline: images with named
//! `f64` bands over an `ndarray` grid, time-ordered sequences, affine
//! geo-transforms, and study-area masking. Missing data is NaN
//! throughout; no separate mask band is carried.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ndarray::Array2;
//! use sirocco_grid::{Band, Crs, GeoTransform, RasterImage, RasterSequence, StudyArea};
//!
//! let gt = GeoTransform::new(66.0, 42.0, 0.05, -0.05)?;
//! let band = Band::new("precipitation", Array2::zeros((40, 60)))?;
//! let img = RasterImage::single_band(band, gt, Crs::WGS84)?;
//! let seq = RasterSequence::new(vec![img.with_timestamp(day)])?;
//!
//! let area = StudyArea::from_ring(&[(66.0, 39.0), (69.0, 39.0), (69.0, 42.0), (66.0, 42.0)])?;
//! let clipped = area.mask(seq.first().unwrap())?;
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `raster` | Bands and raster images |
//! | `sequence` | Time-ordered image collections |
//! | `geotransform` | Pixel/geographic coordinate mapping |
//! | `study_area` | Polygon geometry and masking |
//! | `crs` | EPSG reference-system identifiers |
//! | `error` | Error types |

mod crs;
mod error;
mod geotransform;
mod raster;
mod sequence;
mod study_area;

pub use crs::Crs;
pub use error::GridError;
pub use geotransform::GeoTransform;
pub use raster::{Band, RasterImage};
pub use sequence::RasterSequence;
pub use study_area::StudyArea;
