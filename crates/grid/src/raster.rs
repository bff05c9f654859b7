//! Georeferenced raster images.

use chrono::NaiveDate;
use ndarray::Array2;

use crate::crs::Crs;
use crate::error::GridError;
use crate::geotransform::GeoTransform;

/// A named numeric band over a 2-D pixel grid.
///
/// Missing data is represented as NaN and excluded from all reductions.
#[derive(Debug, Clone)]
pub struct Band {
    name: String,
    data: Array2<f64>,
}

impl Band {
    /// Creates a band, rejecting zero-sized grids.
    pub fn new(name: impl Into<String>, data: Array2<f64>) -> Result<Self, GridError> {
        let (rows, cols) = data.dim();
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid { rows, cols });
        }
        Ok(Self {
            name: name.into(),
            data,
        })
    }

    /// Band name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pixel values in row-major layout.
    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    /// Grid shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }
}

/// A georeferenced raster image: one or more equally-shaped named bands on
/// a common grid, CRS, and optional acquisition timestamp.
///
/// Pipeline stages operate on the primary (first) band; additional bands
/// ride along for multi-band sources and exports.
#[derive(Debug, Clone)]
pub struct RasterImage {
    bands: Vec<Band>,
    transform: GeoTransform,
    crs: Crs,
    timestamp: Option<NaiveDate>,
}

impl RasterImage {
    /// Creates an image from one or more bands sharing a grid, with no
    /// timestamp.
    ///
    /// Returns [`GridError::NoBands`] for an empty band list and
    /// [`GridError::BandShapeMismatch`] when the bands disagree on shape.
    pub fn new(bands: Vec<Band>, transform: GeoTransform, crs: Crs) -> Result<Self, GridError> {
        let Some(first) = bands.first() else {
            return Err(GridError::NoBands);
        };
        let (expected_rows, expected_cols) = first.shape();
        for band in bands.iter().skip(1) {
            let (rows, cols) = band.shape();
            if (rows, cols) != (expected_rows, expected_cols) {
                return Err(GridError::BandShapeMismatch {
                    band: band.name().to_string(),
                    expected_rows,
                    expected_cols,
                    rows,
                    cols,
                });
            }
        }
        Ok(Self {
            bands,
            transform,
            crs,
            timestamp: None,
        })
    }

    /// Creates a single-band image with no timestamp.
    pub fn single_band(
        band: Band,
        transform: GeoTransform,
        crs: Crs,
    ) -> Result<Self, GridError> {
        Self::new(vec![band], transform, crs)
    }

    /// Attaches an acquisition timestamp.
    pub fn with_timestamp(mut self, timestamp: NaiveDate) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Appends a band; its shape must match the existing grid.
    pub fn push_band(&mut self, band: Band) -> Result<(), GridError> {
        let (expected_rows, expected_cols) = self.shape();
        let (rows, cols) = band.shape();
        if (rows, cols) != (expected_rows, expected_cols) {
            return Err(GridError::BandShapeMismatch {
                band: band.name().to_string(),
                expected_rows,
                expected_cols,
                rows,
                cols,
            });
        }
        self.bands.push(band);
        Ok(())
    }

    /// All bands, in insertion order.
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Looks up a band by name.
    pub fn band(&self, name: &str) -> Option<&Band> {
        self.bands.iter().find(|b| b.name() == name)
    }

    /// The primary (first) band. Construction guarantees at least one band.
    pub fn primary(&self) -> &Band {
        &self.bands[0]
    }

    /// Name of the primary band.
    pub fn band_name(&self) -> &str {
        self.primary().name()
    }

    /// Pixel values of the primary band.
    pub fn data(&self) -> &Array2<f64> {
        self.primary().data()
    }

    /// Grid shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.primary().shape()
    }

    /// The affine geo-transform.
    pub fn transform(&self) -> GeoTransform {
        self.transform
    }

    /// The coordinate reference system.
    pub fn crs(&self) -> Crs {
        self.crs
    }

    /// Acquisition timestamp, if any. Derived rasters carry none.
    pub fn timestamp(&self) -> Option<NaiveDate> {
        self.timestamp
    }

    /// Bounds-checked primary-band value at `(row, col)`.
    pub fn get(&self, row: isize, col: isize) -> Option<f64> {
        if row < 0 || col < 0 {
            return None;
        }
        let (rows, cols) = self.shape();
        let (row, col) = (row as usize, col as usize);
        if row >= rows || col >= cols {
            return None;
        }
        Some(self.data()[[row, col]])
    }

    /// Builds a new single-band image on this image's grid: same transform
    /// and CRS, no timestamp. The data shape must match.
    pub fn derived(&self, name: &str, data: Array2<f64>) -> Result<RasterImage, GridError> {
        let (expected_rows, expected_cols) = self.shape();
        let (rows, cols) = data.dim();
        if (rows, cols) != (expected_rows, expected_cols) {
            return Err(GridError::BandShapeMismatch {
                band: name.to_string(),
                expected_rows,
                expected_cols,
                rows,
                cols,
            });
        }
        RasterImage::single_band(Band::new(name, data)?, self.transform, self.crs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform() -> GeoTransform {
        GeoTransform::new(0.0, 0.0, 1.0, -1.0).unwrap()
    }

    fn image(rows: usize, cols: usize) -> RasterImage {
        RasterImage::single_band(
            Band::new("precipitation", Array2::zeros((rows, cols))).unwrap(),
            transform(),
            Crs::WGS84,
        )
        .unwrap()
    }

    #[test]
    fn single_band_accessors() {
        let img = image(3, 4);
        assert_eq!(img.band_name(), "precipitation");
        assert_eq!(img.shape(), (3, 4));
        assert_eq!(img.crs(), Crs::WGS84);
        assert!(img.timestamp().is_none());
        assert_eq!(img.bands().len(), 1);
    }

    #[test]
    fn band_rejects_empty_grid() {
        let result = Band::new("precipitation", Array2::zeros((0, 4)));
        assert!(matches!(
            result,
            Err(GridError::EmptyGrid { rows: 0, cols: 4 })
        ));
    }

    #[test]
    fn image_requires_a_band() {
        assert!(matches!(
            RasterImage::new(vec![], transform(), Crs::WGS84),
            Err(GridError::NoBands)
        ));
    }

    #[test]
    fn bands_must_share_a_shape() {
        let a = Band::new("a", Array2::zeros((2, 3))).unwrap();
        let b = Band::new("b", Array2::zeros((3, 3))).unwrap();
        assert!(matches!(
            RasterImage::new(vec![a, b], transform(), Crs::WGS84),
            Err(GridError::BandShapeMismatch { .. })
        ));
    }

    #[test]
    fn with_timestamp_attaches() {
        let ts = NaiveDate::from_ymd_opt(2005, 1, 1).unwrap();
        let img = image(2, 2).with_timestamp(ts);
        assert_eq!(img.timestamp(), Some(ts));
    }

    #[test]
    fn push_band_checks_shape() {
        let mut img = image(2, 3);
        let ok = Band::new("mask", Array2::ones((2, 3))).unwrap();
        img.push_band(ok).unwrap();
        assert_eq!(img.bands().len(), 2);
        assert!(img.band("mask").is_some());

        let bad = Band::new("bad", Array2::ones((3, 3))).unwrap();
        assert!(matches!(
            img.push_band(bad),
            Err(GridError::BandShapeMismatch { .. })
        ));
    }

    #[test]
    fn get_bounds_checked() {
        let mut data = Array2::zeros((2, 2));
        data[[1, 1]] = 7.5;
        let img = RasterImage::single_band(
            Band::new("precipitation", data).unwrap(),
            transform(),
            Crs::WGS84,
        )
        .unwrap();
        assert_eq!(img.get(1, 1), Some(7.5));
        assert_eq!(img.get(-1, 0), None);
        assert_eq!(img.get(0, 2), None);
    }

    #[test]
    fn derived_preserves_grid_drops_timestamp() {
        let ts = NaiveDate::from_ymd_opt(2005, 1, 1).unwrap();
        let img = image(2, 2).with_timestamp(ts);
        let out = img.derived("spi3", Array2::ones((2, 2))).unwrap();
        assert_eq!(out.band_name(), "spi3");
        assert_eq!(out.transform(), img.transform());
        assert!(out.timestamp().is_none());

        assert!(matches!(
            img.derived("spi3", Array2::ones((3, 2))),
            Err(GridError::BandShapeMismatch { .. })
        ));
    }
}
