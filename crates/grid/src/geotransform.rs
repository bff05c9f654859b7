//! Affine mapping between pixel indices and geographic coordinates.

use crate::error::GridError;

/// A north-up affine geo-transform.
///
/// `origin_x`/`origin_y` locate the outer corner of the pixel at row 0,
/// column 0. `pixel_height` is negative for north-up rasters, where row
/// indices grow southward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoTransform {
    origin_x: f64,
    origin_y: f64,
    pixel_width: f64,
    pixel_height: f64,
}

impl GeoTransform {
    /// Creates a validated geo-transform.
    ///
    /// Returns [`GridError::DegenerateTransform`] when either pixel size is
    /// zero or non-finite.
    pub fn new(
        origin_x: f64,
        origin_y: f64,
        pixel_width: f64,
        pixel_height: f64,
    ) -> Result<Self, GridError> {
        let sizes_ok = pixel_width.is_finite()
            && pixel_height.is_finite()
            && pixel_width != 0.0
            && pixel_height != 0.0;
        if !sizes_ok || !origin_x.is_finite() || !origin_y.is_finite() {
            return Err(GridError::DegenerateTransform {
                pixel_width,
                pixel_height,
            });
        }
        Ok(Self {
            origin_x,
            origin_y,
            pixel_width,
            pixel_height,
        })
    }

    /// X coordinate of the grid origin.
    pub fn origin_x(&self) -> f64 {
        self.origin_x
    }

    /// Y coordinate of the grid origin.
    pub fn origin_y(&self) -> f64 {
        self.origin_y
    }

    /// Pixel width in CRS units.
    pub fn pixel_width(&self) -> f64 {
        self.pixel_width
    }

    /// Pixel height in CRS units, negative for north-up grids.
    pub fn pixel_height(&self) -> f64 {
        self.pixel_height
    }

    /// Geographic coordinates of the center of pixel `(row, col)`.
    pub fn pixel_center(&self, row: usize, col: usize) -> (f64, f64) {
        (
            self.origin_x + (col as f64 + 0.5) * self.pixel_width,
            self.origin_y + (row as f64 + 0.5) * self.pixel_height,
        )
    }

    /// Pixel indices `(row, col)` of the cell containing `(x, y)`.
    ///
    /// Indices can be negative or beyond the grid extent; callers are
    /// expected to bounds-check against their raster shape.
    pub fn geo_to_pixel(&self, x: f64, y: f64) -> (isize, isize) {
        let col = ((x - self.origin_x) / self.pixel_width).floor();
        let row = ((y - self.origin_y) / self.pixel_height).floor();
        (row as isize, col as isize)
    }
}
