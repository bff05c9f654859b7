//! Study-area geometry and raster masking.

use geo::{BoundingRect, Contains, Coord, LineString, MultiPolygon, Point, Polygon, Rect};
use ndarray::Array2;

use crate::error::GridError;
use crate::raster::RasterImage;

/// The polygonal region of interest, supplied once at startup.
#[derive(Debug, Clone)]
pub struct StudyArea {
    geometry: MultiPolygon<f64>,
}

impl StudyArea {
    /// Wraps a single polygon.
    pub fn from_polygon(polygon: Polygon<f64>) -> Self {
        Self {
            geometry: MultiPolygon::new(vec![polygon]),
        }
    }

    /// Wraps a multipolygon.
    pub fn from_multi_polygon(geometry: MultiPolygon<f64>) -> Self {
        Self { geometry }
    }

    /// Builds a single-polygon study area from an exterior ring of
    /// `(x, y)` pairs. The ring is closed automatically and must have at
    /// least three points.
    pub fn from_ring(ring: &[(f64, f64)]) -> Result<Self, GridError> {
        if ring.len() < 3 {
            return Err(GridError::InvalidRing {
                n_points: ring.len(),
            });
        }
        let coords: Vec<Coord<f64>> = ring.iter().map(|&(x, y)| Coord { x, y }).collect();
        let polygon = Polygon::new(LineString::new(coords), vec![]);
        Ok(Self::from_polygon(polygon))
    }

    /// The underlying geometry.
    pub fn geometry(&self) -> &MultiPolygon<f64> {
        &self.geometry
    }

    /// True when the point `(x, y)` lies inside the study area.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.geometry.contains(&Point::new(x, y))
    }

    /// Axis-aligned bounding rectangle, `None` for a pointless geometry.
    pub fn bounding_box(&self) -> Option<Rect<f64>> {
        self.geometry.bounding_rect()
    }

    /// Clips an image: pixels whose center falls outside the study area
    /// become NaN. Band name and timestamp are preserved.
    pub fn mask(&self, image: &RasterImage) -> Result<RasterImage, GridError> {
        let (rows, cols) = image.shape();
        let src = image.data();
        let transform = image.transform();

        let mut out = Array2::from_elem((rows, cols), f64::NAN);
        for row in 0..rows {
            for col in 0..cols {
                let (x, y) = transform.pixel_center(row, col);
                if self.contains_point(x, y) {
                    out[[row, col]] = src[[row, col]];
                }
            }
        }

        let masked = image.derived(image.band_name(), out)?;
        Ok(match image.timestamp() {
            Some(ts) => masked.with_timestamp(ts),
            None => masked,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crs::Crs;
    use crate::geotransform::GeoTransform;
    use crate::raster::Band;

    /// 4x4 unit grid covering x in [0, 4], y in [0, 4], north-up.
    fn image() -> RasterImage {
        let gt = GeoTransform::new(0.0, 4.0, 1.0, -1.0).unwrap();
        let data = Array2::from_shape_fn((4, 4), |(r, c)| (r * 4 + c) as f64);
        RasterImage::single_band(Band::new("spi3", data).unwrap(), gt, Crs::WGS84).unwrap()
    }

    #[test]
    fn ring_needs_three_points() {
        assert!(matches!(
            StudyArea::from_ring(&[(0.0, 0.0), (1.0, 0.0)]),
            Err(GridError::InvalidRing { n_points: 2 })
        ));
    }

    #[test]
    fn contains_point_inside_and_outside() {
        let area = StudyArea::from_ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]).unwrap();
        assert!(area.contains_point(1.0, 1.0));
        assert!(!area.contains_point(3.0, 1.0));
    }

    #[test]
    fn bounding_box_spans_ring() {
        let area = StudyArea::from_ring(&[(1.0, 1.0), (3.0, 1.0), (3.0, 2.0), (1.0, 2.0)]).unwrap();
        let bbox = area.bounding_box().unwrap();
        assert_eq!(bbox.min().x, 1.0);
        assert_eq!(bbox.max().x, 3.0);
        assert_eq!(bbox.min().y, 1.0);
        assert_eq!(bbox.max().y, 2.0);
    }

    #[test]
    fn mask_keeps_inside_nans_outside() {
        // Covers the lower-left 2x2 block of pixel centers.
        let area = StudyArea::from_ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]).unwrap();
        let masked = area.mask(&image()).unwrap();
        let data = masked.data();

        // Rows 2..4 and cols 0..2 have centers inside [0,2]x[0,2].
        for row in 0..4 {
            for col in 0..4 {
                let inside = row >= 2 && col < 2;
                assert_eq!(data[[row, col]].is_nan(), !inside, "pixel ({row},{col})");
            }
        }
        assert_eq!(masked.band_name(), "spi3");
    }
}
