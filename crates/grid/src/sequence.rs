//! Time-ordered raster sequences.

use crate::error::GridError;
use crate::raster::RasterImage;

/// An immutable, time-ascending collection of raster images on one grid.
///
/// Every member carries a timestamp; timestamps are strictly ascending
/// with no duplicates, and all members share the same shape, transform,
/// and CRS. Sequences are produced whole by one stage and consumed by
/// reference downstream, never mutated in place.
#[derive(Debug, Clone)]
pub struct RasterSequence {
    images: Vec<RasterImage>,
}

impl RasterSequence {
    /// Validates ordering and grid uniformity and wraps the images.
    pub fn new(images: Vec<RasterImage>) -> Result<Self, GridError> {
        for (index, image) in images.iter().enumerate() {
            if image.timestamp().is_none() {
                return Err(GridError::MissingTimestamp { index });
            }
            if index > 0 {
                let prev = &images[index - 1];
                if image.timestamp() <= prev.timestamp() {
                    return Err(GridError::UnorderedTimestamps { index });
                }
                if image.shape() != prev.shape()
                    || image.transform() != prev.transform()
                    || image.crs() != prev.crs()
                {
                    return Err(GridError::NonUniformGrid { index });
                }
            }
        }
        Ok(Self { images })
    }

    /// An empty sequence, as returned by a store with no coverage.
    pub fn empty() -> Self {
        Self { images: Vec::new() }
    }

    /// Number of images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// True when the sequence holds no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// All images, time-ascending.
    pub fn images(&self) -> &[RasterImage] {
        &self.images
    }

    /// Image at position `index`.
    pub fn get(&self, index: usize) -> Option<&RasterImage> {
        self.images.get(index)
    }

    /// First image, if any.
    pub fn first(&self) -> Option<&RasterImage> {
        self.images.first()
    }

    /// Last image, if any.
    pub fn last(&self) -> Option<&RasterImage> {
        self.images.last()
    }

    /// Iterator over the images in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, RasterImage> {
        self.images.iter()
    }

    /// Consumes the sequence, yielding the owned images.
    pub fn into_images(self) -> Vec<RasterImage> {
        self.images
    }
}

impl<'a> IntoIterator for &'a RasterSequence {
    type Item = &'a RasterImage;
    type IntoIter = std::slice::Iter<'a, RasterImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}
