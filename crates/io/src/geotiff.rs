//! Native GeoTIFF reading and writing via the `tiff` crate.
//!
//! Handles the single-band float rasters this pipeline works with, plus
//! the ModelPixelScale, ModelTiepoint, and GeoKeyDirectory tags needed to
//! georeference them. Values are stored as 32-bit floats on write.

use std::fs::File;
use std::path::Path;

use ndarray::Array2;
use sirocco_grid::{Band, Crs, GeoTransform, RasterImage};
use tiff::decoder::{Decoder, DecodingResult};
use tiff::encoder::TiffEncoder;
use tiff::encoder::colortype::Gray32Float;
use tiff::tags::Tag;

use crate::error::IoError;

const MODEL_PIXEL_SCALE: Tag = Tag::ModelPixelScaleTag;
const MODEL_TIEPOINT: Tag = Tag::ModelTiepointTag;
const GEO_KEY_DIRECTORY: Tag = Tag::GeoKeyDirectoryTag;
const GEOGRAPHIC_TYPE_KEY: u32 = 2048;
const PROJECTED_TYPE_KEY: u32 = 3072;

/// Default export cap, in pixels.
pub const DEFAULT_MAX_PIXELS: u64 = 10_000_000_000_000;

/// Reads a single-band GeoTIFF into a raster carrying `band` as its band
/// name.
///
/// Integer and float sample formats are widened to `f64`. The file must
/// carry pixel-scale and tiepoint tags; a GeoKeyDirectory EPSG code is
/// honored when present and defaults to WGS84 otherwise.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`], [`IoError::UnsupportedSampleFormat`],
/// or [`IoError::MissingGeoReference`] for the corresponding defects, and
/// wraps decoder failures as [`IoError::Tiff`].
pub fn read_geotiff(path: &Path, band: &str) -> Result<RasterImage, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let mut decoder = Decoder::new(file)?;
    let (width, height) = decoder.dimensions()?;
    let rows = height as usize;
    let cols = width as usize;

    let data: Vec<f64> = match decoder.read_image()? {
        DecodingResult::F64(buf) => buf,
        DecodingResult::F32(buf) => buf.iter().map(|&v| f64::from(v)).collect(),
        DecodingResult::U8(buf) => buf.iter().map(|&v| f64::from(v)).collect(),
        DecodingResult::U16(buf) => buf.iter().map(|&v| f64::from(v)).collect(),
        DecodingResult::U32(buf) => buf.iter().map(|&v| f64::from(v)).collect(),
        DecodingResult::I8(buf) => buf.iter().map(|&v| f64::from(v)).collect(),
        DecodingResult::I16(buf) => buf.iter().map(|&v| f64::from(v)).collect(),
        DecodingResult::I32(buf) => buf.iter().map(|&v| f64::from(v)).collect(),
        _ => {
            return Err(IoError::UnsupportedSampleFormat {
                path: path.to_path_buf(),
            });
        }
    };

    if data.len() != rows * cols {
        return Err(IoError::Tiff {
            reason: format!(
                "{} holds {} samples for a {}x{} image",
                path.display(),
                data.len(),
                rows,
                cols
            ),
        });
    }
    let array = Array2::from_shape_vec((rows, cols), data).map_err(|e| IoError::Tiff {
        reason: e.to_string(),
    })?;

    let transform = read_transform(&mut decoder, path)?;
    let crs = read_crs(&mut decoder).unwrap_or(Crs::WGS84);

    Ok(RasterImage::single_band(
        Band::new(band, array)?,
        transform,
        crs,
    )?)
}

/// Writes a single-band raster as a Gray32Float GeoTIFF.
///
/// The pixel count is checked against `max_pixels` before anything touches
/// the filesystem, so a refused export leaves no partial file behind.
///
/// # Errors
///
/// Returns [`IoError::ExportTooLarge`] above the cap and
/// [`IoError::UnsupportedBandCount`] for multi-band images.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn write_geotiff(image: &RasterImage, path: &Path, max_pixels: u64) -> Result<(), IoError> {
    let bands = image.bands().len();
    if bands != 1 {
        return Err(IoError::UnsupportedBandCount { bands });
    }

    let (rows, cols) = image.shape();
    let pixels = rows as u64 * cols as u64;
    if pixels > max_pixels {
        return Err(IoError::ExportTooLarge { pixels, max_pixels });
    }

    let file = File::create(path)?;
    let mut encoder = TiffEncoder::new(file)?;
    let mut out = encoder.new_image::<Gray32Float>(cols as u32, rows as u32)?;

    let transform = image.transform();
    let scale = [
        transform.pixel_width(),
        transform.pixel_height().abs(),
        0.0,
    ];
    out.encoder()
        .write_tag(MODEL_PIXEL_SCALE, &scale[..])?;

    let tiepoint = [
        0.0,
        0.0,
        0.0,
        transform.origin_x(),
        transform.origin_y(),
        0.0,
    ];
    out.encoder()
        .write_tag(MODEL_TIEPOINT, &tiepoint[..])?;

    let epsg = image.crs().epsg() as u16;
    let geokeys: Vec<u16> = vec![
        1, 1, 0, 3, // version 1.1.0, 3 keys
        1024, 0, 1, 2, // GTModelTypeGeoKey = geographic
        1025, 0, 1, 1, // GTRasterTypeGeoKey = pixel-is-area
        2048, 0, 1, epsg, // GeographicTypeGeoKey
    ];
    out.encoder()
        .write_tag(GEO_KEY_DIRECTORY, geokeys.as_slice())?;

    let data: Vec<f32> = image.data().iter().map(|&v| v as f32).collect();
    out.write_data(&data)?;

    tracing::info!(rows, cols, band = image.band_name(), "raster written");
    Ok(())
}

fn read_transform(decoder: &mut Decoder<File>, path: &Path) -> Result<GeoTransform, IoError> {
    let missing = || IoError::MissingGeoReference {
        path: path.to_path_buf(),
    };

    let scale = decoder
        .get_tag_f64_vec(MODEL_PIXEL_SCALE)
        .map_err(|_| missing())?;
    let tiepoint = decoder
        .get_tag_f64_vec(MODEL_TIEPOINT)
        .map_err(|_| missing())?;
    if scale.len() < 2 || tiepoint.len() < 6 {
        return Err(missing());
    }

    // Tiepoint is [I, J, K, X, Y, Z]; scale is [ScaleX, ScaleY, ScaleZ].
    let origin_x = tiepoint[3] - tiepoint[0] * scale[0];
    let origin_y = tiepoint[4] + tiepoint[1] * scale[1];
    Ok(GeoTransform::new(origin_x, origin_y, scale[0], -scale[1])?)
}

fn read_crs(decoder: &mut Decoder<File>) -> Option<Crs> {
    // GeoKeyDirectory: [version, revision, minor, count, then one
    // (id, location, count, value) quad per key].
    let keys = decoder
        .get_tag_u32_vec(GEO_KEY_DIRECTORY)
        .ok()?;
    if keys.len() < 4 {
        return None;
    }

    let num_keys = keys[3] as usize;
    for i in 0..num_keys {
        let base = 4 + i * 4;
        if base + 4 > keys.len() {
            break;
        }
        let key_id = keys[base];
        let value = keys[base + 3];
        if (key_id == GEOGRAPHIC_TYPE_KEY || key_id == PROJECTED_TYPE_KEY) && value > 0 {
            return Some(Crs::from_epsg(value));
        }
    }
    None
}
