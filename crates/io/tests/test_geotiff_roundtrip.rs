//! Integration tests for the native GeoTIFF reader and writer.
//!
//! Validates that rasters survive a write/read cycle with their grid
//! geometry and CRS intact, and that the export guards fire before any
//! file is produced.

use ndarray::Array2;
use sirocco_grid::{Band, Crs, GeoTransform, RasterImage};
use sirocco_io::{IoError, read_geotiff, write_geotiff};
use tempfile::tempdir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn transform() -> GeoTransform {
    GeoTransform::new(66.5, 42.25, 0.05, -0.05).unwrap()
}

/// 3x4 composite with a value ramp and one NaN hole.
fn fixture_image() -> RasterImage {
    let mut data = Array2::from_shape_fn((3, 4), |(row, col)| (row * 4 + col) as f64 * 0.25 - 1.0);
    data[[1, 2]] = f64::NAN;
    RasterImage::single_band(Band::new("spi3", data).unwrap(), transform(), Crs::WGS84).unwrap()
}

// ---------------------------------------------------------------------------
// Round trip
// ---------------------------------------------------------------------------

#[test]
fn roundtrip_preserves_values_at_f32_precision() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("composite.tif");
    let image = fixture_image();

    write_geotiff(&image, &path, 1_000_000).unwrap();
    let loaded = read_geotiff(&path, "spi3").unwrap();

    assert_eq!(loaded.shape(), (3, 4));
    assert_eq!(loaded.band_name(), "spi3");
    for ((row, col), &original) in image.data().indexed_iter() {
        let restored = loaded.data()[[row, col]];
        if original.is_nan() {
            assert!(restored.is_nan(), "({row}, {col}) lost its NaN");
        } else {
            assert_eq!(restored, f64::from(original as f32), "({row}, {col})");
        }
    }
}

#[test]
fn roundtrip_preserves_grid_geometry_and_crs() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("georef.tif");

    write_geotiff(&fixture_image(), &path, 1_000_000).unwrap();
    let loaded = read_geotiff(&path, "spi3").unwrap();

    let restored = loaded.transform();
    assert_eq!(restored.origin_x(), 66.5);
    assert_eq!(restored.origin_y(), 42.25);
    assert_eq!(restored.pixel_width(), 0.05);
    assert_eq!(restored.pixel_height(), -0.05);
    assert_eq!(loaded.crs(), Crs::WGS84);
}

// ---------------------------------------------------------------------------
// Export guards
// ---------------------------------------------------------------------------

#[test]
fn over_cap_exports_are_refused_before_writing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("huge.tif");

    let err = write_geotiff(&fixture_image(), &path, 11).unwrap_err();
    match err {
        IoError::ExportTooLarge { pixels, max_pixels } => {
            assert_eq!(pixels, 12);
            assert_eq!(max_pixels, 11);
        }
        other => panic!("expected ExportTooLarge, got {other}"),
    }
    assert!(!path.exists(), "refused export must leave no file behind");
}

#[test]
fn multi_band_images_are_refused() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("multi.tif");

    let mut image = fixture_image();
    image
        .push_band(Band::new("extra", Array2::from_elem((3, 4), 1.0)).unwrap())
        .unwrap();

    assert!(matches!(
        write_geotiff(&image, &path, 1_000_000),
        Err(IoError::UnsupportedBandCount { bands: 2 })
    ));
}

// ---------------------------------------------------------------------------
// Reader defects
// ---------------------------------------------------------------------------

#[test]
fn missing_files_are_reported_by_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.tif");

    let err = read_geotiff(&path, "spi3").unwrap_err();
    assert!(matches!(err, IoError::FileNotFound { .. }));
    assert!(err.to_string().contains("nope.tif"));
}

#[test]
fn plain_tiffs_without_geo_tags_are_rejected() {
    use tiff::encoder::TiffEncoder;
    use tiff::encoder::colortype::Gray32Float;

    let dir = tempdir().unwrap();
    let path = dir.path().join("plain.tif");
    {
        let file = std::fs::File::create(&path).unwrap();
        let mut encoder = TiffEncoder::new(file).unwrap();
        encoder
            .write_image::<Gray32Float>(2, 2, &[0.0_f32, 1.0, 2.0, 3.0])
            .unwrap();
    }

    assert!(matches!(
        read_geotiff(&path, "spi3"),
        Err(IoError::MissingGeoReference { .. })
    ));
}
