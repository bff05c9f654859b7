//! The archive boundary: fetching daily rasters by band and date range.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use sirocco_grid::{RasterImage, RasterSequence};

use crate::error::IoError;
use crate::geotiff::read_geotiff;

/// Source of timestamped rasters.
///
/// `fetch` returns the images whose timestamp falls in `[start, end]`,
/// ordered ascending. An unavailable range yields an empty sequence, not
/// an error; coverage checks belong to the caller.
pub trait RasterStore {
    /// Fetches one band's images over an inclusive date range.
    fn fetch(
        &self,
        band: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RasterSequence, IoError>;
}

/// In-memory store over a pre-built sequence. Used by tests and callers
/// that assemble their own rasters.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    images: Vec<RasterImage>,
}

impl MemoryStore {
    /// Wraps an already-validated sequence.
    pub fn new(sequence: RasterSequence) -> Self {
        Self {
            images: sequence.into_images(),
        }
    }
}

impl RasterStore for MemoryStore {
    fn fetch(
        &self,
        band: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RasterSequence, IoError> {
        let matched: Vec<RasterImage> = self
            .images
            .iter()
            .filter(|image| {
                image.band(band).is_some()
                    && image
                        .timestamp()
                        .is_some_and(|ts| start <= ts && ts <= end)
            })
            .cloned()
            .collect();
        Ok(RasterSequence::new(matched)?)
    }
}

/// Store over a directory of `<prefix>.YYYY.MM.DD.tif` files, the layout
/// daily CHIRPS archives ship in.
///
/// The directory is indexed once at open time; files whose names do not
/// match the pattern are skipped. Rasters are decoded lazily per fetch.
#[derive(Debug)]
pub struct DirectoryStore {
    band: String,
    index: BTreeMap<NaiveDate, PathBuf>,
}

impl DirectoryStore {
    /// Indexes `directory` and binds the store to one band name.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::FileNotFound`] when the directory does not exist.
    #[tracing::instrument(skip_all, fields(directory = %directory.display()))]
    pub fn open(
        directory: &Path,
        prefix: &str,
        band: impl Into<String>,
    ) -> Result<Self, IoError> {
        if !directory.is_dir() {
            return Err(IoError::FileNotFound {
                path: directory.to_path_buf(),
            });
        }

        let mut index = BTreeMap::new();
        for entry in std::fs::read_dir(directory)? {
            let path = entry?.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            match parse_archive_date(name, prefix) {
                Some(date) => {
                    index.insert(date, path);
                }
                None => {
                    tracing::debug!(file = name, "skipping file outside the archive pattern");
                }
            }
        }

        tracing::info!(n_files = index.len(), "archive indexed");
        Ok(Self {
            band: band.into(),
            index,
        })
    }

    /// Number of indexed files.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the index matched no files at all.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Earliest indexed date.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.index.keys().next().copied()
    }

    /// Latest indexed date.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.index.keys().next_back().copied()
    }
}

impl RasterStore for DirectoryStore {
    fn fetch(
        &self,
        band: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RasterSequence, IoError> {
        if band != self.band {
            return Err(IoError::UnknownBand {
                band: band.to_string(),
            });
        }

        let mut images = Vec::new();
        for (&date, path) in self.index.range(start..=end) {
            let image = read_geotiff(path, &self.band)?;
            images.push(image.with_timestamp(date));
        }
        tracing::debug!(n_images = images.len(), %start, %end, "archive range decoded");
        Ok(RasterSequence::new(images)?)
    }
}

/// Parses `<prefix>.YYYY.MM.DD.tif` into its date. Anything else is `None`.
fn parse_archive_date(name: &str, prefix: &str) -> Option<NaiveDate> {
    let rest = name
        .strip_prefix(prefix)?
        .strip_prefix('.')?
        .strip_suffix(".tif")?;

    let mut parts = rest.split('.');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}
