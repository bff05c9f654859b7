//! Flat-table export of sampled points.

use std::path::Path;

use sirocco_sample::Sample;

use crate::error::IoError;

/// Writes samples as a CSV table with a header row.
///
/// Columns are `longitude,latitude,spi3,class_id`, one row per sample in
/// draw order.
#[tracing::instrument(skip_all, fields(path = %path.display(), n_samples = samples.len()))]
pub fn write_samples_csv(path: &Path, samples: &[Sample]) -> Result<(), IoError> {
    let mut writer = csv::Writer::from_path(path)?;
    if samples.is_empty() {
        // serde only emits the header with the first row.
        writer.write_record(["longitude", "latitude", "spi3", "class_id"])?;
    }
    for sample in samples {
        writer.serialize(sample)?;
    }
    writer.flush()?;
    tracing::info!("sample table written");
    Ok(())
}
