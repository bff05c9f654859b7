//! # sirocco-sample
//!
//! Threshold-stratified random sampling of composite SPI rasters into
//! labelled point sets for downstream classifier training.
//!
//! ## Quick Start
//!
//! ```ignore
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use sirocco_sample::{DroughtClass, SampleConfig, stratified_sample};
//!
//! let classes = vec![
//!     DroughtClass::new(0, "severe", -0.4, -0.3)?,
//!     DroughtClass::new(1, "moderate", -0.3, -0.2)?,
//! ];
//! let mut rng = StdRng::seed_from_u64(42);
//! let set = stratified_sample(&composite, &area, &classes, &SampleConfig::new(), &mut rng)?;
//! println!("{} points, {} short classes", set.len(), set.shortfalls().len());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `class` | Half-open severity classes and list validation |
//! | `sample` | The stratified draw and its outputs |
//! | `error` | Error types |

mod class;
mod error;
mod sample;

pub use class::{DroughtClass, validate_classes};
pub use error::SampleError;
pub use sample::{
    ClassShortfall, DEFAULT_SAMPLES_PER_CLASS, Sample, SampleConfig, SampleSet, stratified_sample,
};
