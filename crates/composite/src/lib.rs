//! # sirocco-composite
//!
//! Collapses a monthly SPI sequence into the summary rasters used for
//! sampling and export: per-period means, the combined drought composite,
//! and the all-time extremes.
//!
//! ```mermaid
//! flowchart LR
//!     S[spi3 sequence] --> P[filter_period]
//!     P --> M[period_mean]
//!     P --> C[combined_composite]
//!     S --> E[alltime_extremes]
//!     C -->|clip| A[study area]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use sirocco_composite::{DroughtPeriod, combined_composite};
//!
//! let periods = vec![
//!     DroughtPeriod::new("2005 Drought", start, end)?,
//! ];
//! let composite = combined_composite(&spi, &periods, &area)?;
//! ```

mod composite;
mod error;
mod period;

pub use composite::{MAX_BAND, MIN_BAND, alltime_extremes, combined_composite, period_mean};
pub use error::CompositeError;
pub use period::{DroughtPeriod, filter_period};
