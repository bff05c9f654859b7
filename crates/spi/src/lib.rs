//! # sirocco-spi
//!
//! The analytic core of the drought pipeline: rolling monthly aggregation
//! of daily precipitation, per-pixel climatology estimation, and
//! standardization into SPI-3 rasters.
//!
//! ```mermaid
//! flowchart LR
//!     D[daily rasters] --> A[aggregate_monthly]
//!     A --> C[estimate_climatology]
//!     A --> S[standardize]
//!     C --> S
//!     S --> O[spi3 sequence]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use sirocco_calendar::MonthRange;
//! use sirocco_spi::{aggregate_monthly, estimate_climatology, standardize, SpiConfig};
//!
//! let config = SpiConfig::new();
//! let range = MonthRange::new(start, end)?;
//! let aggregated = aggregate_monthly(&daily, &range, &config)?;
//! let climatology = estimate_climatology(&aggregated)?;
//! let spi = standardize(&aggregated, &climatology, &config)?;
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `aggregate` | Backward rolling-window sums per calendar month |
//! | `climatology` | Per-pixel mean, std, max, min over the sequence |
//! | `transform` | `(value - mean) / std` with the zero-std floor |
//! | `config` | Window length and std floor knobs |
//! | `error` | Error types |

mod aggregate;
mod climatology;
mod config;
mod error;
mod transform;

pub use aggregate::aggregate_monthly;
pub use climatology::{Climatology, estimate_climatology};
pub use config::{DEFAULT_STD_FLOOR, DEFAULT_WINDOW_MONTHS, SpiConfig};
pub use error::SpiError;
pub use transform::{SPI_BAND, standardize};
