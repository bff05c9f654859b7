//! # sirocco-calendar
//!
//! Pure date arithmetic over the civil calendar for the SPI pipeline.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["start, end dates"] -->|"MonthRange::new()"| B["MonthRange"]
//!     B -->|".anchors()"| C["first-of-month anchors"]
//!     C -->|"window_bounds()"| D["DateInterval"]
//!     D -->|".contains()"| E["timestamp filter"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use sirocco_calendar::{MonthRange, window_bounds};
//!
//! let start = NaiveDate::from_ymd_opt(2005, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
//! let range = MonthRange::new(start, end)?;
//! assert_eq!(range.n_months(), 240);
//!
//! // Aggregation window for one anchor: [M - 2 months, M + 1 day)
//! let window = window_bounds(range.anchors()[2], 3)?;
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `months` | Month anchors, inclusive counting, window arithmetic |
//! | `interval` | Half-open date intervals |
//! | `error` | Error types |

mod error;
mod interval;
mod months;

pub use error::CalendarError;
pub use interval::DateInterval;
pub use months::{MonthRange, month_floor, months_inclusive, window_bounds};
