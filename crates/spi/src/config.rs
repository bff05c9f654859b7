//! Configuration for the aggregation and standardization stages.

use crate::error::SpiError;

/// Default aggregation window length in months (SPI-3).
pub const DEFAULT_WINDOW_MONTHS: u32 = 3;

/// Default divisor substituted where the climatological standard deviation
/// is exactly zero.
pub const DEFAULT_STD_FLOOR: f64 = 0.001;

/// Tuning knobs shared by [`aggregate_monthly`] and [`standardize`].
///
/// | Field | Default | Meaning |
/// |-------|---------|---------|
/// | `window_months` | 3 | Length of the backward window summed per month |
/// | `std_floor` | 0.001 | Divisor used where the per-pixel std is zero |
///
/// [`aggregate_monthly`]: crate::aggregate_monthly
/// [`standardize`]: crate::standardize
#[derive(Debug, Clone, PartialEq)]
pub struct SpiConfig {
    window_months: u32,
    std_floor: f64,
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self {
            window_months: DEFAULT_WINDOW_MONTHS,
            std_floor: DEFAULT_STD_FLOOR,
        }
    }
}

impl SpiConfig {
    /// Creates a configuration with the SPI-3 defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the aggregation window length in months.
    pub fn with_window_months(mut self, window_months: u32) -> Self {
        self.window_months = window_months;
        self
    }

    /// Sets the zero-std divisor substitute.
    pub fn with_std_floor(mut self, std_floor: f64) -> Self {
        self.std_floor = std_floor;
        self
    }

    /// Window length in months.
    pub fn window_months(&self) -> u32 {
        self.window_months
    }

    /// Divisor substituted where the climatological std is zero.
    pub fn std_floor(&self) -> f64 {
        self.std_floor
    }

    /// Checks that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`SpiError::InvalidConfig`] when the window is zero months
    /// long or the std floor is not a positive finite number.
    pub fn validate(&self) -> Result<(), SpiError> {
        if self.window_months == 0 {
            return Err(SpiError::InvalidConfig {
                reason: "window_months must be >= 1".to_string(),
            });
        }
        if !self.std_floor.is_finite() || self.std_floor <= 0.0 {
            return Err(SpiError::InvalidConfig {
                reason: format!(
                    "std_floor must be finite and positive, got {}",
                    self.std_floor
                ),
            });
        }
        Ok(())
    }
}
