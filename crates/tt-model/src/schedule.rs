//! Heater forcing schedule.
//!
//! The heater is a piecewise-constant input: full power everywhere except an
//! optional half-open off-window [start, end). Sampled onto a time grid the
//! schedule yields one power value per grid point, each either 0 or the full
//! power (zero-order hold between samples).

use crate::error::{ModelError, ModelResult};
use crate::grid::TimeGrid;
use tt_core::ensure_positive;

/// Piecewise-constant heater power schedule.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaterSchedule {
    full_power_w: f64,
    off_window_s: Option<(f64, f64)>,
}

impl HeaterSchedule {
    /// Heater at full power for the whole run.
    pub fn always_on(full_power_w: f64) -> ModelResult<Self> {
        let full_power_w = ensure_positive(full_power_w, "full_power_w")?;
        Ok(Self {
            full_power_w,
            off_window_s: None,
        })
    }

    /// Heater at full power except during [off_start_s, off_end_s).
    pub fn with_off_window(full_power_w: f64, off_start_s: f64, off_end_s: f64) -> ModelResult<Self> {
        let full_power_w = ensure_positive(full_power_w, "full_power_w")?;
        if !off_start_s.is_finite() || !off_end_s.is_finite() || off_start_s < 0.0 {
            return Err(ModelError::InvalidArg {
                what: "off-window bounds must be finite and non-negative",
            });
        }
        if off_end_s <= off_start_s {
            return Err(ModelError::InvalidArg {
                what: "off-window end must be after its start",
            });
        }
        Ok(Self {
            full_power_w,
            off_window_s: Some((off_start_s, off_end_s)),
        })
    }

    pub fn full_power_w(&self) -> f64 {
        self.full_power_w
    }

    pub fn off_window_s(&self) -> Option<(f64, f64)> {
        self.off_window_s
    }

    /// Instantaneous heater power (W) at time `t_s`.
    ///
    /// The off-window is half-open: power is zero at the window start and
    /// back at full power exactly at the window end.
    pub fn power_at(&self, t_s: f64) -> f64 {
        match self.off_window_s {
            Some((start, end)) if t_s >= start && t_s < end => 0.0,
            _ => self.full_power_w,
        }
    }

    /// Sample the schedule onto a time grid, one power value per grid point.
    pub fn sample(&self, grid: &TimeGrid) -> Vec<f64> {
        grid.times_s().iter().map(|&t| self.power_at(t)).collect()
    }
}
