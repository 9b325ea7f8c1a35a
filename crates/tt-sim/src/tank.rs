//! Scalar tank model driven by a heater schedule.

use crate::error::{SimError, SimResult};
use crate::model::TransientModel;
use tt_model::{HeaterSchedule, TankParams};

/// Lumped tank model: one temperature state, heater power as input.
///
/// The heater power is latched once per grid interval from the schedule value
/// at the interval end, then held constant across the whole sub-interval:
/// a forcing change takes effect at the start of the step that lands on it.
#[derive(Clone, Debug)]
pub struct TankModel {
    params: TankParams,
    schedule: HeaterSchedule,
    initial_temp_c: f64,
    held_power_w: f64,
}

impl TankModel {
    /// Create a tank model with its forcing schedule and initial temperature.
    pub fn new(
        params: TankParams,
        schedule: HeaterSchedule,
        initial_temp_c: f64,
    ) -> SimResult<Self> {
        if !initial_temp_c.is_finite() {
            return Err(SimError::InvalidArg {
                what: "initial_temp_c must be finite",
            });
        }
        let held_power_w = schedule.power_at(0.0);
        Ok(Self {
            params,
            schedule,
            initial_temp_c,
            held_power_w,
        })
    }

    pub fn params(&self) -> &TankParams {
        &self.params
    }

    pub fn schedule(&self) -> &HeaterSchedule {
        &self.schedule
    }

    /// Heater power currently held for integration (W).
    pub fn held_power_w(&self) -> f64 {
        self.held_power_w
    }
}

impl TransientModel for TankModel {
    type State = f64;

    fn initial_state(&self) -> f64 {
        self.initial_temp_c
    }

    fn prepare_step(&mut self, _t_start_s: f64, t_end_s: f64) -> SimResult<()> {
        // Interval-end convention: the power that applies across the whole
        // sub-interval is the schedule value at its end.
        self.held_power_w = self.schedule.power_at(t_end_s);
        Ok(())
    }

    fn rhs(&mut self, _t: f64, x: &f64) -> SimResult<f64> {
        if !x.is_finite() {
            return Err(SimError::NonPhysical {
                what: "tank temperature is non-finite",
            });
        }
        Ok(self.params.dtemp_dt(*x, self.held_power_w))
    }

    fn add(&self, a: &f64, b: &f64) -> f64 {
        a + b
    }

    fn scale(&self, a: &f64, scale: f64) -> f64 {
        a * scale
    }
}
