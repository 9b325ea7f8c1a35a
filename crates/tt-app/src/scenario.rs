//! Scenario schema: the full parameter set of one simulation run.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tt_core::units::{celsius, j_per_kg_k, kg_per_m3, m3, w, w_per_k};
use tt_model::{HeaterSchedule, TankParams, TimeGrid};

/// One heated-tank scenario. Every field has a default matching the
/// reference run, so a partial (or empty) YAML file is a valid scenario.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Scenario {
    pub name: String,
    /// Heater power at full output (W)
    pub heater_full_power_w: f64,
    /// Heat loss coefficient to ambient (W/°C)
    pub loss_coeff_w_per_c: f64,
    /// Specific heat of the water (J/kg°C)
    pub specific_heat_j_per_kg_c: f64,
    /// Water density (kg/m³)
    pub density_kg_m3: f64,
    /// Tank water volume (m³)
    pub volume_m3: f64,
    /// Ambient temperature (°C)
    pub ambient_temp_c: f64,
    /// Initial water temperature (°C)
    pub initial_temp_c: f64,
    /// Number of grid samples (≥ 2)
    pub sample_count: usize,
    /// Simulated duration (s)
    pub duration_s: f64,
    /// Heater off-window start (s); both bounds present or both absent
    pub heater_off_start_s: Option<f64>,
    /// Heater off-window end (s), exclusive
    pub heater_off_end_s: Option<f64>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            name: "Heated water tank".to_string(),
            heater_full_power_w: 5000.0,
            loss_coeff_w_per_c: 10.0,
            specific_heat_j_per_kg_c: 4181.0,
            density_kg_m3: 1000.0,
            volume_m3: 0.5,
            ambient_temp_c: 25.0,
            initial_temp_c: 25.0,
            sample_count: 300,
            duration_s: 1800.0,
            heater_off_start_s: Some(15.0 * 60.0),
            heater_off_end_s: Some(20.0 * 60.0),
        }
    }
}

impl Scenario {
    /// Build validated tank parameters from the scenario values.
    pub fn tank_params(&self) -> AppResult<TankParams> {
        let params = TankParams::new(
            w(self.heater_full_power_w),
            w_per_k(self.loss_coeff_w_per_c),
            j_per_kg_k(self.specific_heat_j_per_kg_c),
            kg_per_m3(self.density_kg_m3),
            m3(self.volume_m3),
            celsius(self.ambient_temp_c),
        )?;
        Ok(params)
    }

    /// Build the heater schedule from the scenario values.
    pub fn heater_schedule(&self) -> AppResult<HeaterSchedule> {
        let schedule = match (self.heater_off_start_s, self.heater_off_end_s) {
            (Some(start), Some(end)) => {
                HeaterSchedule::with_off_window(self.heater_full_power_w, start, end)?
            }
            (None, None) => HeaterSchedule::always_on(self.heater_full_power_w)?,
            _ => {
                return Err(AppError::Validation(
                    "heater_off_start_s and heater_off_end_s must be given together".to_string(),
                ));
            }
        };
        Ok(schedule)
    }

    /// Build the uniform time grid from the scenario values.
    pub fn time_grid(&self) -> AppResult<TimeGrid> {
        Ok(TimeGrid::uniform(self.sample_count, self.duration_s)?)
    }

    /// Check every field without running anything.
    pub fn validate(&self) -> AppResult<()> {
        if !self.initial_temp_c.is_finite() {
            return Err(AppError::Validation(
                "initial_temp_c must be finite".to_string(),
            ));
        }
        self.tank_params()?;
        self.heater_schedule()?;
        self.time_grid()?;
        Ok(())
    }

    /// Serialize to YAML (used by `defaults` and scenario saving).
    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Load a scenario from a YAML file.
pub fn load_scenario(path: &Path) -> AppResult<Scenario> {
    let text = std::fs::read_to_string(path).map_err(|source| AppError::ScenarioFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let scenario: Scenario = serde_yaml::from_str(&text)?;
    Ok(scenario)
}
