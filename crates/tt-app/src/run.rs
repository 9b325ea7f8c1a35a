//! Run execution and series export.

use crate::error::AppResult;
use crate::scenario::Scenario;
use serde::Serialize;
use tt_sim::{IntegratorType, TankModel, run_sim};

/// Full output of one simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    /// Sample times (seconds)
    pub time_s: Vec<f64>,
    /// Sample times (minutes, plotting axis)
    pub time_min: Vec<f64>,
    /// Heater power at each sample (W)
    pub heater_power_w: Vec<f64>,
    /// Water temperature at each sample (°C)
    pub temp_c: Vec<f64>,
    pub summary: RunSummary,
}

/// Headline numbers for CLI reporting.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub samples: usize,
    pub duration_s: f64,
    pub ambient_temp_c: f64,
    /// Steady-state temperature with the heater at full power (°C)
    pub equilibrium_temp_c: f64,
    pub final_temp_c: f64,
    pub min_temp_c: f64,
    pub max_temp_c: f64,
}

/// Run one scenario end to end: build the model, integrate over the grid,
/// package the trace alongside the sampled forcing.
pub fn run_scenario(scenario: &Scenario, integrator: IntegratorType) -> AppResult<RunResult> {
    scenario.validate()?;

    let params = scenario.tank_params()?;
    let schedule = scenario.heater_schedule()?;
    let grid = scenario.time_grid()?;

    tracing::info!(
        name = %scenario.name,
        samples = scenario.sample_count,
        duration_s = scenario.duration_s,
        "running scenario"
    );

    let heater_power_w = schedule.sample(&grid);
    let equilibrium_temp_c = params.equilibrium_temp_c(scenario.heater_full_power_w);

    let mut model = TankModel::new(params, schedule, scenario.initial_temp_c)?;
    let record = run_sim(&mut model, &grid, integrator)?;

    let min_temp_c = record.state.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_temp_c = record
        .state
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max);
    let final_temp_c = record.state[record.state.len() - 1];

    Ok(RunResult {
        time_min: grid.times_min(),
        time_s: record.time_s,
        heater_power_w,
        temp_c: record.state,
        summary: RunSummary {
            samples: scenario.sample_count,
            duration_s: scenario.duration_s,
            ambient_temp_c: scenario.ambient_temp_c,
            equilibrium_temp_c,
            final_temp_c,
            min_temp_c,
            max_temp_c,
        },
    })
}

/// Build a CSV of the run series: one row per sample.
pub fn to_csv(result: &RunResult) -> String {
    let mut csv = String::from("time_s,heater_power_w,temp_c\n");
    for i in 0..result.time_s.len() {
        csv.push_str(&format!(
            "{},{},{}\n",
            result.time_s[i], result.heater_power_w[i], result.temp_c[i]
        ));
    }
    csv
}

/// Serialize the full run to pretty JSON.
pub fn to_json(result: &RunResult) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}
