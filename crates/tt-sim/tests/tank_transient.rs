//! Integration tests for the heated-tank transient run.

use tt_core::units::{celsius, j_per_kg_k, kg_per_m3, m3, w, w_per_k};
use tt_model::{HeaterSchedule, TankParams, TimeGrid};
use tt_sim::{IntegratorType, TankModel, run_sim};

const FULL_POWER_W: f64 = 5000.0;
const OFF_START_S: f64 = 900.0;
const OFF_END_S: f64 = 1200.0;

fn reference_params() -> TankParams {
    TankParams::new(
        w(FULL_POWER_W),
        w_per_k(10.0),
        j_per_kg_k(4181.0),
        kg_per_m3(1000.0),
        m3(0.5),
        celsius(25.0),
    )
    .unwrap()
}

fn reference_grid() -> TimeGrid {
    TimeGrid::uniform(300, 1800.0).unwrap()
}

#[test]
fn initial_sample_is_exact() {
    let params = reference_params();
    let schedule = HeaterSchedule::with_off_window(FULL_POWER_W, OFF_START_S, OFF_END_S).unwrap();
    let mut model = TankModel::new(params, schedule, 25.0).unwrap();
    let record = run_sim(&mut model, &reference_grid(), IntegratorType::RK4).unwrap();

    assert_eq!(record.state[0], 25.0);
    assert_eq!(record.time_s[0], 0.0);
    assert_eq!(record.state.len(), 300);
}

#[test]
fn every_step_matches_closed_form() {
    let params = reference_params();
    let schedule = HeaterSchedule::with_off_window(FULL_POWER_W, OFF_START_S, OFF_END_S).unwrap();
    let grid = reference_grid();
    let mut model = TankModel::new(params.clone(), schedule.clone(), 25.0).unwrap();
    let record = run_sim(&mut model, &grid, IntegratorType::RK4).unwrap();

    // The equation is linear for fixed power, so each sub-interval has an
    // exact exponential solution; RK4 at dt/tau ~ 3e-5 should sit on it.
    for i in 1..grid.len() {
        let dt = grid[i] - grid[i - 1];
        let power = schedule.power_at(grid[i]);
        let exact = params.exact_step(record.state[i - 1], power, dt);
        assert!(
            (record.state[i] - exact).abs() < 1e-9,
            "sample {i}: got {}, closed form {exact}",
            record.state[i]
        );
    }
}

#[test]
fn reference_scenario_phases() {
    let params = reference_params();
    let schedule = HeaterSchedule::with_off_window(FULL_POWER_W, OFF_START_S, OFF_END_S).unwrap();
    let grid = reference_grid();
    let mut model = TankModel::new(params, schedule, 25.0).unwrap();
    let record = run_sim(&mut model, &grid, IntegratorType::RK4).unwrap();

    // Heating before the off-window, cooling inside it, heating after;
    // the applied power for a step is the schedule value at its end sample.
    for i in 1..grid.len() {
        let t = grid[i];
        if (OFF_START_S..OFF_END_S).contains(&t) {
            assert!(
                record.state[i] < record.state[i - 1],
                "expected cooling at t={t}"
            );
        } else {
            assert!(
                record.state[i] > record.state[i - 1],
                "expected heating at t={t}"
            );
        }
    }

    // 30 minutes is nowhere near the 525 °C heater-on equilibrium.
    let max = record.state.iter().cloned().fold(f64::MIN, f64::max);
    assert!(max < 525.0);
}

#[test]
fn cooling_phase_stays_above_ambient() {
    let params = reference_params();
    let ambient = params.ambient_temp_c;
    let schedule = HeaterSchedule::with_off_window(FULL_POWER_W, OFF_START_S, OFF_END_S).unwrap();
    let grid = reference_grid();
    let mut model = TankModel::new(params, schedule, 25.0).unwrap();
    let record = run_sim(&mut model, &grid, IntegratorType::RK4).unwrap();

    for (i, &t) in grid.times_s().iter().enumerate() {
        if (OFF_START_S..OFF_END_S).contains(&t) {
            assert!(record.state[i] > ambient, "t={t} fell below ambient");
        }
    }
}

#[test]
fn always_on_heating_is_monotonic_and_bounded() {
    let params = reference_params();
    let equilibrium = params.equilibrium_temp_c(FULL_POWER_W);
    let schedule = HeaterSchedule::always_on(FULL_POWER_W).unwrap();
    let grid = reference_grid();
    let mut model = TankModel::new(params, schedule, 25.0).unwrap();
    let record = run_sim(&mut model, &grid, IntegratorType::RK4).unwrap();

    for i in 1..record.state.len() {
        assert!(record.state[i] > record.state[i - 1]);
        assert!(record.state[i] < equilibrium);
    }
}

#[test]
fn identical_inputs_give_identical_traces() {
    let params = reference_params();
    let schedule = HeaterSchedule::with_off_window(FULL_POWER_W, OFF_START_S, OFF_END_S).unwrap();
    let grid = reference_grid();

    let mut model_a = TankModel::new(params.clone(), schedule.clone(), 25.0).unwrap();
    let mut model_b = TankModel::new(params, schedule, 25.0).unwrap();

    let a = run_sim(&mut model_a, &grid, IntegratorType::RK4).unwrap();
    let b = run_sim(&mut model_b, &grid, IntegratorType::RK4).unwrap();

    assert_eq!(a.state, b.state);
    assert_eq!(a.time_s, b.time_s);
}

#[test]
fn euler_tracks_rk4_within_plotting_precision() {
    let params = reference_params();
    let schedule = HeaterSchedule::with_off_window(FULL_POWER_W, OFF_START_S, OFF_END_S).unwrap();
    let grid = reference_grid();

    let mut model_a = TankModel::new(params.clone(), schedule.clone(), 25.0).unwrap();
    let mut model_b = TankModel::new(params, schedule, 25.0).unwrap();

    let rk4 = run_sim(&mut model_a, &grid, IntegratorType::RK4).unwrap();
    let euler = run_sim(&mut model_b, &grid, IntegratorType::ForwardEuler).unwrap();

    for (a, b) in rk4.state.iter().zip(euler.state.iter()) {
        assert!((a - b).abs() < 0.01);
    }
}
