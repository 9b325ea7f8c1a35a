//! Simulation runner and result recording.

use crate::error::{SimError, SimResult};
use crate::integrator::{ForwardEuler, Integrator, RK4};
use crate::model::TransientModel;
use tt_model::TimeGrid;

/// Integrator selection for simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntegratorType {
    /// 4th-order Runge-Kutta (default, 4 rhs calls per step).
    #[default]
    RK4,
    /// Forward Euler (1st-order, 1 rhs call per step).
    ForwardEuler,
}

/// Record of simulation results, one entry per grid sample.
#[derive(Clone, Debug)]
pub struct SimRecord<S> {
    /// Sample times (seconds)
    pub time_s: Vec<f64>,
    /// State at each sample; state[0] is the initial state exactly
    pub state: Vec<S>,
}

/// Run a transient simulation over every interval of the time grid.
///
/// For each interval [t_{i-1}, t_i] the model latches its inputs via
/// `prepare_step`, the integrator advances from state[i-1], and the
/// end-of-interval state is recorded. The loop is strictly sequential:
/// each step's initial value is the previous step's result.
///
/// On integrator failure the run aborts with the failing sub-interval's
/// start time and entering state.
pub fn run_sim<M: TransientModel>(
    model: &mut M,
    grid: &TimeGrid,
    integrator: IntegratorType,
) -> SimResult<SimRecord<M::State>> {
    if grid.len() < 2 {
        return Err(SimError::InvalidArg {
            what: "time grid needs at least 2 samples",
        });
    }

    tracing::debug!(
        samples = grid.len(),
        t_end_s = grid.t_end_s(),
        ?integrator,
        "starting transient run"
    );

    let mut x = model.initial_state();

    let mut time_s = Vec::with_capacity(grid.len());
    let mut state = Vec::with_capacity(grid.len());
    time_s.push(grid[0]);
    state.push(x.clone());

    for i in 1..grid.len() {
        let t0 = grid[i - 1];
        let t1 = grid[i];
        let dt = t1 - t0;

        model.prepare_step(t0, t1)?;

        let stepped = match integrator {
            IntegratorType::RK4 => RK4.step(model, t0, &x, dt),
            IntegratorType::ForwardEuler => ForwardEuler.step(model, t0, &x, dt),
        };
        x = stepped.map_err(|e| SimError::StepFailed {
            t_start_s: t0,
            state: format!("{:?}", state[i - 1]),
            message: e.to_string(),
        })?;

        time_s.push(t1);
        state.push(x.clone());
    }

    tracing::debug!(steps = grid.len() - 1, "transient run complete");

    Ok(SimRecord { time_s, state })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Model whose rhs fails past a trip time, to exercise failure context.
    struct TripModel {
        trip_after_s: f64,
    }

    impl TransientModel for TripModel {
        type State = f64;

        fn initial_state(&self) -> f64 {
            1.0
        }

        fn rhs(&mut self, t: f64, _x: &f64) -> SimResult<f64> {
            if t >= self.trip_after_s {
                return Err(SimError::NonPhysical {
                    what: "tripped",
                });
            }
            Ok(0.0)
        }

        fn add(&self, a: &f64, b: &f64) -> f64 {
            a + b
        }

        fn scale(&self, a: &f64, scale: f64) -> f64 {
            a * scale
        }
    }

    #[test]
    fn record_covers_every_sample() {
        let grid = TimeGrid::uniform(10, 9.0).unwrap();
        let mut model = TripModel {
            trip_after_s: 1e9,
        };
        let record = run_sim(&mut model, &grid, IntegratorType::RK4).unwrap();
        assert_eq!(record.time_s.len(), 10);
        assert_eq!(record.state.len(), 10);
        assert_eq!(record.time_s[0], 0.0);
        assert_eq!(record.state[0], 1.0);
        assert_eq!(record.time_s[9], 9.0);
    }

    #[test]
    fn failure_reports_subinterval_start() {
        let grid = TimeGrid::uniform(10, 9.0).unwrap();
        let mut model = TripModel { trip_after_s: 5.0 };
        let err = run_sim(&mut model, &grid, IntegratorType::ForwardEuler).unwrap_err();
        match err {
            SimError::StepFailed { t_start_s, .. } => {
                assert_eq!(t_start_s, 5.0);
            }
            other => panic!("expected StepFailed, got {other:?}"),
        }
    }
}
