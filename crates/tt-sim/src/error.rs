//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered during transient simulation.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-physical condition: {what}")]
    NonPhysical { what: &'static str },

    /// Integrator failure over one sub-interval. Carries the sub-interval
    /// start time and the state entering it; the run aborts, no retry path.
    #[error("Integration step failed at t={t_start_s} s from state {state}: {message}")]
    StepFailed {
        t_start_s: f64,
        state: String,
        message: String,
    },
}

pub type SimResult<T> = Result<T, SimError>;
