//! tt-model: physical model of a heated water tank.
//!
//! Provides:
//! - Validated tank parameters (lumped thermal mass energy balance)
//! - Heater forcing schedule (piecewise-constant, half-open off-window)
//! - Uniform time grid generation
//! - Closed-form per-interval solution (exact for constant forcing)

pub mod error;
pub mod grid;
pub mod params;
pub mod schedule;

pub use error::{ModelError, ModelResult};
pub use grid::TimeGrid;
pub use params::TankParams;
pub use schedule::HeaterSchedule;
