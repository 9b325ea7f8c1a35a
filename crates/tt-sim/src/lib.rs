//! Transient simulation machinery for the heated tank.
//!
//! Provides:
//! - TransientModel trait for pluggable dynamic systems
//! - Fixed-step RK4 and forward Euler integrators
//! - Scalar tank model driven by a zero-order-held heater schedule
//! - Sequential grid-driven run loop with per-step failure context

pub mod error;
pub mod integrator;
pub mod model;
pub mod sim;
pub mod tank;

// Re-exports for public API
pub use error::{SimError, SimResult};
pub use integrator::{ForwardEuler, Integrator, RK4};
pub use model::TransientModel;
pub use sim::{IntegratorType, SimRecord, run_sim};
pub use tank::TankModel;
