//! Shared application service layer for tanktherm.
//!
//! Provides a unified interface for the CLI and GUI frontends: scenario
//! loading and validation, simulation execution, and series export.

pub mod error;
pub mod run;
pub mod scenario;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use run::{RunResult, RunSummary, run_scenario, to_csv, to_json};
pub use scenario::{Scenario, load_scenario};
pub use tt_sim::IntegratorType;
