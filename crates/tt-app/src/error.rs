//! Error types for the tt-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for both CLI and GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read scenario file: {path}")]
    ScenarioFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Scenario parse error: {0}")]
    ScenarioParse(String),

    #[error("Scenario validation failed: {0}")]
    Validation(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for tt-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<tt_model::ModelError> for AppError {
    fn from(err: tt_model::ModelError) -> Self {
        AppError::Model(err.to_string())
    }
}

impl From<tt_sim::SimError> for AppError {
    fn from(err: tt_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::ScenarioParse(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialize(err.to_string())
    }
}
