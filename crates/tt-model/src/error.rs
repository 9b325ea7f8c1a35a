//! Error types for model construction.

use thiserror::Error;

/// Errors encountered building model entities.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Core error: {message}")]
    Core { message: String },
}

pub type ModelResult<T> = Result<T, ModelError>;

impl From<tt_core::CoreError> for ModelError {
    fn from(e: tt_core::CoreError) -> Self {
        ModelError::Core {
            message: e.to_string(),
        }
    }
}
