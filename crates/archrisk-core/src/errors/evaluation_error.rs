//! Top-level evaluation errors.

use super::error_code::ErrorCode;
use super::{ConfigError, DetectionError, ModelError};

/// Errors that can surface from a full evaluation pass.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Detection error: {0}")]
    Detection(#[from] DetectionError),
}

impl ErrorCode for EvaluationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Model(e) => e.error_code(),
            Self::Detection(e) => e.error_code(),
        }
    }
}
