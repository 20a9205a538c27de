//! Detection errors.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while running detection rules.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("Rule {id} panicked: {message}")]
    RulePanic { id: String, message: String },

    #[error("Unknown rule id: {0}")]
    UnknownRule(String),

    #[error("Invalid severity level: {0}")]
    InvalidSeverity(String),
}

impl ErrorCode for DetectionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RulePanic { .. } => error_code::RULE_PANIC,
            Self::UnknownRule(_) => error_code::UNKNOWN_RULE,
            Self::InvalidSeverity(_) => error_code::DETECTION_ERROR,
        }
    }
}
