//! Model integrity errors.
//!
//! Raised while validating a snapshot before it reaches the rules.
//! Rules never see a snapshot that fails validation.

use std::fmt;

use super::error_code::{self, ErrorCode};

/// The kind of model entity an integrity error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    TechnicalAsset,
    DataAsset,
    CommunicationLink,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TechnicalAsset => write!(f, "technical asset"),
            Self::DataAsset => write!(f, "data asset"),
            Self::CommunicationLink => write!(f, "communication link"),
        }
    }
}

/// Structural defects in an architecture model snapshot.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("{owner} references unknown {kind} '{target}'")]
    DanglingReference {
        kind: EntityKind,
        owner: String,
        target: String,
    },

    #[error("Duplicate {kind} id '{id}'")]
    DuplicateId { kind: EntityKind, id: String },

    #[error("Technical asset '{asset}' has RAA {value} outside [0, 1]")]
    InvalidRaa { asset: String, value: f64 },

    #[error("Id '{id}' contains the reserved delimiter '{delimiter}'")]
    ReservedDelimiter { id: String, delimiter: char },
}

impl ErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        error_code::MODEL_INTEGRITY
    }
}
