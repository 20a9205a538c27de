//! Error handling for archrisk.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod detection_error;
pub mod error_code;
pub mod evaluation_error;
pub mod model_error;

pub use config_error::ConfigError;
pub use detection_error::DetectionError;
pub use error_code::ErrorCode;
pub use evaluation_error::EvaluationError;
pub use model_error::{EntityKind, ModelError};
