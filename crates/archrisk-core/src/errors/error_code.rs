//! `ErrorCode` trait for host-facing error strings.

/// Every error enum implements this to expose a stable, machine-readable
/// code alongside its human-readable message.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const MODEL_INTEGRITY: &str = "MODEL_INTEGRITY";
pub const DETECTION_ERROR: &str = "DETECTION_ERROR";
pub const RULE_PANIC: &str = "RULE_PANIC";
pub const UNKNOWN_RULE: &str = "UNKNOWN_RULE";
