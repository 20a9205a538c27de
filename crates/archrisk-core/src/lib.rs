//! Core plumbing for archrisk: errors, configuration, and tracing.

pub mod config;
pub mod errors;
pub mod tracing;
