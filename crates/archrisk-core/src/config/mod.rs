//! Configuration system for archrisk.
//! TOML-based, 4-layer resolution: overrides > env > project > user > defaults.

pub mod archrisk_config;
pub mod rules_config;

pub use archrisk_config::{ArchriskConfig, ConfigOverrides};
pub use rules_config::RulesConfig;
