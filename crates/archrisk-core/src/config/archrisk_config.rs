//! Top-level archrisk configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::rules_config::{RulesConfig, SEVERITY_LEVELS};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`ARCHRISK_*`)
/// 3. Project config (`archrisk.toml` in the model root)
/// 4. User config (`~/.archrisk/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ArchriskConfig {
    pub rules: RulesConfig,
}

/// Override arguments supplied by the host, applied last.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub parallel: Option<bool>,
    pub min_severity: Option<String>,
    pub disabled_rules: Option<Vec<String>>,
}

impl ArchriskConfig {
    /// Load configuration with 4-layer resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { path, message }) => {
                        return Err(ConfigError::ParseError { path, message });
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join("archrisk.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): host overrides
        if let Some(o) = overrides {
            Self::apply_overrides(&mut config, o);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &ArchriskConfig) -> Result<(), ConfigError> {
        if let Some(ref level) = config.rules.min_severity {
            if !SEVERITY_LEVELS.contains(&level.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "rules.min_severity".to_string(),
                    message: format!("must be one of {}", SEVERITY_LEVELS.join(", ")),
                });
            }
        }
        if config.rules.disabled_rules.iter().any(|r| r.trim().is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "rules.disabled_rules".to_string(),
                message: "rule ids must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".archrisk").join("config.toml"))
    }

    fn merge_toml_file(config: &mut ArchriskConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let file_config: ArchriskConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only values set in `other` win.
    fn merge(base: &mut ArchriskConfig, other: &ArchriskConfig) {
        if !other.rules.disabled_rules.is_empty() {
            base.rules.disabled_rules = other.rules.disabled_rules.clone();
        }
        if other.rules.parallel.is_some() {
            base.rules.parallel = other.rules.parallel;
        }
        if other.rules.min_severity.is_some() {
            base.rules.min_severity = other.rules.min_severity.clone();
        }
    }

    /// Pattern: `ARCHRISK_RULES_PARALLEL`, `ARCHRISK_RULES_MIN_SEVERITY`,
    /// `ARCHRISK_RULES_DISABLED` (comma separated).
    fn apply_env_overrides(config: &mut ArchriskConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("ARCHRISK_RULES_PARALLEL") {
            let v = val.trim().parse::<bool>().map_err(|_| ConfigError::InvalidValue {
                field: "ARCHRISK_RULES_PARALLEL".to_string(),
                message: format!("expected true or false, got '{val}'"),
            })?;
            config.rules.parallel = Some(v);
        }
        if let Ok(val) = std::env::var("ARCHRISK_RULES_MIN_SEVERITY") {
            config.rules.min_severity = Some(val.trim().to_lowercase());
        }
        if let Ok(val) = std::env::var("ARCHRISK_RULES_DISABLED") {
            config.rules.disabled_rules = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
        Ok(())
    }

    fn apply_overrides(config: &mut ArchriskConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.parallel {
            config.rules.parallel = Some(v);
        }
        if let Some(ref v) = overrides.min_severity {
            config.rules.min_severity = Some(v.clone());
        }
        if let Some(ref v) = overrides.disabled_rules {
            config.rules.disabled_rules = v.clone();
        }
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
