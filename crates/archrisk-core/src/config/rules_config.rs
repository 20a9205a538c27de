//! Rule runner configuration.

use serde::{Deserialize, Serialize};

/// Severity names accepted by `min_severity`, lowest first.
pub const SEVERITY_LEVELS: &[&str] = &["low", "medium", "elevated", "high", "critical"];

/// Configuration for the rule runner.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RulesConfig {
    /// Rule ids excluded from evaluation.
    #[serde(default)]
    pub disabled_rules: Vec<String>,
    /// Evaluate rules on the rayon pool. Default: true.
    pub parallel: Option<bool>,
    /// Findings below this severity are dropped. Default: "low".
    pub min_severity: Option<String>,
}

impl RulesConfig {
    /// Returns whether rules run in parallel, defaulting to true.
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(true)
    }

    /// Returns the effective severity floor, defaulting to "low".
    pub fn effective_min_severity(&self) -> &str {
        self.min_severity.as_deref().unwrap_or("low")
    }

    /// Whether a rule id is listed in `disabled_rules`.
    pub fn is_disabled(&self, rule_id: &str) -> bool {
        self.disabled_rules.iter().any(|r| r == rule_id)
    }
}
