//! Rule runner: evaluates every registered rule over one model snapshot.
//!
//! Rules run independently (on the rayon pool unless configured otherwise).
//! Their outputs are concatenated, sorted and deduplicated by synthetic id,
//! and filtered by the configured severity floor. A rule that panics is
//! reported in `EvaluationResult::errors` and does not affect the others.

pub mod result;

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::str::FromStr;

use archrisk_core::config::{ArchriskConfig, ConfigOverrides, RulesConfig};
use archrisk_core::errors::{DetectionError, EvaluationError};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::lattice::{Ordinal, Severity};
use crate::model::{ArchitectureModel, DataAsset, TechnicalAsset};
use crate::risk::{Risk, RiskStatistics, SeverityCalculator, WeightedSeverity};
use crate::rules::{RiskRule, RuleContext, RuleRegistry};

pub use result::EvaluationResult;

/// Runs a `RuleRegistry` against architecture models.
pub struct RuleRunner {
    registry: RuleRegistry,
    severity: Box<dyn SeverityCalculator>,
    parallel: bool,
    min_severity: Severity,
}

impl RuleRunner {
    /// The full catalog, weighted severity, parallel, no severity floor.
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::with_default_rules(),
            severity: Box::new(WeightedSeverity),
            parallel: true,
            min_severity: Severity::floor(),
        }
    }

    /// The full catalog, minus disabled rules, with the configured
    /// parallelism and severity floor.
    pub fn from_config(config: &RulesConfig) -> Result<Self, DetectionError> {
        let min_severity = Severity::from_str(config.effective_min_severity())
            .map_err(|e| DetectionError::InvalidSeverity(e.value))?;
        let registry = RuleRegistry::with_default_rules().apply_config(config)?;
        Ok(Self {
            registry,
            severity: Box::new(WeightedSeverity),
            parallel: config.effective_parallel(),
            min_severity,
        })
    }

    pub fn with_registry(mut self, registry: RuleRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_severity_calculator(mut self, severity: impl SeverityCalculator + 'static) -> Self {
        self.severity = Box::new(severity);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_min_severity(mut self, min_severity: Severity) -> Self {
        self.min_severity = min_severity;
        self
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    pub fn min_severity(&self) -> Severity {
        self.min_severity
    }

    /// Evaluate every rule against `model`.
    pub fn evaluate(&self, model: &ArchitectureModel) -> EvaluationResult {
        let ctx = RuleContext::new(model, self.severity.as_ref());
        let rules: Vec<&dyn RiskRule> = self.registry.iter().collect();

        let outcomes: Vec<Result<Vec<Risk>, DetectionError>> = if self.parallel {
            rules.par_iter().map(|rule| run_rule(*rule, &ctx)).collect()
        } else {
            rules.iter().map(|rule| run_rule(*rule, &ctx)).collect()
        };

        let mut risks = Vec::new();
        let mut errors = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(found) => risks.extend(found),
                Err(e) => errors.push(e),
            }
        }

        risks.sort_by(|a, b| a.synthetic_id.cmp(&b.synthetic_id));
        risks.dedup_by(|a, b| a.synthetic_id == b.synthetic_id);
        risks.retain(|r| r.severity >= self.min_severity);

        let statistics = RiskStatistics::from_risks(&risks);
        info!(
            rules = rules.len(),
            risks = statistics.total,
            errors = errors.len(),
            technical_assets = model.technical_asset_count(),
            "evaluation complete"
        );

        EvaluationResult {
            risks,
            errors,
            statistics,
        }
    }
}

impl Default for RuleRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot entry point for hosts: resolves configuration rooted at `root`,
/// validates the snapshot, and evaluates it.
pub fn analyze(
    root: &Path,
    overrides: Option<&ConfigOverrides>,
    technical_assets: Vec<TechnicalAsset>,
    data_assets: Vec<DataAsset>,
) -> Result<EvaluationResult, EvaluationError> {
    let config = ArchriskConfig::load(root, overrides)?;
    let model = ArchitectureModel::new(technical_assets, data_assets)?;
    let runner = RuleRunner::from_config(&config.rules)?;
    Ok(runner.evaluate(&model))
}

fn run_rule(rule: &dyn RiskRule, ctx: &RuleContext<'_>) -> Result<Vec<Risk>, DetectionError> {
    let id = rule.id();
    match panic::catch_unwind(AssertUnwindSafe(|| rule.generate_risks(ctx))) {
        Ok(risks) => {
            debug!(rule = id, count = risks.len(), "rule evaluated");
            Ok(risks)
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            warn!(rule = id, %message, "rule panicked; its findings are dropped");
            Err(DetectionError::RulePanic {
                id: id.to_string(),
                message,
            })
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
