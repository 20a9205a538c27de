//! The `RiskRule` trait and the context rules run against.

use super::category::RiskCategory;
use crate::model::{ArchitectureModel, TechnicalAsset};
use crate::risk::{Risk, RiskBuilder, SeverityCalculator};

/// Everything a rule may read during one evaluation.
pub struct RuleContext<'a> {
    pub model: &'a ArchitectureModel,
    pub severity: &'a dyn SeverityCalculator,
}

impl<'a> RuleContext<'a> {
    pub fn new(model: &'a ArchitectureModel, severity: &'a dyn SeverityCalculator) -> Self {
        Self { model, severity }
    }

    /// Starts a risk for `asset` under `category`.
    pub fn risk(&self, category: &'static RiskCategory, asset: &TechnicalAsset) -> RiskBuilder {
        RiskBuilder::new(category, asset.id.as_str())
    }

    pub fn finish(&self, builder: RiskBuilder) -> Risk {
        builder.build(self.severity)
    }
}

/// Trait that every detection rule implements.
pub trait RiskRule: Send + Sync {
    /// Static metadata; identical on every call.
    fn category(&self) -> &'static RiskCategory;

    /// Tags this rule's logic consults. Informational only.
    fn supported_tags(&self) -> &'static [&'static str];

    /// Run detection. Returns an empty list when nothing applies.
    fn generate_risks(&self, ctx: &RuleContext<'_>) -> Vec<Risk>;

    fn id(&self) -> &'static str {
        self.category().id
    }
}
