//! Assets, or whole models, without a monitoring target.

use crate::lattice::{
    Confidentiality, Criticality, DataBreachProbability, ExploitationImpact,
    ExploitationLikelihood, Ordinal,
};
use crate::model::{ArchitectureModel, TechnicalAsset};
use crate::risk::{IdentityScope, Risk};
use crate::rules::category::{RiskCategory, RiskFunction, Stride};
use crate::rules::traits::{RiskRule, RuleContext};

pub const CATEGORY: RiskCategory = RiskCategory {
    id: "missing-monitoring",
    title: "Missing Monitoring",
    description: "Sensitive assets should report to a monitoring system so that attacks and \
                  failures are noticed.",
    impact: "Attacks against unmonitored assets may go unnoticed for a long time.",
    asvs: "V7.1 - Log Content",
    cheat_sheet: "https://cheatsheetseries.owasp.org/cheatsheets/Logging_Vocabulary_Cheat_Sheet.html",
    action: "Monitoring",
    mitigation: "Add a monitoring system to the architecture and connect every sensitive asset \
                 to it.",
    check: "Is every sensitive asset connected to a monitoring system?",
    function: RiskFunction::Architecture,
    stride: Stride::Repudiation,
    detection_logic: "Models without any monitoring system, and in-scope sensitive assets with \
                      no link to a monitoring system.",
    risk_assessment: "Impact grows with the highest classification reached. A model without \
                      monitoring rates likely, a single unconnected asset unlikely, and both \
                      step up for strictly confidential or mission-critical assets.",
    false_positives: "Assets monitored by agents or platforms not represented in the model.",
    model_failure_possible_reason: true,
    cwe: 778,
};

pub struct MissingMonitoringRule;

/// Sensitivity tier of an asset's highest classification: 0 below
/// Confidential/Critical, 1 from there, 2 at StrictlyConfidential/MissionCritical.
fn monitoring_tier(model: &ArchitectureModel, asset: &TechnicalAsset) -> usize {
    let c = model.highest_confidentiality(asset);
    let i = model.highest_integrity(asset);
    let a = model.highest_availability(asset);
    if c == Confidentiality::StrictlyConfidential
        || i == Criticality::MissionCritical
        || a == Criticality::MissionCritical
    {
        2
    } else if c >= Confidentiality::Confidential
        || i >= Criticality::Critical
        || a >= Criticality::Critical
    {
        1
    } else {
        0
    }
}

fn impact_for(tier: usize) -> ExploitationImpact {
    ExploitationImpact::Low.increment_by(tier)
}

/// Steps up from `base` once the top tier is reached.
fn likelihood_for(base: ExploitationLikelihood, tier: usize) -> ExploitationLikelihood {
    base.increment_by(tier.saturating_sub(1))
}

fn needs_monitoring(model: &ArchitectureModel, asset: &TechnicalAsset) -> bool {
    monitoring_tier(model, asset) > 0
}

impl MissingMonitoringRule {
    /// One model-wide finding, placed on the most sensitive in-scope asset.
    fn model_wide(&self, ctx: &RuleContext<'_>) -> Vec<Risk> {
        let model = ctx.model;
        let mut exemplar: Option<(&TechnicalAsset, u32)> = None;
        let mut tier = 0;

        for asset in model.in_scope_technical_assets() {
            tier = tier.max(monitoring_tier(model, asset));
            let score = model.sensitivity_score(asset);
            // Strictly greater, so ties keep the lowest id.
            if exemplar.map_or(true, |(_, best)| score > best) {
                exemplar = Some((asset, score));
            }
        }

        let Some((asset, _)) = exemplar else {
            return Vec::new();
        };
        vec![ctx.finish(
            ctx.risk(&CATEGORY, asset)
                .title("Missing monitoring in the architecture model")
                .likelihood(likelihood_for(ExploitationLikelihood::Likely, tier))
                .impact(impact_for(tier))
                .breach(DataBreachProbability::Improbable, Vec::<String>::new())
                .identity(IdentityScope::TechnicalAsset),
        )]
    }
}

impl RiskRule for MissingMonitoringRule {
    fn category(&self) -> &'static RiskCategory {
        &CATEGORY
    }

    fn supported_tags(&self) -> &'static [&'static str] {
        &[]
    }

    fn generate_risks(&self, ctx: &RuleContext<'_>) -> Vec<Risk> {
        let model = ctx.model;
        if !model.has_monitoring() {
            return self.model_wide(ctx);
        }

        model
            .in_scope_technical_assets()
            .filter(|a| !a.technology.is_monitoring())
            .filter(|a| needs_monitoring(model, a) && !model.links_to_monitoring(a))
            .map(|asset| {
                let tier = monitoring_tier(model, asset);
                ctx.finish(
                    ctx.risk(&CATEGORY, asset)
                        .title(format!("Missing monitoring of {}", asset.title))
                        .likelihood(likelihood_for(ExploitationLikelihood::Unlikely, tier))
                        .impact(impact_for(tier))
                        .breach(DataBreachProbability::Improbable, Vec::<String>::new())
                        .identity(IdentityScope::TechnicalAsset),
                )
            })
            .collect()
    }
}
