//! Sensitive assets without an audit trail.

use crate::lattice::{
    Confidentiality, Criticality, DataBreachProbability, ExploitationImpact,
    ExploitationLikelihood, Integrity,
};
use crate::risk::{IdentityScope, Risk};
use crate::rules::category::{RiskCategory, RiskFunction, Stride};
use crate::rules::traits::{RiskRule, RuleContext};
use crate::tags::{self, Tagged};

pub const CATEGORY: RiskCategory = RiskCategory {
    id: "missing-audit-log-of-sensitive-asset",
    title: "Missing Audit Log of Sensitive Asset",
    description: "Changes to and access of sensitive assets should be recorded in an audit log \
                  so that actions can be traced back to their actor.",
    impact: "Without an audit log, misuse of sensitive data or functions cannot be traced or \
             proven afterwards.",
    asvs: "V7.2 - Log Processing",
    cheat_sheet: "https://cheatsheetseries.owasp.org/cheatsheets/Logging_Cheat_Sheet.html",
    action: "Audit logging",
    mitigation: "Record security-relevant access and changes to sensitive assets and ship the \
                 records to a tamper-resistant store.",
    check: "Are recommendations from the linked cheat sheet and referenced ASVS chapter applied?",
    function: RiskFunction::Development,
    stride: Stride::Repudiation,
    detection_logic: "In-scope technical assets, other than monitoring systems, that are or \
                      handle data classified restricted or higher, integrity important or \
                      higher, or tagged as PII.",
    risk_assessment: "Impact grows with the highest confidentiality and integrity reached. \
                      Likelihood is unlikely when the asset already ships to a monitoring \
                      target, very likely otherwise.",
    false_positives: "Assets whose audit trail is produced by a platform outside the model.",
    model_failure_possible_reason: true,
    cwe: 1009,
};

const SUPPORTED_TAGS: &[&str] = &[tags::PII];

pub struct MissingAuditLogRule;

fn is_sensitive(confidentiality: Confidentiality, integrity: Integrity, tagged_pii: bool) -> bool {
    confidentiality >= Confidentiality::Restricted || integrity >= Criticality::Important || tagged_pii
}

fn impact_of(confidentiality: Confidentiality, integrity: Integrity) -> ExploitationImpact {
    if confidentiality == Confidentiality::StrictlyConfidential
        || integrity == Criticality::MissionCritical
    {
        ExploitationImpact::VeryHigh
    } else if confidentiality >= Confidentiality::Confidential || integrity >= Criticality::Critical {
        ExploitationImpact::High
    } else {
        ExploitationImpact::Medium
    }
}

impl RiskRule for MissingAuditLogRule {
    fn category(&self) -> &'static RiskCategory {
        &CATEGORY
    }

    fn supported_tags(&self) -> &'static [&'static str] {
        SUPPORTED_TAGS
    }

    fn generate_risks(&self, ctx: &RuleContext<'_>) -> Vec<Risk> {
        let model = ctx.model;
        let mut risks = Vec::new();

        for asset in model.in_scope_technical_assets() {
            if asset.technology.is_monitoring() {
                continue;
            }

            let sensitive = is_sensitive(
                asset.confidentiality,
                asset.integrity,
                asset.is_tagged_with_any(SUPPORTED_TAGS),
            ) || model.data_assets_handled(asset).any(|d| {
                is_sensitive(d.confidentiality, d.integrity, d.is_tagged_with_any(SUPPORTED_TAGS))
            });
            if !sensitive {
                continue;
            }

            let impact = impact_of(
                model.highest_confidentiality(asset),
                model.highest_integrity(asset),
            );
            let likelihood = if model.links_to_monitoring(asset) {
                ExploitationLikelihood::Unlikely
            } else {
                ExploitationLikelihood::VeryLikely
            };

            risks.push(
                ctx.finish(
                    ctx.risk(&CATEGORY, asset)
                        .title(format!("Missing audit log at {}", asset.title))
                        .likelihood(likelihood)
                        .impact(impact)
                        .breach(DataBreachProbability::Improbable, Vec::<String>::new())
                        .identity(IdentityScope::TechnicalAsset),
                ),
            );
        }

        risks
    }
}
