//! Accidental logging of sensitive data: sensitive data handled by an asset
//! that ships logs to a monitoring target.

use crate::lattice::{Confidentiality, DataBreachProbability, ExploitationImpact, ExploitationLikelihood};
use crate::model::DataAsset;
use crate::risk::{IdentityScope, Risk};
use crate::rules::category::{RiskCategory, RiskFunction, Stride};
use crate::rules::traits::{RiskRule, RuleContext};
use crate::tags::{self, Tagged};

pub const CATEGORY: RiskCategory = RiskCategory {
    id: "accidental-logging-of-sensitive-data",
    title: "Accidental Logging of Sensitive Data",
    description: "Sensitive data such as personal identifiable information, financial data, and \
                  credentials may end up in log statements that are shipped to a monitoring platform.",
    impact: "Sensitive data may be exposed to everyone with access to the monitoring platform.",
    asvs: "V7.1 - Log Content",
    cheat_sheet: "https://cheatsheetseries.owasp.org/cheatsheets/Logging_Cheat_Sheet.html#data-to-exclude",
    action: "Review logging statements",
    mitigation: "Review log statements and ensure that sensitive data, such as personal identifiable \
                 information and credentials, is not logged without a legitimate reason.",
    check: "Are recommendations from the linked cheat sheet and referenced ASVS chapter applied?",
    function: RiskFunction::Development,
    stride: Stride::InformationDisclosure,
    detection_logic: "In-scope technical assets storing or processing data with confidentiality \
                      restricted or higher, or tagged as PII, financial, or credential, that \
                      communicate with a monitoring target.",
    risk_assessment: "Impact follows the highest confidentiality of the sensitive data; \
                      likelihood is fixed at likely.",
    false_positives: "Assets whose log pipeline is known to scrub sensitive fields.",
    model_failure_possible_reason: false,
    cwe: 532,
};

const SENSITIVE_TAGS: &[&str] = &[tags::PII, tags::FINANCIAL, tags::CREDENTIAL];

pub struct AccidentalLoggingRule;

fn is_log_sensitive(data: &DataAsset) -> bool {
    data.confidentiality >= Confidentiality::Restricted || data.is_tagged_with_any(SENSITIVE_TAGS)
}

impl RiskRule for AccidentalLoggingRule {
    fn category(&self) -> &'static RiskCategory {
        &CATEGORY
    }

    fn supported_tags(&self) -> &'static [&'static str] {
        SENSITIVE_TAGS
    }

    fn generate_risks(&self, ctx: &RuleContext<'_>) -> Vec<Risk> {
        let model = ctx.model;
        let mut risks = Vec::new();

        for asset in model.in_scope_technical_assets() {
            let Some(first_link) = model.monitoring_links(asset).next() else {
                continue;
            };

            // Worst sensitive data wins; ties keep the lowest id.
            let mut worst: Option<&DataAsset> = None;
            for data in model.data_assets_handled(asset).filter(|d| is_log_sensitive(d)) {
                if worst.map_or(true, |w| data.confidentiality > w.confidentiality) {
                    worst = Some(data);
                }
            }
            let Some(worst) = worst else {
                continue;
            };

            // Tagged-only data below restricted still counts as medium.
            let impact = ExploitationImpact::from_confidentiality(worst.confidentiality)
                .max(ExploitationImpact::Medium);

            let mut breached = vec![asset.id.as_str()];
            breached.extend(model.monitoring_links(asset).map(|l| l.target_id.as_str()));

            risks.push(
                ctx.finish(
                    ctx.risk(&CATEGORY, asset)
                        .title(format!(
                            "Accidental logging of sensitive data risk at {}",
                            asset.title
                        ))
                        .likelihood(ExploitationLikelihood::Likely)
                        .impact(impact)
                        .data_asset(worst.id.as_str())
                        .communication_link(first_link.id.as_str())
                        .breach(DataBreachProbability::Possible, breached)
                        .identity(IdentityScope::TechnicalAsset),
                ),
            );
        }

        risks
    }
}
