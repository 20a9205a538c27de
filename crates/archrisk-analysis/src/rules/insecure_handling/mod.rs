//! Data handled by an asset classified below the data's own confidentiality.

use tracing::trace;

use crate::lattice::{
    Confidentiality, DataBreachProbability, ExploitationImpact, ExploitationLikelihood, Ordinal,
};
use crate::risk::{IdentityScope, Risk};
use crate::rules::category::{RiskCategory, RiskFunction, Stride};
use crate::rules::traits::{RiskRule, RuleContext};

pub const CATEGORY: RiskCategory = RiskCategory {
    id: "insecure-handling-of-sensitive-data",
    title: "Insecure Handling of Sensitive Data",
    description: "A technical asset stores or processes data that is classified higher than \
                  the asset itself, so its protection is weaker than the data requires.",
    impact: "Sensitive data may be exposed through an asset that is not hardened for it.",
    asvs: "V8.1 - General Data Protection",
    cheat_sheet: "https://cheatsheetseries.owasp.org/cheatsheets/User_Privacy_Protection_Cheat_Sheet.html",
    action: "Data classification alignment",
    mitigation: "Raise the asset's confidentiality to match the data it handles, or move the \
                 data to an asset that is already protected at that level.",
    check: "Is every asset classified at least as high as the data it handles?",
    function: RiskFunction::Architecture,
    stride: Stride::InformationDisclosure,
    detection_logic: "In-scope technical assets below strictly confidential that store or \
                      process data classified higher than themselves.",
    risk_assessment: "Impact follows the data's confidentiality. Likelihood and breach \
                      probability follow the asset's own tier, one step lower for data that is \
                      only processed.",
    false_positives: "Assets that only pass encrypted payloads through without access to the \
                      plaintext.",
    model_failure_possible_reason: true,
    cwe: 200,
};

pub struct InsecureHandlingRule;

/// Likelihood and breach probability implied by the asset's own tier.
fn exposure(tier: Confidentiality) -> (ExploitationLikelihood, DataBreachProbability) {
    match tier {
        Confidentiality::Public => (ExploitationLikelihood::Frequent, DataBreachProbability::Probable),
        Confidentiality::Internal => (ExploitationLikelihood::VeryLikely, DataBreachProbability::Possible),
        Confidentiality::Restricted => (ExploitationLikelihood::Likely, DataBreachProbability::Possible),
        Confidentiality::Confidential | Confidentiality::StrictlyConfidential => {
            (ExploitationLikelihood::Unlikely, DataBreachProbability::Improbable)
        }
    }
}

impl RiskRule for InsecureHandlingRule {
    fn category(&self) -> &'static RiskCategory {
        &CATEGORY
    }

    fn supported_tags(&self) -> &'static [&'static str] {
        &[]
    }

    fn generate_risks(&self, ctx: &RuleContext<'_>) -> Vec<Risk> {
        let model = ctx.model;
        let mut risks = Vec::new();

        for asset in model.technical_assets() {
            if !asset.is_in_scope() {
                trace!(asset = %asset.id, "skipping out-of-scope asset");
                continue;
            }
            if asset.confidentiality.is_ceiling() {
                continue;
            }
            let (likelihood, breach) = exposure(asset.confidentiality);

            for data in model.data_assets_handled(asset) {
                if data.confidentiality <= asset.confidentiality {
                    continue;
                }
                let stored = asset.data_assets_stored.contains(&data.id);
                let (likelihood, breach) = if stored {
                    (likelihood, breach)
                } else {
                    (likelihood.decrement(), breach.decrement())
                };

                risks.push(
                    ctx.finish(
                        ctx.risk(&CATEGORY, asset)
                            .title(format!(
                                "Insecure handling of {} at {}",
                                data.title, asset.title
                            ))
                            .likelihood(likelihood)
                            .impact(ExploitationImpact::from_confidentiality(data.confidentiality))
                            .data_asset(data.id.as_str())
                            .breach(breach, [asset.id.as_str()])
                            .identity(IdentityScope::TechnicalAssetAndData),
                    ),
                );
            }
        }

        risks
    }
}
