//! Credentials stored by an asset that is not a vault.

use tracing::trace;

use crate::lattice::{
    Confidentiality, DataBreachProbability, ExploitationImpact, ExploitationLikelihood, Ordinal,
};
use crate::model::TechnicalAsset;
use crate::risk::{IdentityScope, Risk};
use crate::rules::category::{RiskCategory, RiskFunction, Stride};
use crate::rules::traits::{RiskRule, RuleContext};
use crate::tags::{self, CredentialLifetime, Tagged};

pub const CATEGORY: RiskCategory = RiskCategory {
    id: "credential-stored-outside-of-vault",
    title: "Credential Stored Outside of Vault",
    description: "Credentials should be kept in a dedicated secret store. Storing them anywhere \
                  else widens the set of systems an attacker can read them from.",
    impact: "An attacker may obtain credentials and reuse them against the systems they protect.",
    asvs: "V6.4 - Secret Management",
    cheat_sheet: "https://cheatsheetseries.owasp.org/cheatsheets/Secrets_Management_Cheat_Sheet.html",
    action: "Credential storage",
    mitigation: "Move credentials into a vault and fetch them at runtime. Prefer short-lived, \
                 automatically rotated credentials.",
    check: "Are recommendations from the linked cheat sheet and referenced ASVS chapter applied?",
    function: RiskFunction::Operations,
    stride: Stride::InformationDisclosure,
    detection_logic: "In-scope technical assets, other than vaults, storing data assets tagged as \
                      credentials or with a credential lifetime.",
    risk_assessment: "Derived from the credential lifetime: hardcoded and unlimited credentials \
                      rate worst. Rotation lowers every rating one step unless the credential \
                      is explicitly tagged hardcoded. A strictly \
                      confidential, encrypted storing asset lowers likelihood and breach \
                      probability one step.",
    false_positives: "Credentials that are only references to vault entries.",
    model_failure_possible_reason: false,
    cwe: 522,
};

const SUPPORTED_TAGS: &[&str] = &[
    tags::CREDENTIAL,
    "credential-lifetime:unknown/hardcoded",
    "credential-lifetime:unlimited",
    "credential-lifetime:long",
    "credential-lifetime:short",
    "credential-lifetime:auto-rotation",
    "credential-lifetime:manual-rotation",
];

pub struct CredentialOutsideVaultRule;

/// Impact, likelihood, and breach probability for a lifetime class.
fn rate(
    lifetime: CredentialLifetime,
) -> (ExploitationImpact, ExploitationLikelihood, DataBreachProbability) {
    match lifetime {
        CredentialLifetime::Long => (
            ExploitationImpact::High,
            ExploitationLikelihood::VeryLikely,
            DataBreachProbability::Probable,
        ),
        CredentialLifetime::Short => (
            ExploitationImpact::Medium,
            ExploitationLikelihood::Likely,
            DataBreachProbability::Possible,
        ),
        _ => (
            ExploitationImpact::VeryHigh,
            ExploitationLikelihood::Frequent,
            DataBreachProbability::Probable,
        ),
    }
}

fn is_hardened(asset: &TechnicalAsset) -> bool {
    asset.confidentiality == Confidentiality::StrictlyConfidential && asset.encryption.is_encrypted()
}

impl RiskRule for CredentialOutsideVaultRule {
    fn category(&self) -> &'static RiskCategory {
        &CATEGORY
    }

    fn supported_tags(&self) -> &'static [&'static str] {
        SUPPORTED_TAGS
    }

    fn generate_risks(&self, ctx: &RuleContext<'_>) -> Vec<Risk> {
        let model = ctx.model;
        let mut risks = Vec::new();

        for data in model.data_assets_tagged_with_any(SUPPORTED_TAGS) {
            let lifetime = CredentialLifetime::classify(data.tags());
            let (mut impact, mut likelihood, mut breach) = rate(lifetime);
            // Only an explicit hardcoded tag blocks rotation; the implicit default does not.
            if CredentialLifetime::is_rotated(data.tags())
                && !CredentialLifetime::is_explicitly_hardcoded(data.tags())
            {
                impact = impact.decrement();
                likelihood = likelihood.decrement();
                breach = breach.decrement();
            }

            for asset in model.stored_by(data) {
                if asset.technology.is_vault() {
                    continue;
                }
                if !asset.is_in_scope() {
                    trace!(asset = %asset.id, data = %data.id, "skipping out-of-scope asset");
                    continue;
                }

                let (likelihood, breach) = if is_hardened(asset) {
                    (likelihood.decrement(), breach.decrement())
                } else {
                    (likelihood, breach)
                };

                risks.push(
                    ctx.finish(
                        ctx.risk(&CATEGORY, asset)
                            .title(format!(
                                "Credential stored outside of vault: {} at {}",
                                data.title, asset.title
                            ))
                            .likelihood(likelihood)
                            .impact(impact)
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
