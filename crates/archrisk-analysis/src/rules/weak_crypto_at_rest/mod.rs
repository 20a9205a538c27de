//! Encrypted stores, flagged for review of the at-rest cryptography.

use crate::lattice::{Confidentiality, DataBreachProbability, ExploitationImpact, ExploitationLikelihood};
use crate::model::DataAsset;
use crate::risk::{IdentityScope, Risk};
use crate::rules::category::{RiskCategory, RiskFunction, Stride};
use crate::rules::traits::{RiskRule, RuleContext};

pub const CATEGORY: RiskCategory = RiskCategory {
    id: "use-of-weak-cryptography-at-rest",
    title: "Use of Weak Cryptography at Rest",
    description: "Encryption at rest only protects stored data when the algorithms, modes, and \
                  key management behind it are sound.",
    impact: "Stored data may be recovered by an attacker who obtains the storage medium or a \
             backup.",
    asvs: "V6.2 - Algorithms",
    cheat_sheet: "https://cheatsheetseries.owasp.org/cheatsheets/Cryptographic_Storage_Cheat_Sheet.html",
    action: "Storage cryptography",
    mitigation: "Use vetted algorithms with adequate key lengths and keep keys apart from the \
                 data they protect.",
    check: "Are recommendations from the linked cheat sheet and referenced ASVS chapter applied?",
    function: RiskFunction::Development,
    stride: Stride::InformationDisclosure,
    detection_logic: "In-scope technical assets, other than client systems, with at-rest \
                      encryption enabled.",
    risk_assessment: "Impact follows the highest confidentiality of the stored data; likelihood \
                      is fixed at unlikely.",
    false_positives: "Stores using encryption provided and audited by the platform.",
    model_failure_possible_reason: false,
    cwe: 327,
};

pub struct WeakCryptoAtRestRule;

impl RiskRule for WeakCryptoAtRestRule {
    fn category(&self) -> &'static RiskCategory {
        &CATEGORY
    }

    fn supported_tags(&self) -> &'static [&'static str] {
        &[]
    }

    fn generate_risks(&self, ctx: &RuleContext<'_>) -> Vec<Risk> {
        let model = ctx.model;
        let mut risks = Vec::new();

        for asset in model.in_scope_technical_assets() {
            if asset.technology.is_client() || !asset.encryption.is_encrypted() {
                continue;
            }

            let mut top: Option<&DataAsset> = None;
            for data in model.data_assets_stored(asset) {
                if top.map_or(true, |t| data.confidentiality > t.confidentiality) {
                    top = Some(data);
                }
            }
            let impact = ExploitationImpact::from_confidentiality(
                top.map_or(Confidentiality::Public, |d| d.confidentiality),
            );

            risks.push(
                ctx.finish(
                    ctx.risk(&CATEGORY, asset)
                        .title(format!("Use of weak cryptography at rest at {}", asset.title))
                        .likelihood(ExploitationLikelihood::Unlikely)
                        .impact(impact)
                        .maybe_data_asset(top.map(|d| d.id.as_str()))
                        .breach(DataBreachProbability::Possible, [asset.id.as_str()])
                        .identity(IdentityScope::TechnicalAsset),
                ),
            );
        }

        risks
    }
}
