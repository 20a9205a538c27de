//! Encrypted links, flagged for review of the transport cryptography.

use tracing::trace;

use crate::lattice::{Confidentiality, DataBreachProbability, ExploitationImpact, ExploitationLikelihood};
use crate::model::DataAsset;
use crate::risk::{IdentityScope, Risk};
use crate::rules::category::{RiskCategory, RiskFunction, Stride};
use crate::rules::traits::{RiskRule, RuleContext};

pub const CATEGORY: RiskCategory = RiskCategory {
    id: "use-of-weak-cryptography-in-transit",
    title: "Use of Weak Cryptography in Transit",
    description: "Encrypted communication is only as strong as its protocol versions, cipher \
                  suites, and key lengths.",
    impact: "Data sent over the link may be decrypted or tampered with by an attacker on the \
             network path.",
    asvs: "V9.1 - Client Communication Security",
    cheat_sheet: "https://cheatsheetseries.owasp.org/cheatsheets/Transport_Layer_Security_Cheat_Sheet.html",
    action: "Transport cryptography",
    mitigation: "Use current protocol versions and strong cipher suites only. Disable legacy \
                 fallbacks.",
    check: "Are recommendations from the linked cheat sheet and referenced ASVS chapter applied?",
    function: RiskFunction::Operations,
    stride: Stride::InformationDisclosure,
    detection_logic: "Encrypted communication links whose source asset is in scope.",
    risk_assessment: "Impact follows the highest confidentiality of the data sent or received; \
                      likelihood is fixed at unlikely.",
    false_positives: "Links whose cryptographic configuration is already centrally enforced.",
    model_failure_possible_reason: false,
    cwe: 327,
};

pub struct WeakCryptoInTransitRule;

impl RiskRule for WeakCryptoInTransitRule {
    fn category(&self) -> &'static RiskCategory {
        &CATEGORY
    }

    fn supported_tags(&self) -> &'static [&'static str] {
        &[]
    }

    fn generate_risks(&self, ctx: &RuleContext<'_>) -> Vec<Risk> {
        let model = ctx.model;
        let mut risks = Vec::new();

        for link in model.communication_links() {
            if !link.protocol.is_encrypted() {
                continue;
            }
            let Some(source) = model.link_source(link) else {
                continue;
            };
            if !source.is_in_scope() {
                trace!(link = %link.id, "skipping link from out-of-scope asset");
                continue;
            }

            // First of the most confidential, in id order.
            let mut top: Option<&DataAsset> = None;
            for id in link.transferred_data_ids() {
                let Some(data) = model.data_asset(id) else {
                    continue;
                };
                if top.map_or(true, |t| data.confidentiality > t.confidentiality) {
                    top = Some(data);
                }
            }
            let impact = ExploitationImpact::from_confidentiality(
                top.map_or(Confidentiality::Public, |d| d.confidentiality),
            );

            risks.push(
                ctx.finish(
                    ctx.risk(&CATEGORY, source)
                        .title(format!(
                            "Use of weak cryptography in transit on {} from {}",
                            link.title, source.title
                        ))
                        .likelihood(ExploitationLikelihood::Unlikely)
                        .impact(impact)
                        .maybe_data_asset(top.map(|d| d.id.as_str()))
                        .communication_link(link.id.as_str())
                        .breach(
                            DataBreachProbability::Possible,
                            [link.source_id.as_str(), link.target_id.as_str()],
                        )
                        .identity(IdentityScope::CommunicationLink),
                ),
            );
        }

        risks
    }
}
