//! Assets not declared to run without elevated privileges.

use crate::lattice::{DataBreachProbability, ExploitationImpact, ExploitationLikelihood};
use crate::risk::{IdentityScope, Risk};
use crate::rules::category::{RiskCategory, RiskFunction, Stride};
use crate::rules::traits::{RiskRule, RuleContext};
use crate::tags::Tagged;

pub const CATEGORY: RiskCategory = RiskCategory {
    id: "running-as-privileged-user",
    title: "Running as Privileged User",
    description: "Processes running as root or an administrative account give an attacker \
                  who compromises them full control of the host.",
    impact: "A compromised process may be used to take over the underlying system.",
    asvs: "V1.2 - Authentication Architecture",
    cheat_sheet: "https://cheatsheetseries.owasp.org/cheatsheets/Docker_Security_Cheat_Sheet.html",
    action: "Least privilege",
    mitigation: "Run the process as a dedicated unprivileged user and tag the asset \
                 accordingly.",
    check: "Does every process run with the least privileges it needs?",
    function: RiskFunction::Operations,
    stride: Stride::ElevationOfPrivilege,
    detection_logic: "In-scope technical assets without a non-root, unprivileged, or isNotAdmin \
                      tag.",
    risk_assessment: "Follows the asset's relative attacker attractiveness: below 0.2 low and \
                      unlikely, above 0.8 high and very likely, medium and likely otherwise.",
    false_positives: "Assets that drop privileges at startup but are not tagged.",
    model_failure_possible_reason: true,
    cwe: 250,
};

const SUPPORTED_TAGS: &[&str] = &[
    "root",
    "non-root",
    "privileged",
    "unprivileged",
    "isAdmin",
    "isNotAdmin",
];

/// Any one of these marks the asset as running unprivileged.
const UNPRIVILEGED_TAGS: &[&str] = &["non-root", "unprivileged", "isNotAdmin"];

const LOW_RAA: f64 = 0.2;
const HIGH_RAA: f64 = 0.8;

pub struct PrivilegedUserRule;

fn rate(raa: f64) -> (ExploitationImpact, ExploitationLikelihood) {
    if raa < LOW_RAA {
        (ExploitationImpact::Low, ExploitationLikelihood::Unlikely)
    } else if raa > HIGH_RAA {
        (ExploitationImpact::High, ExploitationLikelihood::VeryLikely)
    } else {
        (ExploitationImpact::Medium, ExploitationLikelihood::Likely)
    }
}

impl RiskRule for PrivilegedUserRule {
    fn category(&self) -> &'static RiskCategory {
        &CATEGORY
    }

    fn supported_tags(&self) -> &'static [&'static str] {
        SUPPORTED_TAGS
    }

    fn generate_risks(&self, ctx: &RuleContext<'_>) -> Vec<Risk> {
        ctx.model
            .in_scope_technical_assets()
            .filter(|a| !a.is_tagged_with_any(UNPRIVILEGED_TAGS))
            .map(|asset| {
                let (impact, likelihood) = rate(asset.raa);
                ctx.finish(
                    ctx.risk(&CATEGORY, asset)
                        .title(format!("Running as privileged user at {}", asset.title))
                        .likelihood(likelihood)
                        .impact(impact)
                        .breach(DataBreachProbability::Possible, [asset.id.as_str()])
                        .identity(IdentityScope::TechnicalAsset),
                )
            })
            .collect()
    }
}
