//! Shared model fixtures for the integration tests.
#![allow(dead_code)]

use archrisk_analysis::lattice::{Confidentiality, Criticality};
use archrisk_analysis::model::{
    ArchitectureModel, CommunicationLink, DataAsset, Protocol, TechnicalAsset, Technology,
};
use archrisk_analysis::risk::{Risk, WeightedSeverity};
use archrisk_analysis::rules::{RiskRule, RuleContext};

pub fn model(assets: Vec<TechnicalAsset>, data: Vec<DataAsset>) -> ArchitectureModel {
    ArchitectureModel::new(assets, data).expect("fixture model is valid")
}

/// Runs a single rule with the default severity function.
pub fn run(rule: &dyn RiskRule, model: &ArchitectureModel) -> Vec<Risk> {
    let severity = WeightedSeverity;
    let ctx = RuleContext::new(model, &severity);
    rule.generate_risks(&ctx)
}

pub fn ids(risks: &[Risk]) -> Vec<&str> {
    risks.iter().map(|r| r.synthetic_id.as_str()).collect()
}

pub fn asset(id: &str) -> TechnicalAsset {
    TechnicalAsset::new(id, format!("{id} title"))
}

pub fn monitoring(id: &str) -> TechnicalAsset {
    asset(id).with_technology(Technology::Monitoring)
}

pub fn data(id: &str, confidentiality: Confidentiality) -> DataAsset {
    DataAsset::new(id, format!("{id} title")).with_confidentiality(confidentiality)
}

pub fn link_to(id: &str, target: &str) -> CommunicationLink {
    CommunicationLink::new(id, target)
}

pub fn https_to(id: &str, target: &str) -> CommunicationLink {
    CommunicationLink::new(id, target).with_protocol(Protocol::Https)
}

/// A small but complete model that triggers every rule at least once.
pub fn reference_model() -> ArchitectureModel {
    model(
        vec![
            asset("api")
                .with_technology(Technology::ApplicationServer)
                .with_classification(
                    Confidentiality::Confidential,
                    Criticality::Critical,
                    Criticality::Important,
                )
                .with_raa(0.6)
                .storing(&["sessions"])
                .processing(&["customer-records", "api-keys"])
                .with_link(link_to("api-to-logs", "logs").sending(&["customer-records"]))
                .with_link(https_to("api-to-db", "db").sending(&["customer-records"])),
            asset("db")
                .with_technology(Technology::Database)
                .with_classification(
                    Confidentiality::Restricted,
                    Criticality::Critical,
                    Criticality::Critical,
                )
                .with_encryption(archrisk_analysis::model::Encryption::Transparent)
                .with_raa(0.9)
                .with_tags(&["non-root"])
                .storing(&["customer-records", "api-keys"]),
            asset("browser")
                .with_technology(Technology::Browser)
                .with_raa(0.1)
                .with_encryption(archrisk_analysis::model::Encryption::EndUserIndividualKey)
                .with_link(https_to("browser-to-api", "api").sending(&["sessions"])),
            monitoring("logs").with_tags(&["unprivileged"]),
            asset("legacy")
                .out_of_scope()
                .storing(&["customer-records"])
                .with_link(https_to("legacy-to-db", "db").sending(&["customer-records"])),
        ],
        vec![
            data("customer-records", Confidentiality::StrictlyConfidential).with_tags(&["PII"]),
            data("sessions", Confidentiality::Confidential),
            data("api-keys", Confidentiality::Confidential)
                .with_tags(&["credential", "credential-lifetime:long"]),
        ],
    )
}
