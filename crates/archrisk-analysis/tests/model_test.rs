//! Model snapshot validation and query surface.

mod common;

use archrisk_analysis::lattice::{Confidentiality, Criticality};
use archrisk_analysis::model::{ArchitectureModel, CommunicationLink, Protocol, TechnicalAsset};
use archrisk_analysis::tags::Tagged;
use archrisk_core::errors::{EntityKind, ErrorCode, ModelError};
use common::*;

#[test]
fn test_dangling_link_target_is_rejected() {
    let err = ArchitectureModel::new(vec![asset("a").with_link(link_to("l", "ghost"))], vec![])
        .unwrap_err();
    match &err {
        ModelError::DanglingReference { kind, owner, target } => {
            assert_eq!(*kind, EntityKind::TechnicalAsset);
            assert_eq!(owner, "l");
            assert_eq!(target, "ghost");
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(err.to_string(), "l references unknown technical asset 'ghost'");
    assert_eq!(err.error_code(), "MODEL_INTEGRITY");
}

#[test]
fn test_dangling_data_reference_is_rejected() {
    let stored = ArchitectureModel::new(vec![asset("a").storing(&["nope"])], vec![]);
    assert!(matches!(
        stored,
        Err(ModelError::DanglingReference { kind: EntityKind::DataAsset, .. })
    ));

    let sent = ArchitectureModel::new(
        vec![asset("a").with_link(link_to("l", "b").sending(&["nope"])), asset("b")],
        vec![],
    );
    assert!(matches!(
        sent,
        Err(ModelError::DanglingReference { kind: EntityKind::DataAsset, .. })
    ));
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let assets = ArchitectureModel::new(vec![asset("a"), asset("a")], vec![]);
    assert!(matches!(
        assets,
        Err(ModelError::DuplicateId { kind: EntityKind::TechnicalAsset, .. })
    ));

    let links = ArchitectureModel::new(
        vec![
            asset("a").with_link(link_to("l", "b")),
            asset("b").with_link(link_to("l", "a")),
        ],
        vec![],
    );
    assert!(matches!(
        links,
        Err(ModelError::DuplicateId { kind: EntityKind::CommunicationLink, .. })
    ));
}

#[test]
fn test_raa_and_delimiter_checks() {
    assert!(matches!(
        ArchitectureModel::new(vec![asset("a").with_raa(1.5)], vec![]),
        Err(ModelError::InvalidRaa { .. })
    ));
    assert!(matches!(
        ArchitectureModel::new(vec![asset("a@b")], vec![]),
        Err(ModelError::ReservedDelimiter { delimiter: '@', .. })
    ));
}

#[test]
fn test_link_source_defaults_to_owner() {
    let mut svc = asset("svc");
    svc.communication_links.push(CommunicationLink::new("l", "db"));
    let m = model(vec![svc, asset("db")], vec![]);

    let link = m.communication_link("l").unwrap();
    assert_eq!(link.source_id, "svc");
    assert_eq!(m.link_source(link).unwrap().id, "svc");
    assert_eq!(m.link_target(link).unwrap().id, "db");
}

#[test]
fn test_link_with_foreign_source_is_rejected() {
    let mut svc = asset("svc");
    let mut link = CommunicationLink::new("l", "db");
    link.source_id = "db".to_string();
    svc.communication_links.push(link);
    assert!(ArchitectureModel::new(vec![svc, asset("db")], vec![]).is_err());
}

#[test]
fn test_iteration_is_id_ordered() {
    let m = model(
        vec![
            asset("zeta").with_link(link_to("z-link", "alpha")),
            asset("alpha").with_link(link_to("a-link", "zeta")),
            asset("mid").out_of_scope(),
        ],
        vec![data("d2", Confidentiality::Public), data("d1", Confidentiality::Public)],
    );
    let assets: Vec<_> = m.technical_assets().map(|a| a.id.as_str()).collect();
    assert_eq!(assets, vec!["alpha", "mid", "zeta"]);
    let in_scope: Vec<_> = m.in_scope_technical_assets().map(|a| a.id.as_str()).collect();
    assert_eq!(in_scope, vec!["alpha", "zeta"]);
    let data_ids: Vec<_> = m.data_assets().map(|d| d.id.as_str()).collect();
    assert_eq!(data_ids, vec!["d1", "d2"]);
    let links: Vec<_> = m.communication_links().map(|l| l.id.as_str()).collect();
    assert_eq!(links, vec!["a-link", "z-link"]);
    assert_eq!(m.technical_asset_count(), 3);
}

fn asset_ids<'a>(assets: impl Iterator<Item = &'a TechnicalAsset>) -> Vec<&'a str> {
    assets.map(|a| a.id.as_str()).collect()
}

#[test]
fn test_data_asset_reverse_lookups() {
    let m = model(
        vec![
            asset("b").storing(&["d"]),
            asset("a").storing(&["d"]).processing(&["d", "e"]),
            asset("c").processing(&["e"]),
        ],
        vec![data("d", Confidentiality::Public), data("e", Confidentiality::Public)],
    );
    let d = m.data_asset("d").unwrap();
    let e = m.data_asset("e").unwrap();
    assert_eq!(asset_ids(m.stored_by(d)), vec!["a", "b"]);
    assert_eq!(asset_ids(m.processed_by(e)), vec!["a", "c"]);
    assert!(m.stored_by(e).next().is_none());

    let a = m.technical_asset("a").unwrap();
    let handled: Vec<_> = m.data_assets_handled(a).map(|d| d.id.as_str()).collect();
    assert_eq!(handled, vec!["d", "e"]);
}

#[test]
fn test_highest_classification_and_sensitivity() {
    let m = model(
        vec![asset("svc")
            .with_classification(
                Confidentiality::Internal,
                Criticality::Critical,
                Criticality::Operational,
            )
            .processing(&["d"])],
        vec![data("d", Confidentiality::StrictlyConfidential).with_tags(&["PII"])],
    );
    let svc = m.technical_asset("svc").unwrap();
    assert_eq!(m.highest_confidentiality(svc), Confidentiality::StrictlyConfidential);
    assert_eq!(m.highest_integrity(svc), Criticality::Critical);
    assert_eq!(m.highest_availability(svc), Criticality::Operational);
    assert_eq!(m.sensitivity_score(svc), 55 + 21 + 8);

    let tagged: Vec<_> = m.data_assets_tagged_with_any(&["PII"]).map(|d| d.id.as_str()).collect();
    assert_eq!(tagged, vec!["d"]);
}

#[test]
fn test_monitoring_links_sorted_by_id() {
    let m = model(
        vec![
            asset("svc")
                .with_link(link_to("z", "mon-1"))
                .with_link(link_to("m", "db"))
                .with_link(link_to("a", "mon-2")),
            asset("db"),
            monitoring("mon-1"),
            monitoring("mon-2"),
        ],
        vec![],
    );
    let svc = m.technical_asset("svc").unwrap();
    let ids: Vec<_> = m.monitoring_links(svc).map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "z"]);
    assert!(m.links_to_monitoring(svc));
    assert!(m.has_monitoring());
    assert!(!m.links_to_monitoring(m.technical_asset("db").unwrap()));
}

#[test]
fn test_protocol_encryption() {
    assert!(Protocol::Https.is_encrypted());
    assert!(Protocol::JdbcEncrypted.is_encrypted());
    assert!(!Protocol::Http.is_encrypted());
    assert!(!Protocol::Unknown.is_encrypted());
}

#[test]
fn test_tag_families() {
    let d = data("k", Confidentiality::Public).with_tags(&[
        "credential",
        "credential-lifetime:long",
        "credential-lifetime:auto-rotation",
        "owner:team-a",
    ]);
    let values: Vec<_> = d.tag_family_values("credential-lifetime").collect();
    assert_eq!(values, vec!["auto-rotation", "long"]);
    assert!(d.is_tagged_with("credential"));
    assert!(!d.is_tagged_with("Credential"));
    assert!(d.is_tagged_with_any(&["nope", "owner:team-a"]));
}

#[test]
fn test_model_deserializes_with_defaults() {
    let json = r#"{
        "id": "svc",
        "title": "Service",
        "technology": "monitoring",
        "confidentiality": "strictly-confidential",
        "tags": ["non-root"],
        "communication_links": [{ "id": "l", "target_id": "svc", "protocol": "https" }]
    }"#;
    let svc: TechnicalAsset = serde_json::from_str(json).unwrap();
    assert!(svc.technology.is_monitoring());
    assert_eq!(svc.confidentiality, Confidentiality::StrictlyConfidential);
    assert_eq!(svc.integrity, Criticality::Archive);
    assert_eq!(svc.raa, 0.0);

    let m = model(vec![svc], vec![]);
    assert_eq!(m.communication_link("l").unwrap().source_id, "svc");
}
