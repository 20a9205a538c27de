//! Property tests for lattice saturation, severity monotonicity, impact and
//! likelihood monotonicity, and synthetic id stability.

mod common;

use archrisk_analysis::lattice::{
    Confidentiality, DataBreachProbability, ExploitationImpact, ExploitationLikelihood, Ordinal,
    Severity,
};
use archrisk_analysis::model::{Encryption, Protocol};
use archrisk_analysis::risk::{SeverityCalculator, SyntheticId, WeightedSeverity};
use archrisk_analysis::rules::accidental_logging::AccidentalLoggingRule;
use archrisk_analysis::rules::insecure_handling::InsecureHandlingRule;
use archrisk_analysis::rules::missing_monitoring::MissingMonitoringRule;
use archrisk_analysis::rules::weak_crypto_at_rest::WeakCryptoAtRestRule;
use archrisk_analysis::rules::weak_crypto_in_transit::WeakCryptoInTransitRule;
use archrisk_analysis::rules::RiskRule;
use archrisk_analysis::RuleRunner;
use common::*;
use proptest::prelude::*;

fn likelihood() -> impl Strategy<Value = ExploitationLikelihood> {
    prop::sample::select(ExploitationLikelihood::all())
}

fn impact() -> impl Strategy<Value = ExploitationImpact> {
    prop::sample::select(ExploitationImpact::all())
}

fn confidentiality() -> impl Strategy<Value = Confidentiality> {
    prop::sample::select(Confidentiality::all())
}

/// Highest impact the rule reports for a model whose single data asset
/// has confidentiality `c`.
fn impact_for(rule: &dyn RiskRule, c: Confidentiality) -> Option<ExploitationImpact> {
    let m = model(
        vec![
            asset("svc")
                .with_encryption(Encryption::Transparent)
                .storing(&["d"])
                .with_link(link_to("logs", "mon"))
                .with_link(https_to("out", "peer").sending(&["d"])),
            monitoring("mon"),
            asset("peer"),
        ],
        vec![data("d", c)],
    );
    run(rule, &m).iter().map(|r| r.exploitation_impact).max()
}

/// Likelihood and impact of the monitoring finding for a lone asset of
/// confidentiality `c`, with or without a monitoring system in the model.
fn monitoring_rating(
    c: Confidentiality,
    with_monitor: bool,
) -> Option<(ExploitationLikelihood, ExploitationImpact)> {
    let mut assets = vec![asset("svc").with_confidentiality(c)];
    if with_monitor {
        assets.push(monitoring("mon"));
    }
    let m = model(assets, vec![]);
    run(&MissingMonitoringRule, &m)
        .iter()
        .find(|r| r.most_relevant_technical_asset_id == "svc")
        .map(|r| (r.exploitation_likelihood, r.exploitation_impact))
}

proptest! {
    #[test]
    fn decrement_never_leaves_the_scale(i in impact(), l in likelihood(), n in 0usize..10) {
        prop_assert!(i.decrement_by(n) >= ExploitationImpact::floor());
        prop_assert!(i.decrement_by(n) <= i);
        prop_assert!(l.decrement_by(n) >= ExploitationLikelihood::floor());
        prop_assert!(l.increment_by(n) <= ExploitationLikelihood::ceiling());
        prop_assert!(l.increment_by(n) >= l);

        let mut stepped = i;
        for _ in 0..n {
            stepped = stepped.decrement();
        }
        prop_assert_eq!(stepped, i.decrement_by(n));
    }

    #[test]
    fn breach_probability_saturates(n in 0usize..10) {
        let mut p = DataBreachProbability::Probable;
        for _ in 0..n {
            p = p.decrement();
        }
        prop_assert!(p >= DataBreachProbability::Improbable);
        prop_assert_eq!(DataBreachProbability::Improbable.decrement(), DataBreachProbability::Improbable);
    }

    #[test]
    fn severity_is_monotonic(l in likelihood(), i in impact()) {
        let s = WeightedSeverity;
        let base = s.calculate(l, i);
        prop_assert!(s.calculate(l.increment(), i) >= base);
        prop_assert!(s.calculate(l, i.increment()) >= base);
        prop_assert!(base >= Severity::Low && base <= Severity::Critical);
    }

    #[test]
    fn higher_data_confidentiality_never_lowers_impact(a in confidentiality(), b in confidentiality()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let rules: [&dyn RiskRule; 3] =
            [&AccidentalLoggingRule, &WeakCryptoAtRestRule, &WeakCryptoInTransitRule];
        for rule in rules {
            prop_assert!(impact_for(rule, hi) >= impact_for(rule, lo), "rule {}", rule.id());
        }
    }

    #[test]
    fn monitoring_rating_never_drops_as_classification_rises(
        a in confidentiality(),
        b in confidentiality(),
        with_monitor in any::<bool>(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (lo, hi) = (monitoring_rating(lo, with_monitor), monitoring_rating(hi, with_monitor));
        if let (Some((lo_l, lo_i)), Some((hi_l, hi_i))) = (lo, hi) {
            prop_assert!(hi_l >= lo_l);
            prop_assert!(hi_i >= lo_i);
        } else {
            prop_assert!(hi.is_some() || lo.is_none());
        }
    }

    #[test]
    fn insecure_handling_impact_tracks_data(c in confidentiality()) {
        let m = model(
            vec![asset("svc").storing(&["d"])],
            vec![data("d", c)],
        );
        let risks = run(&InsecureHandlingRule, &m);
        if c == Confidentiality::Public {
            prop_assert!(risks.is_empty());
        } else {
            prop_assert_eq!(risks.len(), 1);
            prop_assert_eq!(risks[0].exploitation_impact, ExploitationImpact::from_confidentiality(c));
        }
    }

    #[test]
    fn synthetic_ids_are_injective(
        a in "[a-z0-9-]{1,8}",
        b in "[a-z0-9-]{1,8}",
        c in "[a-z0-9-]{1,8}",
    ) {
        let ab = SyntheticId::compose("rule", &[a.as_str(), b.as_str()]);
        prop_assert_eq!(&ab, &SyntheticId::compose("rule", &[a.as_str(), b.as_str()]));
        let parts: Vec<&str> = ab.entity_ids().collect();
        prop_assert_eq!(parts, vec![a.as_str(), b.as_str()]);
        if b != c {
            prop_assert_ne!(ab, SyntheticId::compose("rule", &[a.as_str(), c.as_str()]));
        }
    }

    #[test]
    fn evaluation_is_stable_and_unique(
        conf in prop::collection::vec(confidentiality(), 1..6),
        raa in prop::collection::vec(0.0f64..=1.0, 1..6),
        encrypted in any::<bool>(),
    ) {
        let mut assets = Vec::new();
        let mut data_assets = Vec::new();
        for (i, (c, r)) in conf.iter().zip(raa.iter().cycle()).enumerate() {
            let id = format!("asset-{i}");
            let data_id = format!("data-{i}");
            let mut a = asset(&id).with_raa(*r).storing(&[data_id.as_str()]);
            if i > 0 {
                let protocol = if encrypted { Protocol::Https } else { Protocol::Http };
                a = a.with_link(
                    link_to(&format!("link-{i}"), "asset-0")
                        .with_protocol(protocol)
                        .sending(&[data_id.as_str()]),
                );
            }
            assets.push(a);
            data_assets.push(data(&data_id, *c));
        }
        let m = model(assets, data_assets);

        let runner = RuleRunner::new();
        let first = runner.evaluate(&m);
        let second = runner.evaluate(&m);
        let ids: Vec<_> = first.synthetic_ids().cloned().collect();
        prop_assert_eq!(&ids, &second.synthetic_ids().cloned().collect::<Vec<_>>());
        for pair in ids.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        prop_assert!(first.errors.is_empty());
    }
}
