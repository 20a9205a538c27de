//! Aggregate counts over an evaluation's risks.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::Serialize;

use super::types::Risk;
use crate::lattice::Severity;

/// Per-severity and per-category finding counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RiskStatistics {
    pub total: usize,
    pub by_severity: BTreeMap<Severity, usize>,
    pub by_category: BTreeMap<String, usize>,
}

impl RiskStatistics {
    pub fn from_risks(risks: &[Risk]) -> Self {
        let mut by_severity: FxHashMap<Severity, usize> = FxHashMap::default();
        let mut by_category: FxHashMap<&'static str, usize> = FxHashMap::default();
        for risk in risks {
            *by_severity.entry(risk.severity).or_insert(0) += 1;
            *by_category.entry(risk.category.id).or_insert(0) += 1;
        }
        Self {
            total: risks.len(),
            by_severity: by_severity.into_iter().collect(),
            by_category: by_category
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        }
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.by_severity.get(&severity).copied().unwrap_or(0)
    }

    /// The highest severity present, if any.
    pub fn highest_severity(&self) -> Option<Severity> {
        self.by_severity.keys().next_back().copied()
    }
}
