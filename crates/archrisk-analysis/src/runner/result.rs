//! Output of one evaluation pass.

use archrisk_core::errors::DetectionError;

use crate::lattice::Severity;
use crate::risk::{Risk, RiskStatistics, SyntheticId};

/// Sorted, deduplicated findings plus non-fatal rule failures.
#[derive(Debug)]
pub struct EvaluationResult {
    /// Ordered by synthetic id, unique per synthetic id.
    pub risks: Vec<Risk>,
    /// One entry per rule that panicked.
    pub errors: Vec<DetectionError>,
    pub statistics: RiskStatistics,
}

impl EvaluationResult {
    /// No findings and no rule failures.
    pub fn is_clean(&self) -> bool {
        self.risks.is_empty() && self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn synthetic_ids(&self) -> impl Iterator<Item = &SyntheticId> {
        self.risks.iter().map(|r| &r.synthetic_id)
    }

    pub fn find(&self, synthetic_id: &str) -> Option<&Risk> {
        self.risks
            .binary_search_by(|r| r.synthetic_id.as_str().cmp(synthetic_id))
            .ok()
            .map(|i| &self.risks[i])
    }

    /// Findings of one category, in synthetic id order.
    pub fn risks_for_category<'a>(&'a self, category_id: &'a str) -> impl Iterator<Item = &'a Risk> + 'a {
        self.risks.iter().filter(move |r| r.category.id == category_id)
    }

    /// Findings at or above `severity`.
    pub fn at_least(&self, severity: Severity) -> impl Iterator<Item = &Risk> {
        self.risks.iter().filter(move |r| r.severity >= severity)
    }
}
