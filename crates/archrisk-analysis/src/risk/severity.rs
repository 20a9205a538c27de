//! Severity as a function of likelihood and impact.

use crate::lattice::{ExploitationImpact, ExploitationLikelihood, Severity};

/// Maps (likelihood, impact) to a severity.
///
/// Implementations must be total and non-decreasing in both arguments.
pub trait SeverityCalculator: Send + Sync {
    fn calculate(&self, likelihood: ExploitationLikelihood, impact: ExploitationImpact) -> Severity;
}

/// Product of the 1..=4 weights of likelihood and impact, bucketed:
/// ≤1 low, ≤3 medium, ≤8 elevated, ≤12 high, otherwise critical.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedSeverity;

impl SeverityCalculator for WeightedSeverity {
    fn calculate(&self, likelihood: ExploitationLikelihood, impact: ExploitationImpact) -> Severity {
        match likelihood.weight() * impact.weight() {
            0..=1 => Severity::Low,
            2..=3 => Severity::Medium,
            4..=8 => Severity::Elevated,
            9..=12 => Severity::High,
            _ => Severity::Critical,
        }
    }
}
