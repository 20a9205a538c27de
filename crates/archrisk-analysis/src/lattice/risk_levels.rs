//! Likelihood, impact, breach probability, and severity scales.

use super::classification::Confidentiality;
use super::ordinal::Ordinal;

ordinal_enum! {
    ExploitationLikelihood, "likelihood" {
        Unlikely => "unlikely",
        Likely => "likely",
        VeryLikely => "very-likely",
        Frequent => "frequent",
    }
}

ordinal_enum! {
    ExploitationImpact, "impact" {
        Low => "low",
        Medium => "medium",
        High => "high",
        VeryHigh => "very-high",
    }
}

ordinal_enum! {
    DataBreachProbability, "data breach probability" {
        Improbable => "improbable",
        Possible => "possible",
        Probable => "probable",
    }
}

ordinal_enum! {
    /// Output tier of a severity calculation.
    Severity, "severity" {
        Low => "low",
        Medium => "medium",
        Elevated => "elevated",
        High => "high",
        Critical => "critical",
    }
}

impl ExploitationLikelihood {
    /// Weight used by the default severity function (1..=4).
    pub fn weight(&self) -> u32 {
        self.rank() as u32 + 1
    }
}

impl ExploitationImpact {
    /// Weight used by the default severity function (1..=4).
    pub fn weight(&self) -> u32 {
        self.rank() as u32 + 1
    }

    /// Impact tier for exposing data of the given confidentiality.
    /// Public and internal data both map to `Low`.
    pub fn from_confidentiality(confidentiality: Confidentiality) -> Self {
        match confidentiality {
            Confidentiality::Public | Confidentiality::Internal => Self::Low,
            Confidentiality::Restricted => Self::Medium,
            Confidentiality::Confidential => Self::High,
            Confidentiality::StrictlyConfidential => Self::VeryHigh,
        }
    }
}
