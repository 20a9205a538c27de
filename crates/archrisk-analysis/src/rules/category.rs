//! Static risk category metadata.

use std::fmt;

use serde::Serialize;

/// STRIDE threat class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stride {
    Spoofing,
    Tampering,
    Repudiation,
    InformationDisclosure,
    DenialOfService,
    ElevationOfPrivilege,
}

impl fmt::Display for Stride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spoofing => write!(f, "Spoofing"),
            Self::Tampering => write!(f, "Tampering"),
            Self::Repudiation => write!(f, "Repudiation"),
            Self::InformationDisclosure => write!(f, "Information Disclosure"),
            Self::DenialOfService => write!(f, "Denial of Service"),
            Self::ElevationOfPrivilege => write!(f, "Elevation of Privilege"),
        }
    }
}

/// Which function in the organisation owns the mitigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskFunction {
    BusinessSide,
    Architecture,
    Development,
    Operations,
}

/// Static description of a rule's findings. One `const` per rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub impact: &'static str,
    pub asvs: &'static str,
    pub cheat_sheet: &'static str,
    pub action: &'static str,
    pub mitigation: &'static str,
    pub check: &'static str,
    pub function: RiskFunction,
    pub stride: Stride,
    pub detection_logic: &'static str,
    pub risk_assessment: &'static str,
    pub false_positives: &'static str,
    pub model_failure_possible_reason: bool,
    pub cwe: u32,
}
