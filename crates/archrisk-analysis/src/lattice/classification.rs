//! CIA classification tiers for technical and data assets.

ordinal_enum! {
    /// Confidentiality tier.
    Confidentiality, "confidentiality" {
        Public => "public",
        Internal => "internal",
        Restricted => "restricted",
        Confidential => "confidential",
        StrictlyConfidential => "strictly-confidential",
    }
}

ordinal_enum! {
    /// Criticality tier, shared by integrity and availability.
    Criticality, "criticality" {
        Archive => "archive",
        Operational => "operational",
        Important => "important",
        Critical => "critical",
        MissionCritical => "mission-critical",
    }
}

pub type Integrity = Criticality;
pub type Availability = Criticality;

impl Confidentiality {
    /// How attractive data at this tier is to an attacker.
    pub fn attacker_attractiveness(&self) -> u32 {
        match self {
            Self::Public => 8,
            Self::Internal => 13,
            Self::Restricted => 21,
            Self::Confidential => 34,
            Self::StrictlyConfidential => 55,
        }
    }
}

impl Criticality {
    pub fn attacker_attractiveness(&self) -> u32 {
        match self {
            Self::Archive => 5,
            Self::Operational => 8,
            Self::Important => 13,
            Self::Critical => 21,
            Self::MissionCritical => 34,
        }
    }
}

impl Default for Confidentiality {
    fn default() -> Self {
        Self::Public
    }
}

impl Default for Criticality {
    fn default() -> Self {
        Self::Archive
    }
}
