//! The `credential-lifetime:*` tag family.

use std::collections::BTreeSet;

pub const CREDENTIAL_LIFETIME_FAMILY: &str = "credential-lifetime";

/// Lifetime qualifier attached to a credential data asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialLifetime {
    UnknownOrHardcoded,
    Unlimited,
    Long,
    Short,
    AutoRotation,
    ManualRotation,
}

impl CredentialLifetime {
    /// Lifetime sub-tags in the order they are checked; the first match wins.
    pub const PRECEDENCE: [CredentialLifetime; 4] =
        [Self::UnknownOrHardcoded, Self::Unlimited, Self::Long, Self::Short];

    pub const ROTATION: [CredentialLifetime; 2] = [Self::AutoRotation, Self::ManualRotation];

    pub fn tag(&self) -> &'static str {
        match self {
            Self::UnknownOrHardcoded => "credential-lifetime:unknown/hardcoded",
            Self::Unlimited => "credential-lifetime:unlimited",
            Self::Long => "credential-lifetime:long",
            Self::Short => "credential-lifetime:short",
            Self::AutoRotation => "credential-lifetime:auto-rotation",
            Self::ManualRotation => "credential-lifetime:manual-rotation",
        }
    }

    pub fn all() -> &'static [CredentialLifetime] {
        &[
            Self::UnknownOrHardcoded,
            Self::Unlimited,
            Self::Long,
            Self::Short,
            Self::AutoRotation,
            Self::ManualRotation,
        ]
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::all().iter().copied().find(|l| l.tag() == tag)
    }

    pub fn is_rotation(&self) -> bool {
        Self::ROTATION.contains(self)
    }

    /// Lifetime qualifiers present in a tag set, in tag order.
    pub fn declared(tags: &BTreeSet<String>) -> impl Iterator<Item = Self> + '_ {
        tags.iter().filter_map(|t| Self::from_tag(t))
    }

    /// The lifetime class of a tag set. A credential with no lifetime
    /// sub-tag is treated as unknown/hardcoded.
    pub fn classify(tags: &BTreeSet<String>) -> Self {
        let declared: Vec<Self> = Self::declared(tags).collect();
        Self::PRECEDENCE
            .iter()
            .copied()
            .find(|l| declared.contains(l))
            .unwrap_or(Self::UnknownOrHardcoded)
    }

    /// Whether the tag set declares any rotation scheme.
    pub fn is_rotated(tags: &BTreeSet<String>) -> bool {
        Self::declared(tags).any(|l| l.is_rotation())
    }

    /// Whether the set carries the unknown/hardcoded tag itself, as opposed
    /// to falling back to it for lack of a lifetime.
    pub fn is_explicitly_hardcoded(tags: &BTreeSet<String>) -> bool {
        tags.contains(Self::UnknownOrHardcoded.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn bare_credential_is_hardcoded() {
        assert_eq!(
            CredentialLifetime::classify(&set(&["credential"])),
            CredentialLifetime::UnknownOrHardcoded
        );
    }

    #[test]
    fn hardcoded_beats_short() {
        let tags = set(&[
            "credential-lifetime:short",
            "credential-lifetime:unknown/hardcoded",
        ]);
        assert_eq!(CredentialLifetime::classify(&tags), CredentialLifetime::UnknownOrHardcoded);
    }

    #[test]
    fn long_beats_short() {
        let tags = set(&["credential-lifetime:short", "credential-lifetime:long"]);
        assert_eq!(CredentialLifetime::classify(&tags), CredentialLifetime::Long);
    }

    #[test]
    fn tag_round_trip() {
        for l in CredentialLifetime::all() {
            assert_eq!(CredentialLifetime::from_tag(l.tag()), Some(*l));
        }
        assert!(CredentialLifetime::is_rotated(&set(&["credential-lifetime:auto-rotation"])));
        assert!(!CredentialLifetime::is_rotated(&set(&["credential"])));
        assert_eq!(CredentialLifetime::from_tag("credential-lifetime:forever"), None);
    }

    #[test]
    fn implicit_hardcoded_is_not_explicit() {
        let bare = set(&["credential", "credential-lifetime:auto-rotation"]);
        assert_eq!(CredentialLifetime::classify(&bare), CredentialLifetime::UnknownOrHardcoded);
        assert!(!CredentialLifetime::is_explicitly_hardcoded(&bare));
        assert!(CredentialLifetime::is_explicitly_hardcoded(&set(&[
            "credential-lifetime:unknown/hardcoded"
        ])));
    }
}
