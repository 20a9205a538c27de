//! Tag matching over entity tag sets.
//!
//! Tags are opaque, case-sensitive strings compared by exact equality.
//! Structured tags use the `family:value` convention, e.g.
//! `credential-lifetime:short`.

pub mod credential;

use std::collections::BTreeSet;

pub use credential::CredentialLifetime;

/// Separates a tag family from its value.
pub const FAMILY_DELIMITER: char = ':';

pub const PII: &str = "PII";
pub const FINANCIAL: &str = "financial";
pub const CREDENTIAL: &str = "credential";

/// Anything that carries a tag set.
pub trait Tagged {
    fn tags(&self) -> &BTreeSet<String>;

    /// True if at least one of `wanted` is in the tag set.
    fn is_tagged_with_any(&self, wanted: &[&str]) -> bool {
        tagged_with_any(self.tags(), wanted)
    }

    fn is_tagged_with(&self, tag: &str) -> bool {
        self.tags().contains(tag)
    }

    /// Values of every `family:value` tag in the given family, in tag order.
    fn tag_family_values<'a>(&'a self, family: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        Box::new(
            self.tags()
                .iter()
                .filter_map(move |t| split_family(t).filter(|(f, _)| *f == family).map(|(_, v)| v)),
        )
    }
}

/// Exact-match intersection test between a tag set and the wanted tags.
pub fn tagged_with_any(tags: &BTreeSet<String>, wanted: &[&str]) -> bool {
    wanted.iter().any(|w| tags.contains(*w))
}

/// Splits `family:value` at the first delimiter. Plain tags return `None`.
pub fn split_family(tag: &str) -> Option<(&str, &str)> {
    tag.split_once(FAMILY_DELIMITER)
}
