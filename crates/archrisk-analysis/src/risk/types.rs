//! The `Risk` record and its synthetic identity.

use std::fmt;

use serde::{Serialize, Serializer};
use smallvec::SmallVec;

use crate::lattice::{DataBreachProbability, ExploitationImpact, ExploitationLikelihood, Severity};
use crate::rules::RiskCategory;

/// Stable identity of a finding: category id plus one to three entity ids,
/// joined with `@`. Equal ids mean the same finding across runs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SyntheticId(String);

impl SyntheticId {
    /// Reserved; model ids containing it are rejected at validation.
    pub const DELIMITER: char = '@';

    /// Joins the category id with the given entity ids, in order.
    pub fn compose(category_id: &str, parts: &[&str]) -> Self {
        let mut id = String::with_capacity(
            category_id.len() + parts.iter().map(|p| p.len() + 1).sum::<usize>(),
        );
        id.push_str(category_id);
        for part in parts {
            id.push(Self::DELIMITER);
            id.push_str(part);
        }
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn category_id(&self) -> &str {
        self.0.split(Self::DELIMITER).next().unwrap_or_default()
    }

    /// The entity id components, in composition order.
    pub fn entity_ids(&self) -> impl Iterator<Item = &str> {
        self.0.split(Self::DELIMITER).skip(1)
    }
}

impl fmt::Display for SyntheticId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which referenced entities make up a risk's synthetic id.
/// Components always appear in the order asset, data, link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityScope {
    TechnicalAsset,
    TechnicalAssetAndData,
    CommunicationLink,
}

/// A single finding produced by a detection rule.
#[derive(Debug, Clone, Serialize)]
pub struct Risk {
    #[serde(rename = "category_id", serialize_with = "serialize_category_id")]
    pub category: &'static RiskCategory,
    pub severity: Severity,
    pub exploitation_likelihood: ExploitationLikelihood,
    pub exploitation_impact: ExploitationImpact,
    pub title: String,
    pub most_relevant_technical_asset_id: String,
    pub most_relevant_data_asset_id: Option<String>,
    pub most_relevant_communication_link_id: Option<String>,
    pub data_breach_probability: DataBreachProbability,
    pub data_breach_technical_asset_ids: SmallVec<[String; 2]>,
    pub synthetic_id: SyntheticId,
}

impl Risk {
    pub fn category_id(&self) -> &'static str {
        self.category.id
    }
}

fn serialize_category_id<S: Serializer>(
    category: &&'static RiskCategory,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(category.id)
}
