//! Builds `Risk` records for the rules.

use smallvec::SmallVec;

use super::severity::SeverityCalculator;
use super::types::{IdentityScope, Risk, SyntheticId};
use crate::lattice::{DataBreachProbability, ExploitationImpact, ExploitationLikelihood};
use crate::rules::RiskCategory;

/// Collects a rule's computed values, then derives severity and the
/// synthetic id in one place.
#[derive(Debug, Clone)]
pub struct RiskBuilder {
    category: &'static RiskCategory,
    technical_asset_id: String,
    title: String,
    likelihood: ExploitationLikelihood,
    impact: ExploitationImpact,
    data_asset_id: Option<String>,
    communication_link_id: Option<String>,
    breach_probability: DataBreachProbability,
    breach_asset_ids: SmallVec<[String; 2]>,
    identity: IdentityScope,
}

impl RiskBuilder {
    /// Starts a risk whose subject is `technical_asset_id`.
    /// Defaults: unlikely, low impact, improbable breach, identity on the asset.
    pub fn new(category: &'static RiskCategory, technical_asset_id: impl Into<String>) -> Self {
        Self {
            category,
            technical_asset_id: technical_asset_id.into(),
            title: category.title.to_string(),
            likelihood: ExploitationLikelihood::Unlikely,
            impact: ExploitationImpact::Low,
            data_asset_id: None,
            communication_link_id: None,
            breach_probability: DataBreachProbability::Improbable,
            breach_asset_ids: SmallVec::new(),
            identity: IdentityScope::TechnicalAsset,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn likelihood(mut self, likelihood: ExploitationLikelihood) -> Self {
        self.likelihood = likelihood;
        self
    }

    pub fn impact(mut self, impact: ExploitationImpact) -> Self {
        self.impact = impact;
        self
    }

    pub fn data_asset(mut self, id: impl Into<String>) -> Self {
        self.data_asset_id = Some(id.into());
        self
    }

    pub fn maybe_data_asset(mut self, id: Option<&str>) -> Self {
        self.data_asset_id = id.map(String::from);
        self
    }

    pub fn communication_link(mut self, id: impl Into<String>) -> Self {
        self.communication_link_id = Some(id.into());
        self
    }

    pub fn breach(
        mut self,
        probability: DataBreachProbability,
        asset_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.breach_probability = probability;
        self.breach_asset_ids = asset_ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn identity(mut self, scope: IdentityScope) -> Self {
        self.identity = scope;
        self
    }

    fn synthetic_id(&self) -> SyntheticId {
        let asset = Some(self.technical_asset_id.as_str());
        let data = self.data_asset_id.as_deref();
        let link = self.communication_link_id.as_deref();
        let parts: SmallVec<[&str; 3]> = match self.identity {
            IdentityScope::TechnicalAsset => asset.into_iter().collect(),
            IdentityScope::TechnicalAssetAndData => asset.into_iter().chain(data).collect(),
            IdentityScope::CommunicationLink => link.or(asset).into_iter().collect(),
        };
        SyntheticId::compose(self.category.id, &parts)
    }

    /// Finishes the risk, delegating severity to `severity`.
    pub fn build(self, severity: &dyn SeverityCalculator) -> Risk {
        let synthetic_id = self.synthetic_id();
        let mut breach_asset_ids = self.breach_asset_ids;
        breach_asset_ids.sort();
        breach_asset_ids.dedup();
        Risk {
            category: self.category,
            severity: severity.calculate(self.likelihood, self.impact),
            exploitation_likelihood: self.likelihood,
            exploitation_impact: self.impact,
            title: self.title,
            most_relevant_technical_asset_id: self.technical_asset_id,
            most_relevant_data_asset_id: self.data_asset_id,
            most_relevant_communication_link_id: self.communication_link_id,
            data_breach_probability: self.breach_probability,
            data_breach_technical_asset_ids: breach_asset_ids,
            synthetic_id,
        }
    }
}
