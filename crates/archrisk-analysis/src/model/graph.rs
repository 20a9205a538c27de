//! The query surface the rules walk.

use std::collections::{BTreeMap, BTreeSet};

use archrisk_core::errors::{EntityKind, ModelError};

use super::types::{CommunicationLink, DataAsset, TechnicalAsset};
use crate::lattice::{Availability, Confidentiality, Integrity};
use crate::risk::SyntheticId;

/// An immutable, validated snapshot of the architecture model.
///
/// Construction validates referential integrity, so every id reachable
/// through the query methods resolves.
#[derive(Debug, Clone, Default)]
pub struct ArchitectureModel {
    technical_assets: BTreeMap<String, TechnicalAsset>,
    data_assets: BTreeMap<String, DataAsset>,
    /// link id -> (source asset id, index into its `communication_links`).
    links: BTreeMap<String, (String, usize)>,
    stored_by: BTreeMap<String, BTreeSet<String>>,
    processed_by: BTreeMap<String, BTreeSet<String>>,
}

impl ArchitectureModel {
    /// Builds and validates a snapshot.
    pub fn new(
        technical_assets: Vec<TechnicalAsset>,
        data_assets: Vec<DataAsset>,
    ) -> Result<Self, ModelError> {
        let mut model = Self::default();

        for data in data_assets {
            check_id(&data.id)?;
            if model.data_assets.contains_key(&data.id) {
                return Err(ModelError::DuplicateId {
                    kind: EntityKind::DataAsset,
                    id: data.id,
                });
            }
            model.data_assets.insert(data.id.clone(), data);
        }

        for mut asset in technical_assets {
            check_id(&asset.id)?;
            // Loaders may omit the source; it is implied by ownership.
            for link in &mut asset.communication_links {
                if link.source_id.is_empty() {
                    link.source_id = asset.id.clone();
                }
            }
            if model.technical_assets.contains_key(&asset.id) {
                return Err(ModelError::DuplicateId {
                    kind: EntityKind::TechnicalAsset,
                    id: asset.id,
                });
            }
            if !(0.0..=1.0).contains(&asset.raa) {
                return Err(ModelError::InvalidRaa {
                    asset: asset.id.clone(),
                    value: asset.raa,
                });
            }
            model.technical_assets.insert(asset.id.clone(), asset);
        }

        model.index()?;
        Ok(model)
    }

    fn index(&mut self) -> Result<(), ModelError> {
        for asset in self.technical_assets.values() {
            for data_id in &asset.data_assets_stored {
                self.require_data(&asset.id, data_id)?;
                self.stored_by
                    .entry(data_id.clone())
                    .or_default()
                    .insert(asset.id.clone());
            }
            for data_id in &asset.data_assets_processed {
                self.require_data(&asset.id, data_id)?;
                self.processed_by
                    .entry(data_id.clone())
                    .or_default()
                    .insert(asset.id.clone());
            }
            for (i, link) in asset.communication_links.iter().enumerate() {
                check_id(&link.id)?;
                if link.source_id != asset.id {
                    return Err(ModelError::DanglingReference {
                        kind: EntityKind::TechnicalAsset,
                        owner: link.id.clone(),
                        target: link.source_id.clone(),
                    });
                }
                if !self.technical_assets.contains_key(&link.target_id) {
                    return Err(ModelError::DanglingReference {
                        kind: EntityKind::TechnicalAsset,
                        owner: link.id.clone(),
                        target: link.target_id.clone(),
                    });
                }
                for data_id in link.transferred_data_ids() {
                    self.require_data(&link.id, data_id)?;
                }
                if self
                    .links
                    .insert(link.id.clone(), (asset.id.clone(), i))
                    .is_some()
                {
                    return Err(ModelError::DuplicateId {
                        kind: EntityKind::CommunicationLink,
                        id: link.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    fn require_data(&self, owner: &str, data_id: &str) -> Result<(), ModelError> {
        if self.data_assets.contains_key(data_id) {
            Ok(())
        } else {
            Err(ModelError::DanglingReference {
                kind: EntityKind::DataAsset,
                owner: owner.to_string(),
                target: data_id.to_string(),
            })
        }
    }

    // ---- Technical assets ----

    /// All technical assets, ordered by id.
    pub fn technical_assets(&self) -> impl Iterator<Item = &TechnicalAsset> + '_ {
        self.technical_assets.values()
    }

    /// In-scope technical assets, ordered by id.
    pub fn in_scope_technical_assets(&self) -> impl Iterator<Item = &TechnicalAsset> + '_ {
        self.technical_assets.values().filter(|a| a.is_in_scope())
    }

    pub fn technical_asset(&self, id: &str) -> Option<&TechnicalAsset> {
        self.technical_assets.get(id)
    }

    pub fn technical_asset_count(&self) -> usize {
        self.technical_assets.len()
    }

    /// True if any asset, in scope or not, is monitoring-class.
    pub fn has_monitoring(&self) -> bool {
        self.technical_assets
            .values()
            .any(|a| a.technology.is_monitoring())
    }

    // ---- Data assets ----

    /// All data assets, ordered by id.
    pub fn data_assets(&self) -> impl Iterator<Item = &DataAsset> + '_ {
        self.data_assets.values()
    }

    pub fn data_asset(&self, id: &str) -> Option<&DataAsset> {
        self.data_assets.get(id)
    }

    /// Data assets carrying at least one of `tags`, ordered by id.
    pub fn data_assets_tagged_with_any<'a>(
        &'a self,
        tags: &'a [&'a str],
    ) -> impl Iterator<Item = &'a DataAsset> + 'a {
        use crate::tags::Tagged;
        self.data_assets
            .values()
            .filter(move |d| d.is_tagged_with_any(tags))
    }

    /// Data stored by `asset`, ordered by id.
    pub fn data_assets_stored<'a>(
        &'a self,
        asset: &'a TechnicalAsset,
    ) -> impl Iterator<Item = &'a DataAsset> + 'a {
        asset
            .data_assets_stored
            .iter()
            .filter_map(move |id| self.data_assets.get(id))
    }

    /// Data processed by `asset`, ordered by id.
    pub fn data_assets_processed<'a>(
        &'a self,
        asset: &'a TechnicalAsset,
    ) -> impl Iterator<Item = &'a DataAsset> + 'a {
        asset
            .data_assets_processed
            .iter()
            .filter_map(move |id| self.data_assets.get(id))
    }

    /// Data stored or processed by `asset`, each once, ordered by id.
    pub fn data_assets_handled<'a>(
        &'a self,
        asset: &'a TechnicalAsset,
    ) -> impl Iterator<Item = &'a DataAsset> + 'a {
        asset
            .handled_data_ids()
            .into_iter()
            .filter_map(move |id| self.data_assets.get(id))
    }

    /// Assets storing `data`, ordered by id.
    pub fn stored_by<'a>(&'a self, data: &DataAsset) -> impl Iterator<Item = &'a TechnicalAsset> + 'a {
        self.assets_in(self.stored_by.get(&data.id))
    }

    /// Assets processing `data`, ordered by id.
    pub fn processed_by<'a>(
        &'a self,
        data: &DataAsset,
    ) -> impl Iterator<Item = &'a TechnicalAsset> + 'a {
        self.assets_in(self.processed_by.get(&data.id))
    }

    fn assets_in<'a>(
        &'a self,
        ids: Option<&'a BTreeSet<String>>,
    ) -> impl Iterator<Item = &'a TechnicalAsset> + 'a {
        ids.into_iter()
            .flatten()
            .filter_map(move |id| self.technical_assets.get(id))
    }

    // ---- Communication links ----

    /// All communication links, ordered by link id.
    pub fn communication_links(&self) -> impl Iterator<Item = &CommunicationLink> + '_ {
        self.links.values().filter_map(move |(source, i)| {
            self.technical_assets
                .get(source)
                .and_then(|a| a.communication_links.get(*i))
        })
    }

    pub fn communication_link(&self, id: &str) -> Option<&CommunicationLink> {
        let (source, i) = self.links.get(id)?;
        self.technical_assets.get(source)?.communication_links.get(*i)
    }

    pub fn link_source(&self, link: &CommunicationLink) -> Option<&TechnicalAsset> {
        self.technical_assets.get(&link.source_id)
    }

    pub fn link_target(&self, link: &CommunicationLink) -> Option<&TechnicalAsset> {
        self.technical_assets.get(&link.target_id)
    }

    /// Outgoing links of `asset` whose target is monitoring-class, ordered by link id.
    pub fn monitoring_links<'a>(
        &'a self,
        asset: &'a TechnicalAsset,
    ) -> impl Iterator<Item = &'a CommunicationLink> + 'a {
        let mut links: Vec<&CommunicationLink> = asset
            .communication_links
            .iter()
            .filter(|l| {
                self.link_target(l)
                    .is_some_and(|t| t.technology.is_monitoring())
            })
            .collect();
        links.sort_by(|a, b| a.id.cmp(&b.id));
        links.into_iter()
    }

    /// Whether `asset` sends to at least one monitoring-class target.
    pub fn links_to_monitoring(&self, asset: &TechnicalAsset) -> bool {
        self.monitoring_links(asset).next().is_some()
    }

    // ---- Derived classification ----

    /// Max of the asset's own confidentiality and that of all data it handles.
    pub fn highest_confidentiality(&self, asset: &TechnicalAsset) -> Confidentiality {
        self.data_assets_handled(asset)
            .map(|d| d.confidentiality)
            .fold(asset.confidentiality, Confidentiality::max)
    }

    pub fn highest_integrity(&self, asset: &TechnicalAsset) -> Integrity {
        self.data_assets_handled(asset)
            .map(|d| d.integrity)
            .fold(asset.integrity, Integrity::max)
    }

    pub fn highest_availability(&self, asset: &TechnicalAsset) -> Availability {
        self.data_assets_handled(asset)
            .map(|d| d.availability)
            .fold(asset.availability, Availability::max)
    }

    /// Sum of attacker attractiveness over the asset's highest C, I, and A.
    pub fn sensitivity_score(&self, asset: &TechnicalAsset) -> u32 {
        self.highest_confidentiality(asset).attacker_attractiveness()
            + self.highest_integrity(asset).attacker_attractiveness()
            + self.highest_availability(asset).attacker_attractiveness()
    }
}

fn check_id(id: &str) -> Result<(), ModelError> {
    if id.contains(SyntheticId::DELIMITER) {
        return Err(ModelError::ReservedDelimiter {
            id: id.to_string(),
            delimiter: SyntheticId::DELIMITER,
        });
    }
    Ok(())
}
