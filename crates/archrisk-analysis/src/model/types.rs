//! Model entities: technical assets, data assets, communication links.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::lattice::{Availability, Confidentiality, Integrity};
use crate::tags::Tagged;

/// Technology class of a technical asset. Only the classes the rules
/// distinguish are named; everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Technology {
    #[default]
    Other,
    WebServer,
    ApplicationServer,
    Database,
    FileServer,
    MessageQueue,
    ReverseProxy,
    LoadBalancer,
    Monitoring,
    Vault,
    Browser,
    Desktop,
    MobileApp,
    ClientSystem,
    IotDevice,
}

impl Technology {
    pub fn is_monitoring(&self) -> bool {
        matches!(self, Self::Monitoring)
    }

    pub fn is_vault(&self) -> bool {
        matches!(self, Self::Vault)
    }

    /// End-user or device-side technology.
    pub fn is_client(&self) -> bool {
        matches!(
            self,
            Self::Browser | Self::Desktop | Self::MobileApp | Self::ClientSystem | Self::IotDevice
        )
    }
}

/// At-rest encryption of a technical asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Encryption {
    #[default]
    None,
    Transparent,
    SymmetricSharedKey,
    AsymmetricSharedKey,
    EndUserIndividualKey,
}

impl Encryption {
    pub fn is_encrypted(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Transport protocol of a communication link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Protocol {
    #[default]
    Unknown,
    Http,
    Https,
    Ws,
    Wss,
    Ftp,
    Ftps,
    Sftp,
    Ssh,
    Ldap,
    Ldaps,
    Jdbc,
    JdbcEncrypted,
    Odbc,
    OdbcEncrypted,
    SqlAccessProtocol,
    SqlAccessProtocolEncrypted,
    Mqtt,
    BinaryEncrypted,
    Binary,
    TextEncrypted,
    Text,
    InProcessLibraryCall,
    LocalFileAccess,
}

impl Protocol {
    pub fn is_encrypted(&self) -> bool {
        matches!(
            self,
            Self::Https
                | Self::Wss
                | Self::Ftps
                | Self::Sftp
                | Self::Ssh
                | Self::Ldaps
                | Self::JdbcEncrypted
                | Self::OdbcEncrypted
                | Self::SqlAccessProtocolEncrypted
                | Self::BinaryEncrypted
                | Self::TextEncrypted
        )
    }
}

/// A component of the architecture: service, datastore, process.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TechnicalAsset {
    pub id: String,
    pub title: String,
    pub technology: Technology,
    pub confidentiality: Confidentiality,
    pub integrity: Integrity,
    pub availability: Availability,
    pub encryption: Encryption,
    /// Relative attacker attractiveness in [0, 1].
    pub raa: f64,
    pub tags: BTreeSet<String>,
    pub out_of_scope: bool,
    /// Outgoing links; this asset is the source of each.
    pub communication_links: Vec<CommunicationLink>,
    pub data_assets_stored: BTreeSet<String>,
    pub data_assets_processed: BTreeSet<String>,
}

impl TechnicalAsset {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_technology(mut self, technology: Technology) -> Self {
        self.technology = technology;
        self
    }

    pub fn with_classification(
        mut self,
        confidentiality: Confidentiality,
        integrity: Integrity,
        availability: Availability,
    ) -> Self {
        self.confidentiality = confidentiality;
        self.integrity = integrity;
        self.availability = availability;
        self
    }

    pub fn with_confidentiality(mut self, confidentiality: Confidentiality) -> Self {
        self.confidentiality = confidentiality;
        self
    }

    pub fn with_encryption(mut self, encryption: Encryption) -> Self {
        self.encryption = encryption;
        self
    }

    pub fn with_raa(mut self, raa: f64) -> Self {
        self.raa = raa;
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags.extend(tags.iter().map(|t| t.to_string()));
        self
    }

    pub fn out_of_scope(mut self) -> Self {
        self.out_of_scope = true;
        self
    }

    pub fn storing(mut self, data_ids: &[&str]) -> Self {
        self.data_assets_stored.extend(data_ids.iter().map(|d| d.to_string()));
        self
    }

    pub fn processing(mut self, data_ids: &[&str]) -> Self {
        self.data_assets_processed.extend(data_ids.iter().map(|d| d.to_string()));
        self
    }

    /// Adds an outgoing link. The link's source is forced to this asset.
    pub fn with_link(mut self, mut link: CommunicationLink) -> Self {
        link.source_id = self.id.clone();
        self.communication_links.push(link);
        self
    }

    pub fn is_in_scope(&self) -> bool {
        !self.out_of_scope
    }

    /// Ids of all data assets stored or processed, deduplicated and sorted.
    pub fn handled_data_ids(&self) -> BTreeSet<&str> {
        self.data_assets_stored
            .iter()
            .chain(self.data_assets_processed.iter())
            .map(String::as_str)
            .collect()
    }
}

impl Tagged for TechnicalAsset {
    fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }
}

/// A named unit of data with its own classification.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DataAsset {
    pub id: String,
    pub title: String,
    pub confidentiality: Confidentiality,
    pub integrity: Integrity,
    pub availability: Availability,
    pub tags: BTreeSet<String>,
}

impl DataAsset {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_classification(
        mut self,
        confidentiality: Confidentiality,
        integrity: Integrity,
        availability: Availability,
    ) -> Self {
        self.confidentiality = confidentiality;
        self.integrity = integrity;
        self.availability = availability;
        self
    }

    pub fn with_confidentiality(mut self, confidentiality: Confidentiality) -> Self {
        self.confidentiality = confidentiality;
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags.extend(tags.iter().map(|t| t.to_string()));
        self
    }
}

impl Tagged for DataAsset {
    fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }
}

/// A directed data flow from `source_id` to `target_id`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CommunicationLink {
    pub id: String,
    pub title: String,
    pub source_id: String,
    pub target_id: String,
    pub protocol: Protocol,
    pub data_assets_sent: BTreeSet<String>,
    pub data_assets_received: BTreeSet<String>,
}

impl CommunicationLink {
    pub fn new(id: impl Into<String>, target_id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            title: id.clone(),
            id,
            target_id: target_id.into(),
            ..Default::default()
        }
    }

    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    pub fn sending(mut self, data_ids: &[&str]) -> Self {
        self.data_assets_sent.extend(data_ids.iter().map(|d| d.to_string()));
        self
    }

    pub fn receiving(mut self, data_ids: &[&str]) -> Self {
        self.data_assets_received.extend(data_ids.iter().map(|d| d.to_string()));
        self
    }

    /// Ids of all data assets moved in either direction, sorted.
    pub fn transferred_data_ids(&self) -> BTreeSet<&str> {
        self.data_assets_sent
            .iter()
            .chain(self.data_assets_received.iter())
            .map(String::as_str)
            .collect()
    }
}
