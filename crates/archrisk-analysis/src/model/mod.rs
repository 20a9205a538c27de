//! Read-only architecture model snapshot.
//!
//! Entities are built once by the host's loader and handed to the runner as
//! an immutable `ArchitectureModel`. All iteration is ordered by id.

pub mod graph;
pub mod types;

pub use graph::ArchitectureModel;
pub use types::{CommunicationLink, DataAsset, Encryption, Protocol, TechnicalAsset, Technology};
