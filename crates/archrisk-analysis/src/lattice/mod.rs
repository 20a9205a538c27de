//! Classification lattice: ordered enumerations with saturating steps.
//!
//! Every classification used by the rules is a totally ordered enum. Rules
//! compare and combine them with `Ord` (`>=`, `max`) and adjust them with
//! `Ordinal::increment` / `Ordinal::decrement`, which clamp at the ends of the
//! scale instead of wrapping.

#[macro_use]
mod ordinal;
pub mod classification;
pub mod risk_levels;

pub use classification::{Availability, Confidentiality, Criticality, Integrity};
pub use ordinal::{Ordinal, ParseLevelError};
pub use risk_levels::{DataBreachProbability, ExploitationImpact, ExploitationLikelihood, Severity};
