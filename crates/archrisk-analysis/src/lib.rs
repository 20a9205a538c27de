//! Architecture risk engine.
//!
//! Evaluates a read-only architecture model (technical assets, data assets,
//! communication links) against a fixed catalog of detection rules and
//! produces a deduplicated, deterministically ordered list of risks.

pub mod lattice;
pub mod model;
pub mod risk;
pub mod rules;
pub mod runner;
pub mod tags;

pub use model::ArchitectureModel;
pub use risk::{Risk, SyntheticId};
pub use rules::{RiskRule, RuleRegistry};
pub use runner::{analyze, EvaluationResult, RuleRunner};
