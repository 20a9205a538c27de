//! Detection rule catalog: eight independent heuristics.
//!
//! Each rule implements `RiskRule` and is registered in the `RuleRegistry`.
//! A rule is a pure function of the model snapshot: it never mutates the
//! model and never sees another rule's output.

pub mod category;
pub mod registry;
pub mod traits;

pub mod accidental_logging;
pub mod credential_outside_vault;
pub mod insecure_handling;
pub mod missing_audit_log;
pub mod missing_monitoring;
pub mod privileged_user;
pub mod weak_crypto_at_rest;
pub mod weak_crypto_in_transit;

pub use category::{RiskCategory, RiskFunction, Stride};
pub use registry::RuleRegistry;
pub use traits::{RiskRule, RuleContext};
