//! Risk records, their synthetic identity, and severity computation.

pub mod assembler;
pub mod severity;
pub mod statistics;
pub mod types;

pub use assembler::RiskBuilder;
pub use severity::{SeverityCalculator, WeightedSeverity};
pub use statistics::RiskStatistics;
pub use types::{IdentityScope, Risk, SyntheticId};
