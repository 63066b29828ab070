//! Matching aggregated packages against known-vulnerable versions.

mod rules;
mod table;

pub use rules::{RuleTable, BUILTIN_RULES};
pub use table::{evaluate, RuleTableChecker};

use crate::model::VulnerabilityFinding;
use crate::scanner::Aggregation;

pub trait VulnerabilityChecker {
    fn name(&self) -> &'static str;

    /// Returns findings sorted case-insensitively by package name.
    fn check(&self, packages: &Aggregation) -> Vec<VulnerabilityFinding>;
}

/// Whether a version found in the project is the one a rule flags.
///
/// Exact, case-sensitive comparison. Pre-releases and build metadata are
/// distinct versions.
pub fn is_vulnerable_version(candidate: &str, vulnerable_version: &str) -> bool {
    candidate == vulnerable_version
}

pub fn default_checker() -> RuleTableChecker {
    RuleTableChecker::new(RuleTable::builtin())
}
