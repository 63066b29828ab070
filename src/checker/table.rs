use super::{is_vulnerable_version, RuleTable, VulnerabilityChecker};
use crate::config::IgnoreConfig;
use crate::model::{compare_names, AggregatedPackage, VulnerabilityFinding, VulnerabilityRule};
use crate::scanner::Aggregation;
use tracing::debug;

/// Checks packages against a fixed [`RuleTable`].
pub struct RuleTableChecker {
    rules: RuleTable,
    ignore: IgnoreConfig,
}

impl RuleTableChecker {
    pub fn new(rules: RuleTable) -> Self {
        Self {
            rules,
            ignore: IgnoreConfig::default(),
        }
    }

    /// Packages matching the ignore list are never reported.
    pub fn with_ignore(mut self, ignore: IgnoreConfig) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }
}

impl VulnerabilityChecker for RuleTableChecker {
    fn name(&self) -> &'static str {
        "rule table"
    }

    fn check(&self, packages: &Aggregation) -> Vec<VulnerabilityFinding> {
        let mut findings: Vec<VulnerabilityFinding> = self
            .rules
            .to_rules()
            .iter()
            .filter(|rule| {
                let ignored = self.ignore.should_ignore_package(&rule.package_name);
                if ignored {
                    debug!(package = %rule.package_name, "ignoring package by config");
                }
                !ignored
            })
            // Rules for packages the project doesn't use are not findings.
            .filter_map(|rule| {
                packages
                    .get(&rule.package_name)
                    .map(|package| evaluate(package, rule))
            })
            .collect();

        findings.sort_by(|a, b| compare_names(&a.package, &b.package));
        findings
    }
}

/// Compares every version of `package` against `rule`.
pub fn evaluate(package: &AggregatedPackage, rule: &VulnerabilityRule) -> VulnerabilityFinding {
    let project_versions = package.distinct_versions();
    let matched_versions: Vec<String> = project_versions
        .iter()
        .filter(|version| is_vulnerable_version(version, &rule.vulnerable_version))
        .cloned()
        .collect();

    VulnerabilityFinding {
        package: package.name.clone(),
        is_vulnerable: !matched_versions.is_empty(),
        project_versions,
        vulnerable_version: rule.vulnerable_version.clone(),
        matched_versions,
    }
}
