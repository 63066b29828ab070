use serde::Serialize;

/// A package version known to be vulnerable or compromised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VulnerabilityRule {
    pub package_name: String,
    pub vulnerable_version: String,
}

impl VulnerabilityRule {
    pub fn new(package_name: impl Into<String>, vulnerable_version: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            vulnerable_version: vulnerable_version.into(),
        }
    }
}

/// Result of checking one project package against its rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VulnerabilityFinding {
    pub package: String,
    pub project_versions: Vec<String>,
    pub vulnerable_version: String,
    pub is_vulnerable: bool,
    /// Project versions the rule matched. Empty unless `is_vulnerable`.
    pub matched_versions: Vec<String>,
}
