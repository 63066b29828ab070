use serde::Serialize;

use super::{AggregatedPackage, VulnerabilityFinding};

/// Everything a run produces, in display order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub packages: Vec<AggregatedPackage>,
    pub findings: Vec<VulnerabilityFinding>,
    /// Malformed lock file entries that were tolerated.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl Report {
    /// Findings where a vulnerable version is in use, sorted by name.
    pub fn vulnerable_packages(&self) -> Vec<&VulnerabilityFinding> {
        let mut vulnerable: Vec<&VulnerabilityFinding> =
            self.findings.iter().filter(|f| f.is_vulnerable).collect();
        vulnerable.sort_by(|a, b| a.package.cmp(&b.package));
        vulnerable
    }
}
