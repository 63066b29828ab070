use crate::model::{Report, VulnerabilityFinding};
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    packages: Vec<JsonPackage<'a>>,
    findings: &'a [VulnerabilityFinding],
    vulnerable_packages: Vec<&'a str>,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    warnings: &'a [String],
}

#[derive(Serialize)]
struct JsonPackage<'a> {
    name: &'a str,
    occurrences: usize,
    versions: Vec<String>,
    display: String,
}

/// Pretty-printed JSON with a trailing newline.
pub fn render_json(report: &Report) -> Result<String> {
    let view = JsonReport {
        packages: report
            .packages
            .iter()
            .map(|pkg| JsonPackage {
                name: &pkg.name,
                occurrences: pkg.occurrences.len(),
                versions: pkg.distinct_versions(),
                display: pkg.versions_display(),
            })
            .collect(),
        findings: &report.findings,
        vulnerable_packages: report
            .vulnerable_packages()
            .into_iter()
            .map(|f| f.package.as_str())
            .collect(),
        warnings: &report.warnings,
    };

    let mut json = serde_json::to_string_pretty(&view)?;
    json.push('\n');
    Ok(json)
}
