use crate::model::{AggregatedPackage, Report, VulnerabilityFinding};
use tabled::settings::style::HorizontalLine;
use tabled::settings::{Padding, Style};
use tabled::{Table, Tabled};

const BANNER: &str = "============================================================";

const RECOMMENDATION: &str = "Recommendation: remove or pin the affected packages to a safe version, \
     reinstall from a clean cache, and regenerate the lock file.";

#[derive(Tabled)]
struct PackageRow {
    #[tabled(rename = "Package")]
    name: String,
    /// Empty column; with the space separators on either side it forms
    /// the two-space gutter and keeps the header rule off it.
    #[tabled(rename = "")]
    gap: String,
    #[tabled(rename = "Versions")]
    versions: String,
}

/// Renders the package table followed by the analysis and summary sections.
pub fn render_text(report: &Report) -> String {
    let mut lines = package_table(&report.packages);
    lines.extend(analysis(&report.findings));
    lines.extend(summary(report));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn package_table(packages: &[AggregatedPackage]) -> Vec<String> {
    if packages.is_empty() {
        return vec!["(none)".to_string()];
    }

    let rows: Vec<PackageRow> = packages
        .iter()
        .map(|pkg| PackageRow {
            name: pkg.name.clone(),
            gap: String::new(),
            versions: pkg.versions_display(),
        })
        .collect();

    let style = Style::empty()
        .vertical(' ')
        .horizontals([(1, HorizontalLine::new('-').intersection(' '))]);
    let table = Table::new(rows)
        .with(style)
        .with(Padding::zero())
        .to_string();

    table.lines().map(str::to_string).collect()
}

fn banner(title: &str) -> Vec<String> {
    vec![
        String::new(),
        BANNER.to_string(),
        title.to_string(),
        BANNER.to_string(),
    ]
}

fn analysis(findings: &[VulnerabilityFinding]) -> Vec<String> {
    let mut lines = banner("VULNERABILITY ANALYSIS");

    if findings.is_empty() {
        lines.push(String::new());
        lines.push("No monitored packages are used by this project.".to_string());
        return lines;
    }

    for finding in findings {
        lines.push(String::new());
        lines.push(format!("Package: {}", finding.package));
        lines.push(format!(
            "  Project versions: {}",
            join_versions(&finding.project_versions)
        ));
        lines.push(format!("  Vulnerable version: {}", finding.vulnerable_version));
        lines.push(format!(
            "  Is vulnerable version used: {}",
            if finding.is_vulnerable { "YES" } else { "NO" }
        ));
        if finding.is_vulnerable {
            lines.push(format!(
                "  Vulnerable versions found: {}",
                join_versions(&finding.matched_versions)
            ));
        }
    }
    lines
}

fn summary(report: &Report) -> Vec<String> {
    let mut lines = banner("VULNERABILITY SUMMARY");
    lines.push(String::new());

    let vulnerable = report.vulnerable_packages();
    lines.push(format!("Vulnerable packages found: {}", vulnerable.len()));
    for finding in &vulnerable {
        lines.push(format!(
            "  - {}: {}",
            finding.package,
            join_versions(&finding.matched_versions)
        ));
    }

    if !vulnerable.is_empty() {
        lines.push(String::new());
        lines.push(RECOMMENDATION.to_string());
    }
    lines
}

fn join_versions(versions: &[String]) -> String {
    versions
        .iter()
        .map(|v| format_version(v))
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_version(version: &str) -> &str {
    if version.is_empty() {
        "-"
    } else {
        version
    }
}
