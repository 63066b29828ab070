//! Lock file loading and dependency aggregation.
//!
//! A run reads the `packages` section of a lock file into a [`Manifest`],
//! groups its entries by simplified name with [`aggregate`], and hands the
//! resulting [`Aggregation`] to a
//! [`VulnerabilityChecker`](crate::checker::VulnerabilityChecker).
//!
//! # Example
//!
//! ```
//! use lockscan::checker::{RuleTable, RuleTableChecker};
//! use lockscan::scanner::{build_report, parse_manifest};
//! use std::path::Path;
//!
//! let manifest = parse_manifest(
//!     Path::new("package-lock.json"),
//!     r#"{"packages": {"node_modules/foo": {"version": "1.0.0"}}}"#,
//!     false,
//! )?;
//! let checker = RuleTableChecker::new(RuleTable::from_iter([("foo", "1.0.0")]));
//! let report = build_report(manifest, &checker);
//!
//! assert!(report.findings[0].is_vulnerable);
//! # Ok::<(), lockscan::ScanError>(())
//! ```

mod aggregate;
mod lockfile;

pub use aggregate::{aggregate, Aggregation};
pub use lockfile::{load_manifest, parse_manifest, Manifest};

use crate::checker::VulnerabilityChecker;
use crate::model::Report;
use tracing::debug;

/// Aggregates a manifest and runs `checker` over the result.
pub fn build_report(manifest: Manifest, checker: &dyn VulnerabilityChecker) -> Report {
    let aggregation = aggregate(&manifest.entries);
    let findings = checker.check(&aggregation);

    debug!(
        checker = checker.name(),
        findings = findings.len(),
        "checked aggregated packages"
    );

    Report {
        packages: aggregation.into_packages(),
        findings,
        warnings: manifest.warnings,
    }
}
