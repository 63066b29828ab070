//! Core data types for lock file entries, vulnerability rules, and reports.
//!
//! - [`PackageEntry`] - One occurrence of a package in the lock file
//! - [`AggregatedPackage`] - All occurrences sharing a simplified name
//! - [`VulnerabilityRule`] - A known-vulnerable package version
//! - [`VulnerabilityFinding`] - The outcome of checking one package against one rule
//! - [`Report`] - Everything printed for a run
//!
//! # Example
//!
//! ```
//! use lockscan::model::{simplified_name, PackageEntry};
//!
//! let entry = PackageEntry::new("node_modules/bar/node_modules/foo", "1.0.0");
//! assert_eq!(entry.simplified_name(), "foo");
//! assert_eq!(entry.display_key(), "foo@1.0.0");
//! assert_eq!(simplified_name("foo"), "foo");
//! ```

mod package;
mod report;
mod vulnerability;

pub use package::*;
pub use report::*;
pub use vulnerability::*;
