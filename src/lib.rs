pub mod checker;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod scanner;

pub use config::Config;
pub use error::ScanError;
pub use model::{AggregatedPackage, PackageEntry, Report, VulnerabilityFinding, VulnerabilityRule};
pub use scanner::{aggregate, build_report, load_manifest, Aggregation, Manifest};
