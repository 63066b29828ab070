//! Error types for loading and validating lock file manifests.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures. Any of these ends the run before a report is printed.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("missing required argument: path to the lock file")]
    MissingArgument,

    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{}' has an unexpected layout: {reason}", path.display())]
    Schema { path: PathBuf, reason: String },
}

impl ScanError {
    pub(crate) fn schema(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ScanError::Schema {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
