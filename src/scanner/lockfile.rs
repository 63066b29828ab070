use crate::error::ScanError;
use crate::model::PackageEntry;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// The `packages` section of a lock file, in document order.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    pub path: PathBuf,
    /// Includes the project root (empty path) when the lock file lists it.
    pub entries: Vec<PackageEntry>,
    /// Malformed entries tolerated in lenient mode.
    pub warnings: Vec<String>,
}

/// Reads and validates a lock file from disk.
///
/// # Errors
///
/// [`ScanError::Read`] if the file cannot be read, [`ScanError::Parse`] if it
/// is not JSON, and [`ScanError::Schema`] if the top-level `packages` object
/// is missing (or, with `strict`, if any entry is malformed).
pub fn load_manifest(path: &Path, strict: bool) -> Result<Manifest, ScanError> {
    let content = fs::read_to_string(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_manifest(path, &content, strict)
}

/// Parses lock file content. `path` is only used for error messages.
pub fn parse_manifest(path: &Path, content: &str, strict: bool) -> Result<Manifest, ScanError> {
    let document: Value = serde_json::from_str(content).map_err(|source| ScanError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let packages = document
        .get("packages")
        .and_then(Value::as_object)
        .ok_or_else(|| ScanError::schema(path, "missing top-level \"packages\" object"))?;

    let mut manifest = Manifest {
        path: path.to_path_buf(),
        ..Manifest::default()
    };

    for (key, value) in packages {
        let Some(metadata) = value.as_object() else {
            let message = format!("entry '{}' is not an object; skipped", key);
            if strict {
                return Err(ScanError::schema(path, message));
            }
            warn!(entry = %key, "skipping malformed lock file entry");
            manifest.warnings.push(message);
            continue;
        };

        let version = match metadata.get("version") {
            Some(Value::String(version)) => version.clone(),
            // Linked and workspace entries carry no version.
            None | Some(Value::Null) => {
                debug!(entry = %key, "entry has no version");
                String::new()
            }
            Some(other) => {
                let message = format!(
                    "entry '{}' has a non-string version ({}); treated as empty",
                    key, other
                );
                if strict {
                    return Err(ScanError::schema(path, message));
                }
                warn!(entry = %key, "lock file entry has a non-string version");
                manifest.warnings.push(message);
                String::new()
            }
        };

        manifest.entries.push(PackageEntry::new(key.clone(), version));
    }

    debug!(
        path = %path.display(),
        entries = manifest.entries.len(),
        "parsed lock file"
    );

    Ok(manifest)
}
