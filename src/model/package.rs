use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Folder package managers install nested dependencies into.
pub const DEPENDENCY_FOLDER: &str = "node_modules/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageEntry {
    pub full_path: String,
    pub version: String,
}

impl PackageEntry {
    pub fn new(full_path: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            full_path: full_path.into(),
            version: version.into(),
        }
    }

    pub fn simplified_name(&self) -> &str {
        simplified_name(&self.full_path)
    }

    /// `<name>@<version>`, the bucket this entry is counted in. Nested copies
    /// of the same version share a bucket with the top-level copy.
    pub fn display_key(&self) -> String {
        format!("{}@{}", self.simplified_name(), self.version)
    }
}

/// Returns the package name with all nesting removed.
///
/// The path is split on the dependency folder, so scoped names such as
/// `@babel/core` survive intact. A path without the folder is already simple.
///
/// ```
/// use lockscan::model::simplified_name;
///
/// assert_eq!(simplified_name("node_modules/a/node_modules/@scope/b"), "@scope/b");
/// assert_eq!(simplified_name("@scope/b"), "@scope/b");
/// ```
pub fn simplified_name(path: &str) -> &str {
    match path.rfind(DEPENDENCY_FOLDER) {
        Some(idx) => &path[idx + DEPENDENCY_FOLDER.len()..],
        None => path,
    }
}

/// Case-insensitive ordering used for every user-visible list.
///
/// Strings that only differ in case fall back to a byte comparison so the
/// order is total and reproducible.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedPackage {
    pub name: String,
    /// Entries in lock file order.
    pub occurrences: Vec<PackageEntry>,
}

impl AggregatedPackage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            occurrences: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: PackageEntry) {
        self.occurrences.push(entry);
    }

    /// Distinct display keys with their occurrence counts, sorted.
    pub fn display_keys(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for entry in &self.occurrences {
            *counts.entry(entry.display_key()).or_default() += 1;
        }

        let mut keys: Vec<(String, usize)> = counts.into_iter().collect();
        keys.sort_by(|a, b| compare_names(&a.0, &b.0));
        keys
    }

    /// The "Versions" cell: keys joined by `, ` with ` xN` on repeats.
    pub fn versions_display(&self) -> String {
        self.display_keys()
            .into_iter()
            .map(|(key, count)| {
                if count > 1 {
                    format!("{} x{}", key, count)
                } else {
                    key
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Every version string seen for this package, deduplicated and sorted.
    pub fn distinct_versions(&self) -> Vec<String> {
        let mut versions: Vec<String> = self
            .occurrences
            .iter()
            .map(|entry| entry.version.clone())
            .collect();
        versions.sort_by(|a, b| compare_names(a, b));
        versions.dedup();
        versions
    }
}
