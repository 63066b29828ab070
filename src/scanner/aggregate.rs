use crate::model::{compare_names, AggregatedPackage, PackageEntry};
use std::collections::HashMap;
use tracing::debug;

/// Lock file entries grouped by simplified name.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    groups: HashMap<String, AggregatedPackage>,
    /// Keys of `groups`, case-insensitively sorted.
    names: Vec<String>,
}

impl Aggregation {
    pub fn get(&self, name: &str) -> Option<&AggregatedPackage> {
        self.groups.get(name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Packages in display order.
    pub fn iter(&self) -> impl Iterator<Item = &AggregatedPackage> + '_ {
        self.names.iter().filter_map(|name| self.groups.get(name))
    }

    pub fn into_packages(mut self) -> Vec<AggregatedPackage> {
        self.names
            .iter()
            .filter_map(|name| self.groups.remove(name))
            .collect()
    }
}

/// Groups every non-root entry under its simplified name.
pub fn aggregate(entries: &[PackageEntry]) -> Aggregation {
    let mut groups: HashMap<String, AggregatedPackage> = HashMap::new();

    for entry in entries {
        // The empty path is the project itself.
        if entry.full_path.is_empty() {
            continue;
        }

        let name = entry.simplified_name();
        groups
            .entry(name.to_string())
            .or_insert_with(|| AggregatedPackage::new(name))
            .push(entry.clone());
    }

    let mut names: Vec<String> = groups.keys().cloned().collect();
    names.sort_by(|a, b| compare_names(a, b));

    debug!(
        entries = entries.len(),
        packages = names.len(),
        "aggregated lock file entries"
    );

    Aggregation { groups, names }
}
