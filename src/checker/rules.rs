use crate::model::VulnerabilityRule;
use std::collections::BTreeMap;

/// Versions published from hijacked maintainer accounts in the
/// September 2025 npm compromise (chalk, debug and related packages).
pub const BUILTIN_RULES: &[(&str, &str)] = &[
    ("ansi-regex", "6.2.1"),
    ("ansi-styles", "6.2.2"),
    ("backslash", "0.2.1"),
    ("chalk", "5.6.1"),
    ("chalk-template", "1.1.1"),
    ("color", "5.0.1"),
    ("color-convert", "3.1.1"),
    ("color-name", "2.0.1"),
    ("color-string", "2.1.1"),
    ("debug", "4.4.2"),
    ("error-ex", "1.3.3"),
    ("has-ansi", "6.0.1"),
    ("is-arrayish", "0.3.3"),
    ("simple-swizzle", "0.2.3"),
    ("slice-ansi", "7.1.1"),
    ("strip-ansi", "7.1.1"),
    ("supports-color", "10.2.1"),
    ("supports-hyperlinks", "4.1.1"),
    ("wrap-ansi", "9.0.1"),
];

/// Package name to vulnerable version. One version per name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    rules: BTreeMap<String, String>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        BUILTIN_RULES.iter().copied().collect()
    }

    /// Adds a rule, replacing any existing rule for the same package.
    pub fn insert(&mut self, package_name: impl Into<String>, vulnerable_version: impl Into<String>) {
        self.rules
            .insert(package_name.into(), vulnerable_version.into());
    }

    pub fn get(&self, package_name: &str) -> Option<&str> {
        self.rules.get(package_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.rules
            .iter()
            .map(|(name, version)| (name.as_str(), version.as_str()))
    }

    pub fn to_rules(&self) -> Vec<VulnerabilityRule> {
        self.iter()
            .map(|(name, version)| VulnerabilityRule::new(name, version))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for RuleTable {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, version) in iter {
            self.insert(name, version);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RuleTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = RuleTable::new();
        table.extend(iter);
        table
    }
}
