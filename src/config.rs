//! Configuration file handling.
//!
//! Configuration is optional. When present it is read from a TOML file at:
//! - Linux: `~/.config/lockscan/config.toml`
//! - macOS: `~/Library/Application Support/lockscan/config.toml`
//! - Windows: `%APPDATA%\lockscan\config.toml`
//!
//! # Example Configuration
//!
//! ```toml
//! format = "text"
//! strict = false
//! builtin_rules = true
//!
//! [rules]
//! "left-pad" = "1.3.0"
//!
//! [ignore]
//! packages = ["@internal/*"]
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::checker::{RuleTable, RuleTableChecker};
use crate::output::OutputFormat;
use tracing::warn;

/// Application configuration.
///
/// ```
/// use lockscan::Config;
///
/// let config: Config = toml::from_str(r#"
///     [rules]
///     "left-pad" = "1.3.0"
/// "#).unwrap();
///
/// assert_eq!(config.rule_table().get("left-pad"), Some("1.3.0"));
/// assert_eq!(config.rule_table().get("chalk"), Some("5.6.1"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Report format: "text" or "json".
    ///
    /// Default: "text"
    pub format: String,

    /// Fail on malformed lock file entries instead of skipping them.
    ///
    /// Default: false
    pub strict: bool,

    /// Whether the embedded list of compromised versions is used.
    ///
    /// Default: true
    pub builtin_rules: bool,

    /// Extra rules, package name to vulnerable version. These replace a
    /// built-in rule for the same package.
    pub rules: BTreeMap<String, String>,

    #[serde(default)]
    pub ignore: IgnoreConfig,
}

/// Packages excluded from vulnerability matching (accepted risk).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IgnoreConfig {
    /// Simplified package names. A trailing `*` matches by prefix, so
    /// `"@internal/*"` covers a whole scope and `"chalk*"` covers
    /// `chalk-template` too.
    pub packages: Vec<String>,
}

impl IgnoreConfig {
    pub fn should_ignore_package(&self, name: &str) -> bool {
        self.packages
            .iter()
            .any(|pattern| name_matches(pattern, name))
    }
}

fn name_matches(pattern: &str, name: &str) -> bool {
    match pattern.strip_suffix('*') {
        Some(prefix) => name.starts_with(prefix),
        None => pattern == name,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            strict: false,
            builtin_rules: true,
            rules: BTreeMap::new(),
            ignore: IgnoreConfig::default(),
        }
    }
}

impl Config {
    /// Loads the user's config file, or defaults if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lockscan")
            .join("config.toml")
    }

    /// Built-in rules (unless disabled) with configured rules layered on top.
    pub fn rule_table(&self) -> RuleTable {
        let mut table = if self.builtin_rules {
            RuleTable::builtin()
        } else {
            RuleTable::new()
        };
        table.extend(self.rules.iter().map(|(name, version)| (name.as_str(), version.as_str())));
        table
    }

    /// The configured report format. Unknown values fall back to text so a
    /// bad config never suppresses the report.
    pub fn output_format(&self) -> OutputFormat {
        self.format.parse().unwrap_or_else(|e: String| {
            warn!(format = %self.format, error = %e, "falling back to text output");
            OutputFormat::Text
        })
    }

    pub fn checker(&self) -> RuleTableChecker {
        RuleTableChecker::new(self.rule_table()).with_ignore(self.ignore.clone())
    }
}
