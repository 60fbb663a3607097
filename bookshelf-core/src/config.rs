//! Best-effort view over the site configuration file.
//!
//! The configuration is a YAML document (`mkdocs.yml` at the repository
//! root). Lookups never fail: a missing, unreadable, or malformed file
//! degrades every derived value to its default.

use std::path::Path;

use serde_yaml::Value;

use crate::fs::FileSystem;

/// File name of the site configuration at the repository root.
pub const CONFIG_FILE: &str = "mkdocs.yml";

/// Theme feature flag that enables mobile navigation.
pub const MOBILE_NAV_FLAG: &str = "navigation.tabs.mobile";

/// Parsed site configuration with best-effort field access.
#[derive(Debug, Clone, Default)]
pub struct SiteConfig {
    value: Value,
}

impl SiteConfig {
    /// Load the configuration from `mkdocs.yml` under the repository root.
    ///
    /// Never fails: unreadable or malformed configuration yields an empty
    /// instance, with a warning on the diagnostic stream.
    pub fn load<F: FileSystem>(fs: &F, repo_root: &Path) -> Self {
        let path = repo_root.join(CONFIG_FILE);
        match fs.read_to_string(&path) {
            Ok(contents) => Self::parse(&contents),
            Err(err) => {
                log::warn!(
                    "site configuration not readable at {}: {err}",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Parse configuration contents, degrading to empty on failure.
    pub fn parse(contents: &str) -> Self {
        match serde_yaml::from_str::<Value>(contents) {
            Ok(value) if value.is_mapping() => Self { value },
            Ok(_) => {
                log::warn!("site configuration is not a key-value mapping, ignoring it");
                Self::default()
            }
            Err(err) => {
                log::warn!("site configuration failed to parse: {err}");
                Self::default()
            }
        }
    }

    /// Whether a top-level key is present, regardless of its value.
    pub fn has_key(&self, key: &str) -> bool {
        self.value.get(key).is_some()
    }

    /// The top-level entries of the navigation outline.
    pub fn nav_outline(&self) -> Vec<NavEntry> {
        match self.value.get("nav").and_then(Value::as_sequence) {
            Some(items) => items.iter().map(NavEntry::from_value).collect(),
            None => Vec::new(),
        }
    }

    /// Maximum depth over all top-level navigation entries.
    pub fn navigation_depth(&self) -> usize {
        self.nav_outline()
            .iter()
            .map(NavEntry::depth)
            .max()
            .unwrap_or(0)
    }

    /// Whether the theme enables the given feature flag.
    pub fn has_theme_feature(&self, flag: &str) -> bool {
        self.value
            .get("theme")
            .and_then(|theme| theme.get("features"))
            .and_then(Value::as_sequence)
            .map(|features| features.iter().any(|feature| feature.as_str() == Some(flag)))
            .unwrap_or(false)
    }

    /// Whether analytics is configured with both a provider and a property.
    pub fn analytics_enabled(&self) -> bool {
        let Some(analytics) = self
            .value
            .get("extra")
            .and_then(|extra| extra.get("analytics"))
        else {
            return false;
        };
        non_empty_string(analytics.get("provider")) && non_empty_string(analytics.get("property"))
    }
}

fn non_empty_string(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .map(|text| !text.is_empty())
        .unwrap_or(false)
}

/// A navigation outline entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEntry {
    /// A terminal entry: a page reference or bare label.
    Leaf,
    /// A named section containing child entries.
    Branch(Vec<NavEntry>),
}

impl NavEntry {
    /// Build an entry from a YAML navigation value.
    ///
    /// Mappings become branches; a mapping value that is itself a sequence
    /// contributes its items as the branch's children. Everything else is
    /// a leaf.
    pub fn from_value(value: &Value) -> Self {
        match value.as_mapping() {
            Some(mapping) => {
                let mut children = Vec::new();
                for child in mapping.values() {
                    match child.as_sequence() {
                        Some(items) => children.extend(items.iter().map(NavEntry::from_value)),
                        None => children.push(NavEntry::from_value(child)),
                    }
                }
                NavEntry::Branch(children)
            }
            None => NavEntry::Leaf,
        }
    }

    /// Depth contributed by this entry: leaves are 0, branches one more
    /// than their deepest child (1 with no children).
    pub fn depth(&self) -> usize {
        match self {
            NavEntry::Leaf => 0,
            NavEntry::Branch(children) => {
                1 + children.iter().map(NavEntry::depth).max().unwrap_or(0)
            }
        }
    }
}
