//! `[replace]` section configuration.
//!
//! A single find/replace rule, either over the bundle URL written into each
//! page (`scope = "bundle"`) or over attributes of any element on the page
//! (`scope = "local"`). Disabled while `pattern` is unset.
//!
//! # Example
//!
//! ```toml
//! [replace]
//! pattern = "^(\\.\\./)*"
//! replacement = "https://cdn.example.com/"
//! regex = true
//! scope = "local"
//! attributes = ["src", "href"]
//! extensions = [".js", ".css", ".png"]
//! ```

use super::strings;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Where the replacement applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReplaceScope {
    /// Only the URL of the inserted bundle tag.
    Bundle,
    /// Every element carrying one of the configured attributes.
    Local,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplaceConfig {
    /// Text or regex to look for. First match only.
    pub pattern: Option<String>,
    /// Replacement text (`$1` style groups allowed with `regex = true`).
    pub replacement: String,
    /// Treat `pattern` as a regular expression.
    pub regex: bool,
    pub scope: ReplaceScope,
    /// Attributes rewritten with `scope = "local"`.
    pub attributes: Vec<String>,
    /// Values must end with one of these to be rewritten.
    pub extensions: Vec<String>,
    /// Values ending with one of these are never rewritten.
    pub ignored_extensions: Vec<String>,
    pub ignore_starts_with: Vec<String>,
    pub ignore_contains: Vec<String>,
}

pub struct ReplaceFields {
    pub pattern: FieldPath,
    pub attributes: FieldPath,
    pub extensions: FieldPath,
}

impl Default for ReplaceConfig {
    fn default() -> Self {
        Self {
            pattern: None,
            replacement: String::new(),
            regex: false,
            scope: ReplaceScope::Bundle,
            attributes: strings(&["src", "href"]),
            extensions: strings(&[".js", ".css"]),
            ignored_extensions: Vec::new(),
            ignore_starts_with: strings(&["//"]),
            ignore_contains: strings(&["://"]),
        }
    }
}

impl ReplaceConfig {
    pub const FIELDS: ReplaceFields = ReplaceFields {
        pattern: FieldPath::new("replace.pattern"),
        attributes: FieldPath::new("replace.attributes"),
        extensions: FieldPath::new("replace.extensions"),
    };

    /// Validate replacer configuration.
    ///
    /// # Checks
    /// - If enabled:
    ///   - `pattern` must not be empty and must compile when `regex = true`
    ///   - with `scope = "local"`, `attributes` and `extensions` must not be empty
    ///     and every attribute must form a valid `[attr]` selector
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(pattern) = &self.pattern else {
            return;
        };

        if pattern.is_empty() {
            diag.error(Self::FIELDS.pattern, "pattern must not be empty");
        } else if self.regex
            && let Err(e) = regex::Regex::new(pattern)
        {
            diag.error(Self::FIELDS.pattern, format!("invalid regex: {e}"));
        }

        if self.scope == ReplaceScope::Local {
            if self.attributes.is_empty() {
                diag.error(
                    Self::FIELDS.attributes,
                    "local scope needs at least one attribute",
                );
            }
            for attribute in &self.attributes {
                if kuchikiki::Selectors::compile(&format!("[{attribute}]")).is_err() {
                    diag.error(
                        Self::FIELDS.attributes,
                        format!("`{attribute}` is not a valid attribute name"),
                    );
                }
            }
            if self.extensions.is_empty() {
                diag.error(
                    Self::FIELDS.extensions,
                    "local scope needs at least one extension",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_by_default() {
        let config = ReplaceConfig::default();
        assert!(config.pattern.is_none());
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_invalid_regex() {
        let config = ReplaceConfig {
            pattern: Some("(unclosed".into()),
            regex: true,
            ..ReplaceConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(diag.has_error_for(ReplaceConfig::FIELDS.pattern));
    }

    #[test]
    fn test_literal_pattern_not_compiled() {
        let config = ReplaceConfig {
            pattern: Some("(unclosed".into()),
            ..ReplaceConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_local_scope_needs_attributes() {
        let config = ReplaceConfig {
            pattern: Some("a".into()),
            scope: ReplaceScope::Local,
            attributes: Vec::new(),
            ..ReplaceConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(diag.has_error_for(ReplaceConfig::FIELDS.attributes));
    }

    #[test]
    fn test_local_scope_rejects_bad_attribute_name() {
        let config = ReplaceConfig {
            pattern: Some("a".into()),
            scope: ReplaceScope::Local,
            attributes: vec!["src".into(), "data src".into()],
            ..ReplaceConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("data src"));

        let config = ReplaceConfig {
            attributes: vec!["data-src".into()],
            ..config
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(diag.is_empty());
    }
}
