//! `[html]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [html]
//! extensions = [".htm", ".html"]
//! remove = [".ad-banner", "script[data-dev]"]
//! ```

use super::strings;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
    /// File suffixes treated as HTML pages.
    pub extensions: Vec<String>,
    /// CSS selectors whose matches are deleted from every page, in order.
    pub remove: Vec<String>,
}

pub struct HtmlFields {
    pub extensions: FieldPath,
    pub remove: FieldPath,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            extensions: strings(&[".htm", ".html"]),
            remove: Vec::new(),
        }
    }
}

impl HtmlConfig {
    pub const FIELDS: HtmlFields = HtmlFields {
        extensions: FieldPath::new("html.extensions"),
        remove: FieldPath::new("html.remove"),
    };

    /// Validate HTML configuration.
    ///
    /// # Checks
    /// - `extensions` must not be empty
    /// - every `remove` entry must be a valid CSS selector
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.extensions.is_empty() {
            diag.error(
                Self::FIELDS.extensions,
                "at least one HTML extension must be provided",
            );
        }

        for selector in &self.remove {
            if kuchikiki::Selectors::compile(selector).is_err() {
                diag.error_with_hint(
                    Self::FIELDS.remove,
                    format!("`{selector}` is not a valid CSS selector"),
                    "use selectors such as `.ad-banner` or `div#promo`",
                );
            }
        }
    }
}
