//! Find/replace over URLs written into pages.

use std::borrow::Cow;

use regex::Regex;

use crate::{
    asset::{contains_any, has_extension, starts_with_any},
    config::{ReplaceConfig, ReplaceScope},
};

#[derive(Debug, Clone)]
enum Pattern {
    Literal(String),
    Regex(Regex),
}

/// A compiled `[replace]` rule. Only the first match is replaced.
#[derive(Debug, Clone)]
pub struct Replacer {
    pattern: Pattern,
    replacement: String,
    scope: ReplaceScope,
    attributes: Vec<String>,
    extensions: Vec<String>,
    ignored_extensions: Vec<String>,
    ignore_starts_with: Vec<String>,
    ignore_contains: Vec<String>,
}

impl Replacer {
    /// Compile the configured rule. `Ok(None)` when no pattern is set.
    pub fn from_config(config: &ReplaceConfig) -> Result<Option<Self>, regex::Error> {
        let Some(pattern) = &config.pattern else {
            return Ok(None);
        };

        let pattern = if config.regex {
            Pattern::Regex(Regex::new(pattern)?)
        } else {
            Pattern::Literal(pattern.clone())
        };

        Ok(Some(Self {
            pattern,
            replacement: config.replacement.clone(),
            scope: config.scope,
            attributes: config.attributes.clone(),
            extensions: config.extensions.clone(),
            ignored_extensions: config.ignored_extensions.clone(),
            ignore_starts_with: config.ignore_starts_with.clone(),
            ignore_contains: config.ignore_contains.clone(),
        }))
    }

    #[inline]
    pub const fn scope(&self) -> ReplaceScope {
        self.scope
    }

    /// Attributes visited by the page-wide pass.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Replace the first match in `value`.
    pub fn apply<'v>(&self, value: &'v str) -> Cow<'v, str> {
        match &self.pattern {
            Pattern::Literal(needle) if value.contains(needle.as_str()) => {
                Cow::Owned(value.replacen(needle.as_str(), &self.replacement, 1))
            }
            Pattern::Literal(_) => Cow::Borrowed(value),
            Pattern::Regex(regex) => regex.replace(value, self.replacement.as_str()),
        }
    }

    /// Whether the bundle URL for `bundle_name` is rewritten.
    pub fn applies_to_bundle(&self, bundle_name: &str) -> bool {
        self.scope == ReplaceScope::Bundle && !has_extension(bundle_name, &self.ignored_extensions)
    }

    /// Whether an attribute value is rewritten by the page-wide pass.
    pub fn applies_to_value(&self, value: &str) -> bool {
        has_extension(value, &self.extensions)
            && !has_extension(value, &self.ignored_extensions)
            && !starts_with_any(value, &self.ignore_starts_with)
            && !contains_any(value, &self.ignore_contains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::section::strings;

    fn replacer(pattern: &str, replacement: &str, regex: bool) -> Replacer {
        let config = ReplaceConfig {
            pattern: Some(pattern.into()),
            replacement: replacement.into(),
            regex,
            ..ReplaceConfig::default()
        };
        Replacer::from_config(&config).unwrap().unwrap()
    }

    #[test]
    fn test_disabled_without_pattern() {
        assert!(Replacer::from_config(&ReplaceConfig::default()).unwrap().is_none());
    }

    #[test]
    fn test_literal_first_match_only() {
        let r = replacer("a", "b", false);
        assert_eq!(r.apply("a/a.js"), "b/a.js");
        assert!(matches!(r.apply("x.js"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_literal_is_not_regex() {
        let r = replacer("a.js", "b.js", false);
        assert_eq!(r.apply("abjs"), "abjs");
        assert_eq!(r.apply("a.js"), "b.js");
    }

    #[test]
    fn test_regex_with_groups() {
        let r = replacer(r"^(\.\./)*(.*)$", "https://cdn.example.com/$2", true);
        assert_eq!(r.apply("../../all.js"), "https://cdn.example.com/all.js");

        let r = replacer(r"\d", "N", true);
        assert_eq!(r.apply("v1.2.js"), "vN.2.js");
    }

    #[test]
    fn test_invalid_regex() {
        let config = ReplaceConfig {
            pattern: Some("(".into()),
            regex: true,
            ..ReplaceConfig::default()
        };
        assert!(Replacer::from_config(&config).is_err());
    }

    #[test]
    fn test_applies_to_bundle() {
        let mut config = ReplaceConfig {
            pattern: Some("x".into()),
            ignored_extensions: strings(&[".css"]),
            ..ReplaceConfig::default()
        };
        let r = Replacer::from_config(&config).unwrap().unwrap();
        assert!(r.applies_to_bundle("all-1.dwindle.js"));
        assert!(!r.applies_to_bundle("all-1.dwindle.css"));

        config.scope = ReplaceScope::Local;
        let r = Replacer::from_config(&config).unwrap().unwrap();
        assert!(!r.applies_to_bundle("all-1.dwindle.js"));
    }

    #[test]
    fn test_applies_to_value() {
        let r = replacer("x", "y", false);
        assert!(r.applies_to_value("img/a.js"));
        assert!(!r.applies_to_value("img/a.png"));
        assert!(!r.applies_to_value("//cdn.example.com/a.js"));
        assert!(!r.applies_to_value("https://example.com/a.js"));
    }
}
