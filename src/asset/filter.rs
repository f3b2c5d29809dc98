//! Extension and pattern matching for asset references.
//!
//! A reference is **eligible** for bundling when it carries one of the
//! class extensions, is not ignore-listed, and does not carry a globally
//! ignored extension. It is **removable** from a page when it is neither
//! ignore-listed nor carries an ignored extension; removal does not look at
//! the class extension.

use crate::config::DwindleConfig;

use super::AssetClass;

/// True if `name` ends with any suffix in the list.
///
/// Multi-dot suffixes work, so `.js` matches `app.3f9a1c.js` and
/// `.dwindle.js` matches `all-1234abcd.dwindle.js`.
#[inline]
pub fn has_extension(name: &str, suffixes: &[String]) -> bool {
    suffixes.iter().any(|s| name.ends_with(s.as_str()))
}

#[inline]
pub fn starts_with_any(name: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|p| name.starts_with(p.as_str()))
}

#[inline]
pub fn contains_any(name: &str, needles: &[String]) -> bool {
    needles.iter().any(|n| name.contains(n.as_str()))
}

/// Matching rules for one asset class.
#[derive(Debug, Clone)]
pub struct AssetFilter<'a> {
    extensions: Vec<String>,
    ignore_starts_with: &'a [String],
    ignore_contains: &'a [String],
    ignored_extensions: &'a [String],
}

impl<'a> AssetFilter<'a> {
    pub fn new(config: &'a DwindleConfig, class: AssetClass) -> Self {
        let section = config.section(class);
        Self {
            extensions: section.extensions(class),
            ignore_starts_with: &section.ignore_starts_with,
            ignore_contains: &section.ignore_contains,
            ignored_extensions: &config.output.ignored_extensions,
        }
    }

    /// Reference matches one of the class ignore lists.
    pub fn is_ignored(&self, reference: &str) -> bool {
        starts_with_any(reference, self.ignore_starts_with)
            || contains_any(reference, self.ignore_contains)
    }

    /// Reference carries a globally ignored extension (e.g. an earlier bundle).
    pub fn has_ignored_extension(&self, reference: &str) -> bool {
        has_extension(reference, self.ignored_extensions)
    }

    /// Reference should be collected into the bundle.
    pub fn is_eligible(&self, reference: &str) -> bool {
        !reference.is_empty()
            && has_extension(reference, &self.extensions)
            && !self.is_ignored(reference)
            && !self.has_ignored_extension(reference)
    }

    /// Tag carrying this reference may be deleted once the bundle tag is in.
    pub fn is_removable(&self, reference: &str) -> bool {
        !self.is_ignored(reference) && !self.has_ignored_extension(reference)
    }
}
