//! In-place rewriting of one page.
//!
//! # Steps
//!
//! 1. Remove every element matched by `html.remove`, in configured order.
//! 2. Per asset class with at least one tag on the page:
//!    - build the page-relative bundle URL (`../` prefix + bundle name),
//!      running the bundle-scoped replacer over it when configured;
//!    - insert the bundle tag before the first tag (`before`) or before the
//!      last tag (`after`);
//!    - delete every original tag that is not the bundle itself and is not
//!      ignore-listed.
//! 3. With a local-scope replacer, rewrite matching attribute values on any
//!    element except the inserted bundle tags.
//! 4. Serialize back over the page.

use std::path::Path;

use anyhow::Result;
use kuchikiki::NodeRef;

use super::{HtmlDocument, Replacer, document::{bundle_tag, get_attribute, set_attribute}};
use crate::{
    asset::{AssetFilter, Bundle},
    config::{DwindleConfig, Position, ReplaceScope},
    utils::path::relative_prefix,
};

/// What happened to one page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageReport {
    /// Elements removed by `html.remove` selectors.
    pub removed: usize,
    /// Bundle tags inserted.
    pub inserted: usize,
    /// Original asset tags deleted.
    pub deleted: usize,
    /// Attribute values changed by the local replacer.
    pub replaced: usize,
}

/// Rewrites pages against bundles that are already named.
pub struct Rewriter<'a> {
    config: &'a DwindleConfig,
    bundles: &'a [Bundle],
    replacer: Option<&'a Replacer>,
}

impl<'a> Rewriter<'a> {
    pub fn new(config: &'a DwindleConfig, bundles: &'a [Bundle], replacer: Option<&'a Replacer>) -> Self {
        Self {
            config,
            bundles,
            replacer,
        }
    }

    /// Load, rewrite and overwrite `page`.
    pub fn rewrite_file(&self, page: &Path) -> Result<PageReport> {
        let document = HtmlDocument::load(page)?;
        let report = self.rewrite_document(&document, page)?;
        document.save(page)?;
        Ok(report)
    }

    /// Apply every rewrite step to a parsed page located at `page`.
    pub fn rewrite_document(&self, document: &HtmlDocument, page: &Path) -> Result<PageReport> {
        let mut report = PageReport::default();

        for selector in &self.config.html.remove {
            report.removed += document.remove(selector)?;
        }

        let prefix = relative_prefix(page, &self.config.root);
        let mut inserted = Vec::new();

        for bundle in self.bundles {
            let class = bundle.class;
            let elements = document.select(class.selector())?;
            let (Some(first), Some(last)) = (elements.first(), elements.last()) else {
                continue;
            };

            let url = self.bundle_url(&prefix, bundle);
            let anchor = match self.config.section(class).position {
                Position::Before => first,
                Position::After => last,
            };
            let tag = bundle_tag(class, &url)?;
            anchor.as_node().insert_before(tag.clone());
            inserted.push(tag);
            report.inserted += 1;

            let filter = AssetFilter::new(self.config, class);
            for element in &elements {
                let Some(reference) = get_attribute(element, class.attribute()) else {
                    continue;
                };
                if reference != url && reference != bundle.name && filter.is_removable(&reference) {
                    element.as_node().detach();
                    report.deleted += 1;
                }
            }
        }

        if let Some(replacer) = self.replacer.filter(|r| r.scope() == ReplaceScope::Local) {
            report.replaced = replace_attributes(document, replacer, &inserted)?;
        }

        Ok(report)
    }

    fn bundle_url(&self, prefix: &str, bundle: &Bundle) -> String {
        let url = format!("{prefix}{}", bundle.name);
        match self.replacer {
            Some(replacer) if replacer.applies_to_bundle(&bundle.name) => {
                replacer.apply(&url).into_owned()
            }
            _ => url,
        }
    }
}

/// Page-wide attribute pass. Nodes in `skip` are left alone.
fn replace_attributes(document: &HtmlDocument, replacer: &Replacer, skip: &[NodeRef]) -> Result<usize> {
    let mut replaced = 0;
    for attribute in replacer.attributes() {
        for element in document.select(&format!("[{attribute}]"))? {
            if skip.iter().any(|node| node == element.as_node()) {
                continue;
            }
            let Some(value) = get_attribute(&element, attribute) else {
                continue;
            };
            if !replacer.applies_to_value(&value) {
                continue;
            }
            let new_value = replacer.apply(&value);
            if new_value != value {
                set_attribute(&element, attribute, new_value.into_owned());
                replaced += 1;
            }
        }
    }
    Ok(replaced)
}
