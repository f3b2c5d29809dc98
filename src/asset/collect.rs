//! Asset discovery across every page of the site.
//!
//! One pass over the page list. Each page is parsed, its script and
//! stylesheet references are filtered and resolved, and every target that
//! exists on disk is read once. A path referenced from several pages is
//! recorded by the first page that mentions it.
//!
//! Targets missing from disk are skipped without error.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{AssetClass, AssetFilter, AssetMap, filter::has_extension};
use crate::{
    config::DwindleConfig,
    debug,
    html::HtmlDocument,
    utils::path::{clean_path, resolve_reference},
};

/// Everything the discovery pass found.
#[derive(Debug, Default)]
pub struct Collection {
    pub scripts: AssetMap,
    pub styles: AssetMap,
    /// Pages that will be rewritten, in walk order.
    pub pages: Vec<PathBuf>,
}

impl Collection {
    pub const fn assets(&self, class: AssetClass) -> &AssetMap {
        match class {
            AssetClass::Script => &self.scripts,
            AssetClass::Style => &self.styles,
        }
    }

    fn assets_mut(&mut self, class: AssetClass) -> &mut AssetMap {
        match class {
            AssetClass::Script => &mut self.scripts,
            AssetClass::Style => &mut self.styles,
        }
    }
}

/// Whether `path` is a page to scan and rewrite.
pub fn is_page(path: &Path, config: &DwindleConfig) -> bool {
    let name = path.to_string_lossy();
    has_extension(&name, &config.html.extensions)
        && !has_extension(&name, &config.output.ignored_extensions)
}

/// Scan `files` for pages and the assets they reference.
pub fn collect(files: &[PathBuf], config: &DwindleConfig) -> Result<Collection> {
    let filters = AssetClass::ALL.map(|class| AssetFilter::new(config, class));
    let mut collection = Collection::default();

    for page in files.iter().filter(|f| is_page(f, config)) {
        let document = HtmlDocument::load(page)?;

        for (class, filter) in AssetClass::ALL.into_iter().zip(&filters) {
            let references = document.attribute_values(class.selector(), class.attribute())?;
            let assets = collection.assets_mut(class);
            let before = assets.len();

            record_references(assets, &references, filter, page, &config.root)?;

            debug!("collect"; "{}: {} new {} file(s)",
                page.display(), assets.len() - before, class.label());
        }

        collection.pages.push(page.clone());
    }

    Ok(collection)
}

fn record_references(
    assets: &mut AssetMap,
    references: &[String],
    filter: &AssetFilter<'_>,
    page: &Path,
    root: &Path,
) -> Result<()> {
    for reference in references {
        if !filter.is_eligible(reference) {
            continue;
        }

        let path = resolve_reference(reference, page, root);
        if assets.contains(&path) || filter.has_ignored_extension(&path.to_string_lossy()) {
            continue;
        }

        if !path.is_file() {
            debug!("collect"; "skipping missing `{}` referenced from {}", reference, page.display());
            continue;
        }

        let content = read_asset(&path)?;
        assets.insert(path, content);
    }

    Ok(())
}

/// Load explicitly included files, in configured order.
///
/// Paths are cleaned the same way discovered references are, so a file
/// both included and discovered is bundled once.
pub fn load_included(paths: &[PathBuf]) -> Result<AssetMap> {
    let mut assets = AssetMap::new();
    for path in paths.iter().map(|p| clean_path(p)) {
        if !assets.contains(&path) {
            let content = read_asset(&path)?;
            assets.insert(path, content);
        }
    }
    Ok(assets)
}

fn read_asset(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read asset `{}`", path.display()))
}
