//! One bundling run over a site directory.
//!
//! # Phases
//!
//! ```text
//! walk ──► collect ──► merge + minify ──► write bundles ──► rewrite pages
//! ```
//!
//! Bundle names are fixed before the first page is rewritten, so every page
//! refers to the same files. Both bundles are minified before either is
//! written; a minifier error leaves the tree untouched.
//!
//! # Partial failure
//!
//! Writes are not transactional. If a page fails to rewrite, the bundles are
//! already on disk and the pages before it are already rewritten; the pages
//! after it keep their original content. Nothing is rolled back or retried.

mod result;

pub use result::RunResult;

use anyhow::{Context, Result};

use crate::{
    asset::{AssetClass, Bundle, bundle, collect, load_included, merge},
    config::DwindleConfig,
    debug,
    html::{Replacer, Rewriter},
    log,
    utils::{plural_count, walk::list_files},
};

/// Run collection, bundling and rewriting for `config.root`.
pub fn run(config: &DwindleConfig) -> Result<RunResult> {
    let files = list_files(&config.root)?;
    let collection = collect(&files, config)?;

    log!("collect"; "{} with {} and {}",
        plural_count(collection.pages.len(), "page"),
        plural_count(collection.scripts.len(), "script"),
        plural_count(collection.styles.len(), "stylesheet"));

    let replacer = Replacer::from_config(&config.replace).context("invalid replace pattern")?;

    let mut bundles = Vec::with_capacity(AssetClass::ALL.len());
    let mut outputs = Vec::with_capacity(AssetClass::ALL.len());
    let mut included_counts = [0; 2];

    for (class, included_count) in AssetClass::ALL.into_iter().zip(&mut included_counts) {
        let section = config.section(class);
        let included = load_included(&section.include)?;
        *included_count = included.len();

        let merged = merge(collection.assets(class), &included, section.include_position);
        let code = bundle::build(class, &merged, &config.minify)?;
        debug!("bundle"; "{}: {} merged into {} bytes",
            class.label(), plural_count(merged.len(), "file"), code.len());

        bundles.push(Bundle::new(class, config));
        outputs.push(code);
    }

    for (bundle, code) in bundles.iter().zip(&outputs) {
        bundle.write(code)?;
    }

    let rewriter = Rewriter::new(config, &bundles, replacer.as_ref());
    for page in &collection.pages {
        let report = rewriter
            .rewrite_file(page)
            .with_context(|| format!("failed to rewrite `{}`", page.display()))?;
        debug!("rewrite"; "{}: {} inserted, {} deleted, {} removed, {} replaced",
            page.display(), report.inserted, report.deleted, report.removed, report.replaced);
    }

    let [included_js_files, included_css_files] = included_counts;
    Ok(RunResult {
        html_files: collection.pages.len(),
        js_files: collection.scripts.len(),
        included_js_files,
        css_files: collection.styles.len(),
        included_css_files,
        removed_elements: config.html.remove.len(),
        js_bundle: bundles[0].name.clone(),
        css_bundle: bundles[1].name.clone(),
    })
}
