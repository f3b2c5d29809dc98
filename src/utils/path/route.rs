//! Reference resolution between HTML pages, assets and bundles.
//!
//! A reference is the raw value of a `src`/`href` attribute. It is either
//! root-relative (leading separator, resolved against the site root) or
//! page-relative (resolved against the directory holding the page).

use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;

use super::clean_path;

/// Resolve an attribute reference to a filesystem path.
///
/// Percent-encoded characters are decoded first, so `my%20file.js`
/// resolves to `my file.js` on disk.
///
/// # Examples
/// ```ignore
/// resolve_reference("/js/a.js", Path::new("/site/blog/index.html"), Path::new("/site"))
///     -> "/site/js/a.js"
/// resolve_reference("../a.js", Path::new("/site/blog/index.html"), Path::new("/site"))
///     -> "/site/a.js"
/// ```
pub fn resolve_reference(reference: &str, current_file: &Path, site_root: &Path) -> PathBuf {
    let decoded = percent_decode_str(reference).decode_utf8_lossy();

    let joined = if let Some(stripped) = strip_separator(&decoded) {
        site_root.join(stripped)
    } else {
        current_file
            .parent()
            .unwrap_or(site_root)
            .join(&*decoded)
    };

    clean_path(&joined)
}

/// Strip all leading separators, returning `None` if there were none.
fn strip_separator(reference: &str) -> Option<&str> {
    let stripped = reference.trim_start_matches(['/', '\\']);
    (stripped.len() != reference.len()).then_some(stripped)
}

/// Compute the `../` prefix that leads from a page back to the site root.
///
/// The count equals the number of directories between `site_root` and the
/// page. Pages at the root (or outside of it) get an empty prefix.
///
/// # Examples
/// ```ignore
/// relative_prefix(Path::new("/site/index.html"), Path::new("/site"))     -> ""
/// relative_prefix(Path::new("/site/a/b/index.html"), Path::new("/site")) -> "../../"
/// ```
pub fn relative_prefix(file: &Path, site_root: &Path) -> String {
    let Ok(relative) = file.strip_prefix(site_root) else {
        return String::new();
    };
    let depth = relative.components().count().saturating_sub(1);
    "../".repeat(depth)
}

/// Join path components with forward slashes for use in a URL.
pub fn to_web_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
