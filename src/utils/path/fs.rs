//! Path normalization utilities.
//!
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `clean_path` - lexical `.`/`..` removal without touching the disk

use std::path::{Component, Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Remove `.` and `..` components lexically.
///
/// `..` never climbs above the root of an absolute path, matching how
/// browsers treat `/../a.js` on a site.
///
/// # Example
/// ```ignore
/// assert_eq!(clean_path(Path::new("/site/a/../b/./c.js")), PathBuf::from("/site/b/c.js"));
/// ```
pub fn clean_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_relative() {
        let normalized = normalize_path(Path::new("relative/path/file.txt"));
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_clean_path_parent_and_current() {
        assert_eq!(
            clean_path(Path::new("/site/a/../b/./c.js")),
            PathBuf::from("/site/b/c.js")
        );
    }

    #[test]
    fn test_clean_path_stops_at_root() {
        assert_eq!(clean_path(Path::new("/../../a.js")), PathBuf::from("/a.js"));
    }

    #[test]
    fn test_clean_path_keeps_leading_parent_on_relative() {
        assert_eq!(clean_path(Path::new("../x/../y")), PathBuf::from("../y"));
    }
}
