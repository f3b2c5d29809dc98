//! Insertion-ordered asset map.
//!
//! Bundle order is the order assets were first seen, so the map keeps a
//! `Vec` of entries for ordering and a hash set for O(1) membership.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;

/// Resolved path → file content, in first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct AssetMap {
    entries: Vec<(PathBuf, String)>,
    seen: FxHashSet<PathBuf>,
}

impl AssetMap {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, path: &Path) -> bool {
        self.seen.contains(path)
    }

    /// Insert unless the path is already present. The first entry wins.
    ///
    /// Returns `true` if the entry was added.
    pub fn insert(&mut self, path: PathBuf, content: String) -> bool {
        if self.seen.contains(&path) {
            return false;
        }
        self.seen.insert(path.clone());
        self.entries.push((path, content));
        true
    }

    /// Append every entry of `other` not already present, keeping its order.
    pub fn extend_from(&mut self, other: &Self) {
        for (path, content) in &other.entries {
            self.insert(path.clone(), content.clone());
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.entries
            .iter()
            .map(|(path, content)| (path.as_path(), content.as_str()))
    }

    #[cfg(test)]
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(|(path, _)| path.as_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first() {
        let mut map = AssetMap::new();
        assert!(map.insert(PathBuf::from("/b.js"), "b".into()));
        assert!(map.insert(PathBuf::from("/a.js"), "a".into()));
        assert!(!map.insert(PathBuf::from("/b.js"), "other".into()));

        let entries: Vec<_> = map.iter().collect();
        assert_eq!(
            entries,
            vec![(Path::new("/b.js"), "b"), (Path::new("/a.js"), "a")]
        );
        assert!(map.contains(Path::new("/a.js")));
    }

    #[test]
    fn test_extend_from_skips_duplicates() {
        let mut first = AssetMap::new();
        first.insert(PathBuf::from("/a.js"), "a".into());
        let mut second = AssetMap::new();
        second.insert(PathBuf::from("/c.js"), "c".into());
        second.insert(PathBuf::from("/a.js"), "changed".into());

        first.extend_from(&second);

        let paths: Vec<_> = first.paths().collect();
        assert_eq!(paths, vec![Path::new("/a.js"), Path::new("/c.js")]);
        assert_eq!(first.iter().next().unwrap().1, "a");
    }
}
