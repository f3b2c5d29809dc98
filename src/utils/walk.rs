//! Directory traversal.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jwalk::WalkDir;

/// List every regular file below `root`, descending into subdirectories.
///
/// Subdirectories are read in parallel; entries are sorted per directory
/// so the returned order is stable between runs. Hidden files are kept.
pub fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).skip_hidden(false).sort(true) {
        let entry = entry.with_context(|| format!("failed to walk `{}`", root.display()))?;
        if entry.file_type().is_file() {
            files.push(entry.path());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_files_recursive() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("index.html"), "").unwrap();
        fs::write(dir.path().join("a/b/page.html"), "").unwrap();
        fs::write(dir.path().join(".hidden.js"), "").unwrap();

        let files = list_files(dir.path()).unwrap();

        assert_eq!(files.len(), 3);
        assert!(files.contains(&dir.path().join("a/b/page.html")));
        assert!(files.contains(&dir.path().join(".hidden.js")));
        assert!(files.iter().all(|f| f.is_file()));
    }
}
