//! `[output]` section configuration.
//!
//! ```toml
//! [output]
//! dir = "assets"                                     # relative to the input directory
//! ignored_extensions = [".dwindle.js", ".dwindle.css"]
//! ```

use super::strings;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the bundles are written to, relative to the input root.
    pub dir: Option<PathBuf>,
    /// Files with these suffixes are never bundled nor removed from pages.
    ///
    /// The defaults cover bundles from earlier runs.
    pub ignored_extensions: Vec<String>,
}

pub struct OutputFields {
    pub dir: FieldPath,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: None,
            ignored_extensions: strings(&[".dwindle.js", ".dwindle.css"]),
        }
    }
}

impl OutputConfig {
    pub const FIELDS: OutputFields = OutputFields {
        dir: FieldPath::new("output.dir"),
    };

    /// Validate output configuration against the input root.
    ///
    /// # Checks
    /// - `dir` must be relative and name an existing directory under `root`
    pub fn validate(&self, root: &Path, diag: &mut ConfigDiagnostics) {
        let Some(dir) = &self.dir else {
            return;
        };

        if dir.is_absolute() {
            diag.error_with_hint(
                Self::FIELDS.dir,
                format!("`{}` must be relative to the input directory", dir.display()),
                "use a path such as `assets` or `static/bundles`",
            );
        } else if !root.join(dir).is_dir() {
            diag.error(
                Self::FIELDS.dir,
                format!(
                    "output directory `{}` does not exist in `{}`",
                    dir.display(),
                    root.display()
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_output_dir_must_exist() {
        let root = TempDir::new().unwrap();
        let config = OutputConfig {
            dir: Some(PathBuf::from("assets")),
            ..OutputConfig::default()
        };

        let mut diag = ConfigDiagnostics::new();
        config.validate(root.path(), &mut diag);
        assert!(diag.has_error_for(OutputConfig::FIELDS.dir));

        fs::create_dir(root.path().join("assets")).unwrap();
        let mut diag = ConfigDiagnostics::new();
        config.validate(root.path(), &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_output_dir_must_be_relative() {
        let root = TempDir::new().unwrap();
        let config = OutputConfig {
            dir: Some(root.path().to_path_buf()),
            ..OutputConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(root.path(), &mut diag);
        assert!(diag.errors()[0].message.contains("must be relative"));
    }
}
