//! `[js]` and `[css]` section configuration.
//!
//! Both sections share one shape; only the default extension differs.
//!
//! # Example
//!
//! ```toml
//! [js]
//! extensions = [".js"]
//! ignore_starts_with = ["//"]
//! ignore_contains = ["://"]
//! include = ["/home/me/shared/analytics.js"]
//! include_position = "after"   # included files go after discovered ones
//! position = "before"          # bundle tag goes before the first <script src>
//! output = "site.min.js"       # default: all-<hex>.dwindle.js
//! ```

use super::{Position, strings};
use crate::asset::AssetClass;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSectionConfig {
    /// Recognized file suffixes. `None` falls back to the class default.
    pub extensions: Option<Vec<String>>,
    /// References starting with any of these are left alone.
    pub ignore_starts_with: Vec<String>,
    /// References containing any of these are left alone.
    pub ignore_contains: Vec<String>,
    /// Absolute paths of files bundled in addition to discovered ones.
    pub include: Vec<PathBuf>,
    /// Whether included files precede or follow discovered ones.
    pub include_position: Position,
    /// Whether the bundle tag is anchored on the first or the last tag.
    pub position: Position,
    /// Bundle file name.
    pub output: Option<String>,
}

/// Field paths of one asset section.
pub struct AssetFields {
    pub extensions: FieldPath,
    pub include: FieldPath,
    pub output: FieldPath,
}

impl Default for AssetSectionConfig {
    fn default() -> Self {
        Self {
            extensions: None,
            ignore_starts_with: strings(&["//"]),
            ignore_contains: strings(&["://"]),
            include: Vec::new(),
            include_position: Position::After,
            position: Position::Before,
            output: None,
        }
    }
}

impl AssetSectionConfig {
    pub const JS_FIELDS: AssetFields = AssetFields {
        extensions: FieldPath::new("js.extensions"),
        include: FieldPath::new("js.include"),
        output: FieldPath::new("js.output"),
    };

    pub const CSS_FIELDS: AssetFields = AssetFields {
        extensions: FieldPath::new("css.extensions"),
        include: FieldPath::new("css.include"),
        output: FieldPath::new("css.output"),
    };

    pub const fn fields(class: AssetClass) -> &'static AssetFields {
        match class {
            AssetClass::Script => &Self::JS_FIELDS,
            AssetClass::Style => &Self::CSS_FIELDS,
        }
    }

    /// Recognized extensions, falling back to the class default.
    pub fn extensions(&self, class: AssetClass) -> Vec<String> {
        self.extensions
            .clone()
            .unwrap_or_else(|| vec![class.default_extension().to_string()])
    }

    /// Validate one asset section.
    ///
    /// # Checks
    /// - explicitly set `extensions` must not be empty
    /// - each `include` entry must be absolute, exist and be a regular file
    /// - `output`, if set, must be a plain file name
    pub fn validate(&self, class: AssetClass, diag: &mut ConfigDiagnostics) {
        let fields = Self::fields(class);

        if self.extensions.as_ref().is_some_and(Vec::is_empty) {
            diag.error(
                fields.extensions,
                format!("at least one {} extension must be provided", class.label()),
            );
        }

        for path in &self.include {
            Self::validate_include(path, class, fields.include, diag);
        }

        if let Some(name) = &self.output
            && !is_plain_file_name(name)
        {
            diag.error_with_hint(
                fields.output,
                format!("`{name}` is not a file name"),
                "put the bundle in a subdirectory with `output.dir`",
            );
        }
    }

    fn validate_include(
        path: &Path,
        class: AssetClass,
        field: FieldPath,
        diag: &mut ConfigDiagnostics,
    ) {
        let label = class.label();
        if !path.is_absolute() {
            diag.error(
                field,
                format!(
                    "{label} file to be included must be absolute: `{}`",
                    path.display()
                ),
            );
        } else if !path.exists() {
            diag.error(
                field,
                format!(
                    "{label} file to be included does not exist: `{}`",
                    path.display()
                ),
            );
        } else if !path.is_file() {
            diag.error(
                field,
                format!(
                    "{label} file to be included must be a file: `{}`",
                    path.display()
                ),
            );
        }
    }
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains(['/', '\\'])
        && Path::new(name).file_name().is_some_and(|n| n == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_extensions_fall_back_per_class() {
        let config = AssetSectionConfig::default();
        assert_eq!(config.extensions(AssetClass::Script), vec![".js"]);
        assert_eq!(config.extensions(AssetClass::Style), vec![".css"]);
    }

    #[test]
    fn test_explicit_empty_extensions_rejected() {
        let config = AssetSectionConfig {
            extensions: Some(Vec::new()),
            ..AssetSectionConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(AssetClass::Style, &mut diag);
        assert!(diag.has_error_for(AssetSectionConfig::CSS_FIELDS.extensions));
    }

    #[test]
    fn test_include_must_be_absolute() {
        let config = AssetSectionConfig {
            include: vec![PathBuf::from("relative/a.js")],
            ..AssetSectionConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(AssetClass::Script, &mut diag);
        assert!(diag.errors()[0].message.contains("must be absolute"));
    }

    #[test]
    fn test_include_missing_and_directory() {
        let dir = TempDir::new().unwrap();
        let config = AssetSectionConfig {
            include: vec![dir.path().join("missing.js"), dir.path().to_path_buf()],
            ..AssetSectionConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(AssetClass::Script, &mut diag);
        assert_eq!(diag.len(), 2);
        assert!(diag.errors()[0].message.contains("does not exist"));
        assert!(diag.errors()[1].message.contains("must be a file"));
    }

    #[test]
    fn test_include_existing_file_ok() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("extra.css");
        fs::write(&file, ".a{}").unwrap();
        let config = AssetSectionConfig {
            include: vec![file],
            ..AssetSectionConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(AssetClass::Style, &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_output_name_must_be_plain() {
        assert!(is_plain_file_name("site.min.js"));
        assert!(!is_plain_file_name("assets/site.js"));
        assert!(!is_plain_file_name(""));
        assert!(!is_plain_file_name(".."));
    }
}
