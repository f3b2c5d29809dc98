//! Run configuration for `dwindle.toml` and command-line flags.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [html] [js] [css] [output] [replace] [minify]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! └── mod.rs         # DwindleConfig (this file)
//! ```
//!
//! # Loading order
//!
//! 1. Defaults (the values of every section's `Default`)
//! 2. `dwindle.toml` in the input directory, or the file given by `--config`
//! 3. Command-line flags, field by field
//! 4. Validation of the merged record, reporting every problem at once
//!
//! The record is immutable once a run starts.

pub mod section;
pub mod types;

pub use section::{
    AssetSectionConfig, HtmlConfig, MinifyConfig, OutputConfig, Position, ReplaceConfig,
    ReplaceScope,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{asset::AssetClass, cli::Cli, utils::path::normalize_path, warn};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name, looked up in the input directory.
pub const CONFIG_FILE_NAME: &str = "dwindle.toml";

const ROOT_FIELD: FieldPath = FieldPath::new("dir");

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing dwindle.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DwindleConfig {
    /// Input directory holding the site (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Config file the values were read from, if any (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    pub html: HtmlConfig,
    pub js: AssetSectionConfig,
    pub css: AssetSectionConfig,
    pub output: OutputConfig,
    pub replace: ReplaceConfig,
    pub minify: MinifyConfig,
}

impl DwindleConfig {
    /// Default configuration for a site directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Load configuration from CLI arguments and validate it.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let root = normalize_path(&cli.dir);

        let config_path = match &cli.config {
            Some(path) => Some(path.clone()),
            None => Some(root.join(CONFIG_FILE_NAME)).filter(|p| p.is_file()),
        };

        let mut config = match &config_path {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };

        config.root = root;
        config.config_path = config_path;
        config.apply_cli(cli)?;
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    #[cfg(test)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        warn!("config"; "unknown fields in {} are ignored:", path.display());
        for field in fields {
            eprintln!("- {field}");
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-line flags on top of file values.
    fn apply_cli(&mut self, cli: &Cli) -> Result<(), ConfigError> {
        Self::update_option(&mut self.html.extensions, cli.html_file_extensions.as_ref());
        Self::update_option(&mut self.html.remove, cli.remove_element_queries.as_ref());
        Self::update_option(
            &mut self.output.ignored_extensions,
            cli.ignored_file_extensions.as_ref(),
        );

        if let Some(extensions) = &cli.js_file_extensions {
            self.js.extensions = Some(extensions.clone());
        }
        Self::update_option(&mut self.js.ignore_starts_with, cli.ignored_js_starts_with.as_ref());
        Self::update_option(&mut self.js.ignore_contains, cli.ignored_js_contains.as_ref());
        Self::update_option(&mut self.js.include, cli.include_js.as_ref());
        Self::update_option(&mut self.js.include_position, cli.include_js_position.as_ref());
        Self::update_option(&mut self.js.position, cli.js_position.as_ref());
        if let Some(name) = &cli.js_output {
            self.js.output = Some(name.clone());
        }

        if let Some(extensions) = &cli.css_file_extensions {
            self.css.extensions = Some(extensions.clone());
        }
        Self::update_option(&mut self.css.ignore_starts_with, cli.ignored_css_starts_with.as_ref());
        Self::update_option(&mut self.css.ignore_contains, cli.ignored_css_contains.as_ref());
        Self::update_option(&mut self.css.include, cli.include_css.as_ref());
        Self::update_option(&mut self.css.include_position, cli.include_css_position.as_ref());
        Self::update_option(&mut self.css.position, cli.css_position.as_ref());
        if let Some(name) = &cli.css_output {
            self.css.output = Some(name.clone());
        }

        if let Some(dir) = &cli.output_dir {
            self.output.dir = Some(dir.clone());
        }

        if let Some(json) = &cli.minify_options {
            self.minify = MinifyConfig::from_json(json).map_err(ConfigError::MinifyOptions)?;
        }

        let replace = &cli.replace;
        if let Some(pattern) = &replace.pattern {
            self.replace.pattern = Some(pattern.clone());
        }
        Self::update_option(&mut self.replace.replacement, replace.replacement.as_ref());
        if replace.regex {
            self.replace.regex = true;
        }
        Self::update_option(&mut self.replace.scope, replace.scope.as_ref());
        Self::update_option(&mut self.replace.attributes, replace.attributes.as_ref());
        Self::update_option(&mut self.replace.extensions, replace.extensions.as_ref());
        Self::update_option(
            &mut self.replace.ignored_extensions,
            replace.ignored_extensions.as_ref(),
        );
        Self::update_option(
            &mut self.replace.ignore_starts_with,
            replace.ignore_starts_with.as_ref(),
        );
        Self::update_option(
            &mut self.replace.ignore_contains,
            replace.ignore_contains.as_ref(),
        );

        Ok(())
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the whole configuration, collecting every problem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        if !self.root.exists() {
            diag.error(
                ROOT_FIELD,
                format!("directory `{}` must exist", self.root.display()),
            );
        } else if !self.root.is_dir() {
            diag.error(
                ROOT_FIELD,
                format!("`{}` must be a directory", self.root.display()),
            );
        }

        self.html.validate(&mut diag);
        self.js.validate(AssetClass::Script, &mut diag);
        self.css.validate(AssetClass::Style, &mut diag);
        self.output.validate(&self.root, &mut diag);
        self.replace.validate(&mut diag);

        diag.into_result()
    }

    // ========================================================================
    // accessors
    // ========================================================================

    /// Section for one asset class.
    pub const fn section(&self, class: AssetClass) -> &AssetSectionConfig {
        match class {
            AssetClass::Script => &self.js,
            AssetClass::Style => &self.css,
        }
    }

    /// Directory the bundles are written to.
    pub fn output_dir(&self) -> PathBuf {
        match &self.output.dir {
            Some(dir) => self.root.join(dir),
            None => self.root.clone(),
        }
    }
}
