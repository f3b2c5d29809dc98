//! Command-line interface definitions.
//!
//! Every option is optional except `--dir`. List options take one or more
//! values; giving the flag with no value is rejected by the parser.

use crate::config::{Position, ReplaceScope};
use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Dwindle: bundle the scripts and stylesheets of a static site
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// The directory the website is in
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub dir: PathBuf,

    /// Config file path (default: <dir>/dwindle.toml when present)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,

    /// A list of HTML file extensions
    #[arg(long, num_args = 1.., value_name = "EXT")]
    pub html_file_extensions: Option<Vec<String>>,

    /// A list of JavaScript file extensions
    #[arg(long, num_args = 1.., value_name = "EXT")]
    pub js_file_extensions: Option<Vec<String>>,

    /// A list of CSS file extensions
    #[arg(long, num_args = 1.., value_name = "EXT")]
    pub css_file_extensions: Option<Vec<String>>,

    /// CSS selectors for elements to remove from the HTML
    #[arg(long, num_args = 1.., value_name = "SELECTOR")]
    pub remove_element_queries: Option<Vec<String>>,

    /// Files with these extensions are never bundled or removed
    #[arg(long, num_args = 1.., value_name = "EXT")]
    pub ignored_file_extensions: Option<Vec<String>>,

    /// Script `src` values starting with one of these are ignored
    #[arg(long, num_args = 1.., value_name = "PREFIX")]
    pub ignored_js_starts_with: Option<Vec<String>>,

    /// Script `src` values containing one of these are ignored
    #[arg(long, num_args = 1.., value_name = "TEXT")]
    pub ignored_js_contains: Option<Vec<String>>,

    /// Stylesheet `href` values starting with one of these are ignored
    #[arg(long, num_args = 1.., value_name = "PREFIX")]
    pub ignored_css_starts_with: Option<Vec<String>>,

    /// Stylesheet `href` values containing one of these are ignored
    #[arg(long, num_args = 1.., value_name = "TEXT")]
    pub ignored_css_contains: Option<Vec<String>>,

    /// Absolute paths of extra JavaScript files to add to the bundle
    #[arg(long, num_args = 1.., value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub include_js: Option<Vec<PathBuf>>,

    /// Whether included JavaScript goes before or after the discovered JavaScript
    #[arg(long, value_enum, requires = "include_js")]
    pub include_js_position: Option<Position>,

    /// Absolute paths of extra CSS files to add to the bundle
    #[arg(long, num_args = 1.., value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub include_css: Option<Vec<PathBuf>>,

    /// Whether included CSS goes before or after the discovered CSS
    #[arg(long, value_enum, requires = "include_css")]
    pub include_css_position: Option<Position>,

    /// Insert the script bundle tag before the first or the last script tag
    #[arg(long, value_enum)]
    pub js_position: Option<Position>,

    /// Insert the stylesheet bundle tag before the first or the last stylesheet tag
    #[arg(long, value_enum)]
    pub css_position: Option<Position>,

    /// Directory for the bundles, relative to --dir
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output_dir: Option<PathBuf>,

    /// File name for the JavaScript bundle
    #[arg(long, visible_alias = "output-file-name")]
    pub js_output: Option<String>,

    /// File name for the CSS bundle
    #[arg(long)]
    pub css_output: Option<String>,

    /// JSON object passed to the JavaScript minifier, e.g. '{"toplevel":true}'
    #[arg(long, value_name = "JSON")]
    pub minify_options: Option<String>,

    #[command(flatten)]
    pub replace: ReplaceArgs,
}

/// Find/replace options.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ReplaceArgs {
    /// Text to look for (first match is replaced)
    #[arg(long = "replace-pattern", value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Replacement text
    #[arg(long = "replace-with", value_name = "TEXT", requires = "pattern")]
    pub replacement: Option<String>,

    /// Treat the pattern as a regular expression
    #[arg(long = "replace-regex", requires = "pattern")]
    pub regex: bool,

    /// Apply to the bundle URL only, or to matching attributes on every element
    #[arg(long = "replace-scope", value_enum, requires = "pattern")]
    pub scope: Option<ReplaceScope>,

    /// Attributes rewritten with the local scope
    #[arg(long = "replace-attributes", num_args = 1.., value_name = "ATTR")]
    pub attributes: Option<Vec<String>>,

    /// Only values with one of these extensions are rewritten
    #[arg(long = "replace-extensions", num_args = 1.., value_name = "EXT")]
    pub extensions: Option<Vec<String>>,

    /// Values with one of these extensions are never rewritten
    #[arg(long = "replace-ignored-extensions", num_args = 1.., value_name = "EXT")]
    pub ignored_extensions: Option<Vec<String>>,

    /// Values starting with one of these are never rewritten
    #[arg(long = "replace-ignore-starts-with", num_args = 1.., value_name = "PREFIX")]
    pub ignore_starts_with: Option<Vec<String>>,

    /// Values containing one of these are never rewritten
    #[arg(long = "replace-ignore-contains", num_args = 1.., value_name = "TEXT")]
    pub ignore_contains: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_lists() {
        let cli = Cli::try_parse_from([
            "dwindle",
            "--dir",
            "site",
            "--js-file-extensions",
            ".js",
            ".mjs",
            "--remove-element-queries",
            ".ad-banner",
        ])
        .unwrap();
        assert_eq!(
            cli.js_file_extensions,
            Some(vec![".js".to_string(), ".mjs".to_string()])
        );
        assert_eq!(cli.remove_element_queries, Some(vec![".ad-banner".into()]));
    }

    #[test]
    fn test_empty_list_rejected() {
        let result = Cli::try_parse_from(["dwindle", "--dir", "site", "--html-file-extensions"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_include_position_requires_include() {
        let result = Cli::try_parse_from(["dwindle", "--dir", "site", "--include-js-position", "before"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from([
            "dwindle",
            "--dir",
            "site",
            "--include-js",
            "/abs/a.js",
            "--include-js-position",
            "before",
        ])
        .unwrap();
        assert_eq!(cli.include_js_position, Some(Position::Before));
    }

    #[test]
    fn test_invalid_position_rejected() {
        let result = Cli::try_parse_from(["dwindle", "--dir", "site", "--js-position", "middle"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_file_name_alias() {
        let cli = Cli::try_parse_from(["dwindle", "--dir", "site", "--output-file-name", "x.js"])
            .unwrap();
        assert_eq!(cli.js_output.as_deref(), Some("x.js"));
    }
}
