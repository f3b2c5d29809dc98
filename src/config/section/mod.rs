//! Configuration section definitions.
//!
//! | Section     | Purpose                                              |
//! |-------------|------------------------------------------------------|
//! | `[html]`    | Page extensions and element removal selectors        |
//! | `[js]`      | Script discovery, includes, bundle tag placement     |
//! | `[css]`     | Stylesheet discovery, includes, bundle tag placement |
//! | `[output]`  | Bundle directory and never-bundled extensions        |
//! | `[replace]` | Find/replace over bundle URLs or page attributes     |
//! | `[minify]`  | Options handed to the JavaScript minifier            |

mod asset;
mod html;
mod minify;
mod output;
mod replace;

pub use asset::AssetSectionConfig;
pub use html::HtmlConfig;
pub use minify::MinifyConfig;
pub use output::OutputConfig;
pub use replace::{ReplaceConfig, ReplaceScope};

use serde::{Deserialize, Serialize};

/// Relative placement used for both include ordering and bundle tag insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Before,
    After,
}

/// Convert a list of `&str` into owned strings (for defaults).
pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
