//! `[minify]` section configuration.
//!
//! Handed to the JavaScript minifier untouched. The same record can be
//! given on the command line as JSON: `--minify-options '{"toplevel":true}'`.
//!
//! ```toml
//! [minify]
//! toplevel = false   # mangle names declared at the top level
//! mangle = true
//! compress = true
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MinifyConfig {
    /// Rename top-level bindings (unsafe when pages share globals).
    pub toplevel: bool,
    /// Shorten local names.
    pub mangle: bool,
    /// Apply compression transforms.
    pub compress: bool,
}

impl Default for MinifyConfig {
    fn default() -> Self {
        Self {
            toplevel: false,
            mangle: true,
            compress: true,
        }
    }
}

impl MinifyConfig {
    /// Parse the JSON form used on the command line.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_partial() {
        let options = MinifyConfig::from_json(r#"{"toplevel": true}"#).unwrap();
        assert!(options.toplevel);
        assert!(options.mangle);
        assert!(options.compress);
    }

    #[test]
    fn test_from_json_rejects_unknown_and_non_object() {
        assert!(MinifyConfig::from_json(r#"{"toplevl": true}"#).is_err());
        assert!(MinifyConfig::from_json("[1, 2]").is_err());
    }
}
