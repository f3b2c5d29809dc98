//! Merging discovered and included assets into the two bundles.
//!
//! Bundle names are chosen once per run. Every page rewritten afterwards
//! refers to the same name.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use super::{
    AssetClass, AssetMap,
    minify::{minify_css, minify_js},
};
use crate::{
    config::{DwindleConfig, MinifyConfig, Position},
    debug,
    utils::path::to_web_path,
};

/// Merge the two collections of one asset class.
///
/// `Before` puts the included block ahead of the discovered block, `After`
/// behind it. Order inside each block is kept; a path present in both stays
/// where it first appears.
pub fn merge(discovered: &AssetMap, included: &AssetMap, position: Position) -> AssetMap {
    let (first, second) = match position {
        Position::Before => (included, discovered),
        Position::After => (discovered, included),
    };
    let mut merged = AssetMap::new();
    merged.extend_from(first);
    merged.extend_from(second);
    merged
}

/// `all-<8 hex>.dwindle.<ext>`.
pub fn generated_name(class: AssetClass) -> String {
    format!(
        "all-{:08x}.dwindle.{}",
        rand::random::<u32>(),
        class.bundle_extension()
    )
}

/// Minify the merged sources of one class into bundle text.
///
/// Scripts keep their per-file identity for error reporting. Stylesheets
/// are joined with newlines and minified as one sheet, see
/// [`join_stylesheets`].
pub fn build(class: AssetClass, sources: &AssetMap, options: &MinifyConfig) -> Result<String> {
    let code = match class {
        AssetClass::Script => minify_js(
            sources
                .iter()
                .map(|(path, content)| (path.display().to_string(), content)),
            options,
        )?,
        AssetClass::Style => {
            let joined = join_stylesheets(sources.iter().map(|(_, content)| content));
            if joined.trim().is_empty() {
                String::new()
            } else {
                minify_css(&joined)?
            }
        }
    };
    Ok(code)
}

/// At-rules only allowed ahead of every style rule.
const LEADING_AT_RULES: [&str; 3] = ["@charset", "@import", "@layer"];

/// Join stylesheets with newlines.
///
/// The `@charset`, `@import` and `@layer` statements a sheet starts with
/// move to the top of the result, in sheet order, so a later sheet's
/// `@import` does not end up behind another sheet's rules. Only the first
/// `@charset` is kept.
fn join_stylesheets<'a>(sheets: impl IntoIterator<Item = &'a str>) -> String {
    let mut charset = None;
    let mut statements = Vec::new();
    let mut bodies = Vec::new();

    for sheet in sheets {
        let (leading, body) = split_leading_statements(sheet);
        for (name, statement) in leading {
            if name == "@charset" {
                charset.get_or_insert(statement);
            } else {
                statements.push(statement);
            }
        }
        bodies.push(body);
    }

    charset
        .into_iter()
        .chain(statements)
        .chain(bodies)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split off the leading at-rule statements of one sheet.
fn split_leading_statements(sheet: &str) -> (Vec<(&'static str, &str)>, &str) {
    let mut statements = Vec::new();
    let mut end = 0;

    loop {
        let start = end + trivia_len(&sheet[end..]);
        let rest = &sheet[start..];
        let Some(name) = leading_at_rule(rest) else {
            break;
        };
        let Some(len) = statement_len(rest) else {
            break;
        };
        statements.push((name, &rest[..len]));
        end = start + len;
    }

    (statements, &sheet[end..])
}

/// Length of the whitespace and comments `css` starts with.
fn trivia_len(css: &str) -> usize {
    let mut rest = css;
    loop {
        let trimmed = rest.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
        match trimmed.strip_prefix("/*") {
            Some(comment) => match comment.find("*/") {
                Some(close) => rest = &comment[close + 2..],
                None => return css.len(),
            },
            None => return css.len() - trimmed.len(),
        }
    }
}

fn leading_at_rule(css: &str) -> Option<&'static str> {
    LEADING_AT_RULES.into_iter().find(|name| {
        css.get(..name.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(name))
            && !css[name.len()..].starts_with(|c: char| c.is_alphanumeric() || c == '-' || c == '_')
    })
}

/// Length of a `;`-terminated statement, `None` for block rules.
fn statement_len(rule: &str) -> Option<usize> {
    let mut quote = None;
    let mut escaped = false;
    let mut depth = 0usize;

    for (i, c) in rule.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '{' if depth == 0 => return None,
            ';' if depth == 0 => return Some(i + 1),
            _ => {}
        }
    }
    None
}

/// One written (or about to be written) output file.
#[derive(Debug, Clone)]
pub struct Bundle {
    pub class: AssetClass,
    /// Web path from the site root, e.g. `assets/all-1a2b3c4d.dwindle.js`.
    pub name: String,
    pub path: PathBuf,
}

impl Bundle {
    /// Name the bundle of `class` from the configured or a generated name.
    pub fn new(class: AssetClass, config: &DwindleConfig) -> Self {
        let file_name = config
            .section(class)
            .output
            .clone()
            .unwrap_or_else(|| generated_name(class));

        let name = match &config.output.dir {
            Some(dir) => to_web_path(&dir.join(&file_name)),
            None => file_name.clone(),
        };

        Self {
            class,
            name,
            path: config.output_dir().join(&file_name),
        }
    }

    /// Overwrite the bundle file with `code`.
    pub fn write(&self, code: &str) -> Result<()> {
        fs::write(&self.path, code)
            .with_context(|| format!("failed to write bundle `{}`", self.path.display()))?;
        debug!("bundle"; "wrote {} ({} bytes)", self.path.display(), code.len());
        Ok(())
    }
}
