//! Asset minification for JS and CSS bundles.
//!
//! Uses oxc for JavaScript and lightningcss for CSS. Any parse error is
//! returned; nothing is minified on a best-effort basis.

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;
use thiserror::Error;

use crate::config::MinifyConfig;

#[derive(Debug, Error)]
pub enum MinifyError {
    #[error("JavaScript syntax error in `{name}`: {message}")]
    Script { name: String, message: String },

    #[error("CSS error: {0}")]
    Style(String),
}

/// Classic (non-module) scripts, as loaded by `<script src>`.
fn script_source_type() -> SourceType {
    SourceType::mjs().with_module(false)
}

/// Parse one named source, reporting its syntax errors under `name`.
fn check_script(name: &str, source: &str) -> Result<(), MinifyError> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, script_source_type()).parse();
    if ret.errors.is_empty() {
        return Ok(());
    }
    let message = ret
        .errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Err(MinifyError::Script {
        name: name.to_string(),
        message,
    })
}

/// Minify named JavaScript sources into one script.
///
/// Sources are checked one by one so an error names its file, then joined
/// in order and minified as a single program.
pub fn minify_js<'a, I>(sources: I, options: &MinifyConfig) -> Result<String, MinifyError>
where
    I: IntoIterator<Item = (String, &'a str)>,
{
    let mut joined = String::new();
    for (name, source) in sources {
        check_script(&name, source)?;
        joined.push_str(source);
        joined.push_str("\n;\n");
    }

    if joined.is_empty() {
        return Ok(String::new());
    }

    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, &joined, script_source_type()).parse();
    if !ret.errors.is_empty() {
        return Err(MinifyError::Script {
            name: "<bundle>".to_string(),
            message: ret
                .errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        });
    }

    let mut program = ret.program;
    let minifier_options = MinifierOptions {
        mangle: options.mangle.then(|| MangleOptions {
            top_level: Some(options.toplevel),
            ..MangleOptions::default()
        }),
        compress: options.compress.then(CompressOptions::smallest),
    };
    let ret = Minifier::new(minifier_options).minify(&allocator, &mut program);
    let code = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(ret.scoping)
        .build(&program)
        .code;
    Ok(code)
}

/// Minify CSS source code.
pub fn minify_css(source: &str) -> Result<String, MinifyError> {
    let stylesheet = StyleSheet::parse(source, ParserOptions::default())
        .map_err(|e| MinifyError::Style(e.to_string()))?;
    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .map_err(|e| MinifyError::Style(e.to_string()))?;
    Ok(result.code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn js(sources: &[(&str, &str)]) -> Result<String, MinifyError> {
        minify_js(
            sources.iter().map(|(n, s)| ((*n).to_string(), *s)),
            &MinifyConfig::default(),
        )
    }

    #[test]
    fn test_minify_js_keeps_side_effects() {
        let code = js(&[("a.js", "window.answer = 42;")]).unwrap();
        assert!(code.contains("window.answer=42"), "got: {code}");
    }

    #[test]
    fn test_minify_js_order() {
        let code = js(&[
            ("first.js", "console.log('first');"),
            ("second.js", "console.log('second');"),
        ])
        .unwrap();
        let first = code.find("first").unwrap();
        let second = code.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_minify_js_reports_source_name() {
        let err = js(&[("ok.js", "a();"), ("broken.js", "var = ;")]).unwrap_err();
        assert!(matches!(&err, MinifyError::Script { name, .. } if name == "broken.js"));
        assert!(err.to_string().contains("broken.js"));
    }

    #[test]
    fn test_minify_js_empty() {
        assert_eq!(js(&[]).unwrap(), "");
    }

    #[test]
    fn test_minify_js_missing_semicolons_between_files() {
        let code = js(&[("a.js", "var a = 1"), ("b.js", "(function(){ a++ })()")]);
        assert!(code.is_ok());
    }

    #[test]
    fn test_minify_js_toplevel_mangles_globals() {
        let source = [("a.js".to_string(), "var longVariableName = 1; console.log(longVariableName);")];
        let options = MinifyConfig {
            compress: false,
            ..MinifyConfig::default()
        };

        let code = minify_js(source.clone(), &options).unwrap();
        assert!(code.contains("longVariableName"), "got: {code}");

        let toplevel = MinifyConfig {
            toplevel: true,
            ..options
        };
        let code = minify_js(source, &toplevel).unwrap();
        assert!(!code.contains("longVariableName"), "got: {code}");
        assert!(code.contains("console.log("));
    }

    #[test]
    fn test_minify_css() {
        assert_eq!(minify_css(".x{color:red;}").unwrap(), ".x{color:red}");
    }
}
