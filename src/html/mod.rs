//! HTML page handling: parsing, find/replace and in-place rewriting.

mod document;
mod replace;
mod rewrite;

pub use document::HtmlDocument;
pub use replace::Replacer;
pub use rewrite::Rewriter;
