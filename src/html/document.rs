//! Mutable HTML document handle.
//!
//! Wraps a parsed DOM for the time one page is processed: query with CSS
//! selectors, detach or insert nodes, then serialize back to text. A
//! document is never shared between pages or threads.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use kuchikiki::{ElementData, NodeDataRef, NodeRef, traits::*};
use thiserror::Error;

use crate::asset::AssetClass;

/// An element node matched by a selector.
pub type Element = NodeDataRef<ElementData>;

#[derive(Debug, Error)]
pub enum HtmlError {
    #[error("invalid selector `{0}`")]
    Selector(String),

    #[error("failed to build a `<{0}>` element")]
    Template(&'static str),
}

/// A parsed HTML page.
pub struct HtmlDocument {
    root: NodeRef,
}

impl HtmlDocument {
    pub fn parse(html: &str) -> Self {
        Self {
            root: kuchikiki::parse_html().one(html),
        }
    }

    /// Read and parse a page from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let html = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        Ok(Self::parse(&html))
    }

    /// All elements matching `selector`, in document order.
    pub fn select(&self, selector: &str) -> Result<Vec<Element>, HtmlError> {
        self.root
            .select(selector)
            .map(|elements| elements.collect())
            .map_err(|()| HtmlError::Selector(selector.to_string()))
    }

    /// Detach every element matching `selector`. Returns how many were removed.
    pub fn remove(&self, selector: &str) -> Result<usize, HtmlError> {
        let elements = self.select(selector)?;
        for element in &elements {
            element.as_node().detach();
        }
        Ok(elements.len())
    }

    /// Values of `attribute` on every element matching `selector`.
    pub fn attribute_values(&self, selector: &str, attribute: &str) -> Result<Vec<String>, HtmlError> {
        Ok(self
            .select(selector)?
            .iter()
            .filter_map(|element| get_attribute(element, attribute))
            .collect())
    }

    pub fn serialize(&self) -> Result<String> {
        let mut out = Vec::new();
        self.root
            .serialize(&mut out)
            .context("failed to serialize HTML")?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    /// Serialize and overwrite `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let html = self.serialize()?;
        fs::write(path, html).with_context(|| format!("failed to write `{}`", path.display()))
    }
}

pub fn get_attribute(element: &Element, name: &str) -> Option<String> {
    element.attributes.borrow().get(name).map(str::to_string)
}

pub fn set_attribute(element: &Element, name: &str, value: String) {
    element.attributes.borrow_mut().insert(name, value);
}

/// Build a detached `<script src>` or `<link rel="stylesheet" href>` node.
pub fn bundle_tag(class: AssetClass, url: &str) -> Result<NodeRef, HtmlError> {
    let (markup, tag) = match class {
        AssetClass::Script => ("<script></script>", "script"),
        AssetClass::Style => (r#"<link rel="stylesheet">"#, "link"),
    };

    let template = kuchikiki::parse_html().one(markup);
    let element = template
        .descendants()
        .elements()
        .find(|e| &*e.name.local == tag)
        .ok_or(HtmlError::Template(tag))?;

    set_attribute(&element, class.attribute(), url.to_string());

    let node = element.as_node().clone();
    node.detach();
    Ok(node)
}
