// src/core/html.rs
// Thin layer over the scraper/html5ever tree.
// Tag and attribute names come back lowercased from the parser, so matching is
// effectively case-insensitive on the source markup.

use std::path::Path;

use scraper::{ElementRef, Html};

use super::sanitize::normalize_ws;
use crate::error::Result;

/// Parse a whole page. html5ever repairs broken markup instead of failing.
pub fn load_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// Read a saved page from disk and parse it. Invalid UTF-8 is replaced, not rejected.
pub fn load_document_file(path: &Path) -> Result<Html> {
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(load_document(&text))
}

/// All elements under `root` (itself included) whose tag is one of `names`,
/// in document order.
pub fn elements_named<'a>(
    root: ElementRef<'a>,
    names: &'static [&'static str],
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    root.descendants()
        .filter_map(ElementRef::wrap)
        .filter(move |el| names.iter().any(|n| *n == el.value().name()))
}

/// Same as [`elements_named`] but starting from the document root.
pub fn document_elements<'a>(
    doc: &'a Html,
    names: &'static [&'static str],
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    elements_named(doc.root_element(), names)
}

/// Visible text of an element and its descendants, whitespace collapsed and trimmed.
pub fn element_text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

pub fn has_attr(el: ElementRef<'_>, name: &str) -> bool {
    el.value().attr(name).is_some()
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

/// Whitespace-separated tokens of the `class` attribute.
pub fn class_tokens<'a>(el: ElementRef<'a>) -> impl Iterator<Item = &'a str> + 'a {
    el.value().attr("class").unwrap_or("").split_whitespace()
}

/// First element under `root` (excluding `root`) with the given tag.
pub fn first_descendant<'a>(root: ElementRef<'a>, name: &'static str) -> Option<ElementRef<'a>> {
    root.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == name)
}
