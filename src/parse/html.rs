//! Head element walker.
//!
//! Turns a parsed document into an ordered snapshot of the `<head>` element
//! children. Each snapshot carries everything the extractor needs: the
//! lower-cased tag name, attributes in declaration order, text content and
//! the `href` of `<link>` and `<base>` resolved to an absolute URL.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::config::{BASE_HREF_SELECTOR_STR, HEAD_SELECTOR_STR};

static HEAD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(HEAD_SELECTOR_STR, "HEAD_SELECTOR"));

static BASE_HREF_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(BASE_HREF_SELECTOR_STR, "BASE_HREF_SELECTOR")
});

/// Snapshot of one head child element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeadElement {
    tag_name: String,
    attributes: Vec<(String, String)>,
    text: String,
    href: Option<String>,
}

impl HeadElement {
    /// Creates an element snapshot without attributes or text.
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            ..Default::default()
        }
    }

    /// Appends an attribute. A repeated name keeps its first value, as HTML parsing does.
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        if !self.has_attribute(name) {
            self.attributes.push((name.to_string(), value.to_string()));
        }
        self
    }

    /// Sets the text content.
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// Sets the resolved absolute URL of the element's `href`.
    pub fn with_resolved_href(mut self, href: &str) -> Self {
        self.href = Some(href.to_string());
        self
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|(n, _)| n == name)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Attributes in declaration order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn text_content(&self) -> &str {
        &self.text
    }

    /// The `href` resolved to an absolute URL, if the element has one and it resolves.
    pub fn resolved_href(&self) -> Option<&str> {
        self.href.as_deref()
    }
}

/// Collects the element children of the document's `<head>` in document order.
///
/// The effective base URL is the first `<base href>` resolved against
/// `document_url`, falling back to `document_url` itself. Relative hrefs that
/// cannot be resolved against any absolute URL are left unresolved.
///
/// # Arguments
///
/// * `document` - The parsed HTML document
/// * `document_url` - URL the document was loaded from, if known
///
/// # Returns
///
/// One `HeadElement` per element child of `<head>`, including elements the
/// extractor has no mapping for (their positions still count).
pub fn head_elements(document: &Html, document_url: Option<&Url>) -> Vec<HeadElement> {
    let Some(head) = document.select(&HEAD_SELECTOR).next() else {
        log::debug!("No head element found in document");
        return Vec::new();
    };

    let base_url = effective_base_url(head, document_url);
    log::debug!(
        "Resolving head hrefs against {}",
        base_url.as_ref().map_or("<none>", Url::as_str)
    );

    let elements: Vec<HeadElement> = head
        .children()
        .filter_map(ElementRef::wrap)
        .map(|element| snapshot(element, document_url, base_url.as_ref()))
        .collect();

    log::debug!("Found {} head elements", elements.len());
    elements
}

fn effective_base_url(head: ElementRef<'_>, document_url: Option<&Url>) -> Option<Url> {
    let base_href = head
        .select(&BASE_HREF_SELECTOR)
        .next()
        .and_then(|base| base.value().attr("href"));

    match base_href {
        Some(href) => resolve(href, document_url).or_else(|| document_url.cloned()),
        None => document_url.cloned(),
    }
}

fn resolve(href: &str, base: Option<&Url>) -> Option<Url> {
    match base {
        Some(base) => base.join(href.trim()).ok(),
        None => Url::parse(href.trim()).ok(),
    }
}

fn snapshot(
    element: ElementRef<'_>,
    document_url: Option<&Url>,
    base_url: Option<&Url>,
) -> HeadElement {
    let value = element.value();
    let tag_name = value.name().to_ascii_lowercase();
    let attributes = value
        .attrs()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    // A base href is relative to the document, never to itself
    let href_base = match tag_name.as_str() {
        "base" => Some(document_url),
        "link" => Some(base_url),
        _ => None,
    };
    let href = href_base
        .and_then(|base| value.attr("href").and_then(|href| resolve(href, base)))
        .map(String::from);

    HeadElement {
        tag_name,
        attributes,
        text: element.text().collect(),
        href,
    }
}
