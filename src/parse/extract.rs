//! Record extraction.

use scraper::Html;
use url::Url;

use super::html::{head_elements, HeadElement};
use super::mapping::{ElementMapping, HeadTag, KeyNameSource};
use crate::models::MetaItem;

/// Normalizes head elements into an ordered record list.
///
/// Elements without an applicable mapping are skipped; the remaining records
/// keep their true position among the head children as `index`.
///
/// # Arguments
///
/// * `elements` - Head children in document order
///
/// # Returns
///
/// One `MetaItem` per element that has a mapping, in input order.
pub fn extract(elements: &[HeadElement]) -> Vec<MetaItem> {
    let items: Vec<MetaItem> = elements
        .iter()
        .enumerate()
        .filter_map(|(index, element)| extract_element(index, element))
        .collect();

    log::debug!(
        "Extracted {} records from {} head elements",
        items.len(),
        elements.len()
    );
    items
}

/// Parses `html` and extracts the records of its `<head>`.
///
/// `document_url` is used to resolve relative hrefs; without it only
/// absolute hrefs (or those made absolute by `<base>`) get a `value_link`.
pub fn extract_document(html: &str, document_url: Option<&Url>) -> Vec<MetaItem> {
    let document = Html::parse_document(html);
    extract(&head_elements(&document, document_url))
}

fn extract_element(index: usize, element: &HeadElement) -> Option<MetaItem> {
    let tag = HeadTag::from_name(element.tag_name())?;
    let mapping = select_mapping(tag, element)?;

    let key = match mapping.key_name_source {
        KeyNameSource::TagName => element.tag_name().to_string(),
        KeyNameSource::TagText => element.text_content().to_string(),
        KeyNameSource::AttributeName => mapping
            .key_attribute
            .unwrap_or(element.tag_name())
            .to_string(),
        KeyNameSource::AttributeValue => mapping
            .key_attribute
            .and_then(|name| element.attribute(name))
            .unwrap_or_default()
            .to_string(),
    };

    let value = mapping
        .value_attribute
        .and_then(|name| element.attribute(name))
        .unwrap_or(element.text_content())
        .to_string();

    let attributes = element
        .attributes()
        .iter()
        .filter(|(name, _)| {
            Some(name.as_str()) != mapping.key_attribute
                && Some(name.as_str()) != mapping.value_attribute
        })
        .cloned()
        .collect();

    Some(MetaItem {
        index,
        tag: element.tag_name().to_string(),
        key,
        value,
        value_link: element.resolved_href().map(String::from),
        attributes,
    })
}

fn select_mapping(tag: HeadTag, element: &HeadElement) -> Option<&'static ElementMapping> {
    tag.mappings().iter().find(|mapping| {
        mapping
            .key_attribute
            .is_none_or(|name| element.has_attribute(name))
    })
}
