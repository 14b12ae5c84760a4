//! Per-tag mapping table.
//!
//! Every supported head tag has an ordered list of mappings. The extractor
//! applies the first mapping whose key attribute is absent from the
//! descriptor or present on the element.

use strum_macros::{Display, EnumIter, EnumString};

/// How a record's key is derived from its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyNameSource {
    /// Lower-cased tag name
    TagName,
    /// Element text content
    TagText,
    /// Literal name of the key attribute (the `charset` case)
    AttributeName,
    /// Value of the key attribute
    AttributeValue,
}

/// One candidate mapping for a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementMapping {
    /// Attribute identifying the record, or `None` if the tag itself does
    pub key_attribute: Option<&'static str>,
    pub key_name_source: KeyNameSource,
    /// Attribute holding the value, or `None` for the text content
    pub value_attribute: Option<&'static str>,
}

const TITLE_MAPPINGS: &[ElementMapping] = &[ElementMapping {
    key_attribute: None,
    key_name_source: KeyNameSource::TagName,
    value_attribute: None,
}];

const BASE_MAPPINGS: &[ElementMapping] = &[ElementMapping {
    key_attribute: None,
    key_name_source: KeyNameSource::TagName,
    value_attribute: Some("href"),
}];

const META_MAPPINGS: &[ElementMapping] = &[
    ElementMapping {
        key_attribute: Some("charset"),
        key_name_source: KeyNameSource::AttributeName,
        value_attribute: Some("charset"),
    },
    ElementMapping {
        key_attribute: Some("name"),
        key_name_source: KeyNameSource::AttributeValue,
        value_attribute: Some("content"),
    },
    ElementMapping {
        key_attribute: Some("property"),
        key_name_source: KeyNameSource::AttributeValue,
        value_attribute: Some("content"),
    },
    ElementMapping {
        key_attribute: Some("http-equiv"),
        key_name_source: KeyNameSource::AttributeValue,
        value_attribute: Some("content"),
    },
];

const LINK_MAPPINGS: &[ElementMapping] = &[ElementMapping {
    key_attribute: Some("rel"),
    key_name_source: KeyNameSource::AttributeValue,
    value_attribute: Some("href"),
}];

/// Head tags the extractor produces records for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HeadTag {
    Title,
    Base,
    Meta,
    Link,
}

impl HeadTag {
    /// Looks up a tag by element name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// Candidate mappings in the order they are tried.
    pub fn mappings(self) -> &'static [ElementMapping] {
        match self {
            HeadTag::Title => TITLE_MAPPINGS,
            HeadTag::Base => BASE_MAPPINGS,
            HeadTag::Meta => META_MAPPINGS,
            HeadTag::Link => LINK_MAPPINGS,
        }
    }
}
