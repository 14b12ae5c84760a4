//! Normalized head element records and the identities used to match them.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use strum_macros::{Display, EnumString};

/// One normalized head element.
///
/// Records are produced fresh by every extraction pass and never mutated.
/// `(tag, key)` is the identity used for rule matching and duplicate
/// detection; it is not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaItem {
    /// Position among the head's element children (not renumbered after skips)
    pub index: usize,
    /// Lower-cased tag name
    pub tag: String,
    /// Identifying key (see `KeyNameSource`)
    pub key: String,
    /// Primary value
    pub value: String,
    /// Resolved absolute URL when the element carries an `href`
    pub value_link: Option<String>,
    /// Remaining attributes in declaration order
    #[serde(serialize_with = "serialize_attributes")]
    pub attributes: Vec<(String, String)>,
}

impl MetaItem {
    /// Returns the identity of this record.
    pub fn identity(&self) -> Identity {
        Identity::with_key(&self.tag, &self.key)
    }

    /// Looks up a residual attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

fn serialize_attributes<S: Serializer>(
    attributes: &[(String, String)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(attributes.len()))?;
    for (name, value) in attributes {
        map.serialize_entry(name, value)?;
    }
    map.end()
}

/// A `(tag, key)` reference to records.
///
/// An identity without a key matches every record carrying the tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identity {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Identity {
    /// Identity matching every record with the given tag.
    pub fn tag(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            key: None,
        }
    }

    /// Identity matching records with the given tag and key.
    pub fn with_key(tag: &str, key: &str) -> Self {
        Self {
            tag: tag.to_string(),
            key: Some(key.to_string()),
        }
    }

    /// Returns `true` if the record carries this identity.
    pub fn matches(&self, item: &MetaItem) -> bool {
        self.tag == item.tag && self.key.as_ref().is_none_or(|key| *key == item.key)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(key) if *key != self.tag => write!(f, "{}:{}", self.tag, key),
            _ => f.write_str(&self.tag),
        }
    }
}

/// Severity of a validation finding.
///
/// Ordered so that `Warning < Error`; the worst severity of a set is its max.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(tag: &str, key: &str) -> MetaItem {
        MetaItem {
            index: 0,
            tag: tag.to_string(),
            key: key.to_string(),
            value: String::new(),
            value_link: None,
            attributes: Vec::new(),
        }
    }

    #[test]
    fn test_identity_display() {
        assert_eq!(Identity::tag("link").to_string(), "link");
        assert_eq!(Identity::with_key("title", "title").to_string(), "title");
        assert_eq!(
            Identity::with_key("meta", "charset").to_string(),
            "meta:charset"
        );
        assert_eq!(
            Identity::with_key("meta", "block:start").to_string(),
            "meta:block:start"
        );
    }

    #[test]
    fn test_identity_without_key_matches_whole_tag() {
        let ident = Identity::tag("meta");
        assert!(ident.matches(&item("meta", "charset")));
        assert!(ident.matches(&item("meta", "description")));
        assert!(!ident.matches(&item("link", "icon")));
    }

    #[test]
    fn test_identity_with_key_is_exact() {
        let ident = Identity::with_key("meta", "charset");
        assert!(ident.matches(&item("meta", "charset")));
        assert!(!ident.matches(&item("meta", "Charset")));
        assert!(!ident.matches(&item("title", "charset")));
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Warning < Severity::Error);
        assert_eq!(
            [Severity::Warning, Severity::Error, Severity::Warning]
                .into_iter()
                .max(),
            Some(Severity::Error)
        );
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!("warning".parse::<Severity>().ok(), Some(Severity::Warning));
    }

    #[test]
    fn test_meta_item_serializes_attributes_in_order() {
        let mut meta = item("link", "icon");
        meta.attributes = vec![
            ("type".to_string(), "image/png".to_string()),
            ("sizes".to_string(), "32x32".to_string()),
        ];
        let json = serde_json::to_string(&meta).unwrap();
        assert!(json.contains(r#""attributes":{"type":"image/png","sizes":"32x32"}"#));
        assert!(json.contains(r#""value_link":null"#));
    }
}
