//! Record filtering for display.
//!
//! A filter is a comma-separated list of literal terms matched
//! case-insensitively against record keys, values, or both.

use std::borrow::Cow;

use regex::{Regex, RegexBuilder};

use crate::config::{SearchScope, MAX_UNMATCHED_VALUE_LENGTH};
use crate::models::MetaItem;
use crate::utils::truncate_chars;

/// Selects which records to display.
#[derive(Debug, Clone)]
pub struct ItemFilter {
    pattern: Option<Regex>,
    scope: SearchScope,
}

impl Default for ItemFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl ItemFilter {
    /// A filter that matches every record.
    pub fn all() -> Self {
        Self {
            pattern: None,
            scope: SearchScope::Both,
        }
    }

    /// Builds a filter from comma-separated terms.
    ///
    /// Terms are matched literally. Blank input (or only commas) matches everything.
    ///
    /// # Errors
    ///
    /// Returns the `regex` error if the combined expression exceeds the regex size limit.
    pub fn parse(input: &str, scope: SearchScope) -> Result<Self, regex::Error> {
        let terms: Vec<String> = input
            .split(',')
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(regex::escape)
            .collect();

        if terms.is_empty() {
            return Ok(Self {
                pattern: None,
                scope,
            });
        }

        let pattern = RegexBuilder::new(&terms.join("|"))
            .case_insensitive(true)
            .build()?;
        log::debug!("Filtering records by /{}/i", pattern.as_str());
        Ok(Self {
            pattern: Some(pattern),
            scope,
        })
    }

    pub fn is_active(&self) -> bool {
        self.pattern.is_some()
    }

    /// Returns `true` if the key is searched and matches.
    pub fn matches_key(&self, key: &str) -> bool {
        self.scope.keys() && self.pattern.as_ref().is_some_and(|rx| rx.is_match(key))
    }

    /// Returns `true` if the value is searched and matches.
    pub fn matches_value(&self, value: &str) -> bool {
        self.scope.values() && self.pattern.as_ref().is_some_and(|rx| rx.is_match(value))
    }

    /// Returns `true` if the record should be displayed.
    pub fn matches(&self, item: &MetaItem) -> bool {
        !self.is_active() || self.matches_key(&item.key) || self.matches_value(&item.value)
    }

    /// The value as displayed: values matched by the filter are kept whole,
    /// others are truncated to `MAX_UNMATCHED_VALUE_LENGTH` characters.
    pub fn display_value<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.matches_value(value) {
            Cow::Borrowed(value)
        } else {
            truncate_chars(value, MAX_UNMATCHED_VALUE_LENGTH)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(key: &str, value: &str) -> MetaItem {
        MetaItem {
            index: 0,
            tag: "meta".to_string(),
            key: key.to_string(),
            value: value.to_string(),
            value_link: None,
            attributes: Vec::new(),
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        for input in ["", "   ", " , ,"] {
            let filter = ItemFilter::parse(input, SearchScope::Both).unwrap();
            assert!(!filter.is_active());
            assert!(filter.matches(&item("anything", "at all")));
        }
    }

    #[test]
    fn test_comma_separated_terms_are_alternatives() {
        let filter = ItemFilter::parse("og:, Twitter", SearchScope::Keys).unwrap();
        assert!(filter.matches(&item("og:title", "x")));
        assert!(filter.matches(&item("twitter:card", "x")));
        assert!(!filter.matches(&item("description", "og: in value")));
    }

    #[test]
    fn test_terms_are_literal() {
        let filter = ItemFilter::parse("a.c", SearchScope::Both).unwrap();
        assert!(filter.matches(&item("a.c", "")));
        assert!(!filter.matches(&item("abc", "")));
    }

    #[test]
    fn test_value_scope() {
        let filter = ItemFilter::parse("example", SearchScope::Values).unwrap();
        assert!(filter.matches(&item("og:url", "https://EXAMPLE.com")));
        assert!(!filter.matches(&item("example", "nothing")));
    }

    #[test]
    fn test_display_value_truncates_unmatched() {
        let long = "x".repeat(MAX_UNMATCHED_VALUE_LENGTH + 10);
        let filter = ItemFilter::all();
        let shown = filter.display_value(&long);
        assert_eq!(shown.chars().count(), MAX_UNMATCHED_VALUE_LENGTH + 1);
        assert!(shown.ends_with('…'));

        let matching = ItemFilter::parse("xxx", SearchScope::Values).unwrap();
        assert_eq!(matching.display_value(&long), long);
    }
}
