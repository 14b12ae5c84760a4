//! CSS selector parsing utilities.

use scraper::Selector;

/// Parses a CSS selector that must succeed (for compile-time constants).
///
/// This function panics if parsing fails, which is appropriate for static selectors
/// that are compile-time constants.
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `context` - Context description for error messages
///
/// # Panics
///
/// Panics if the selector cannot be parsed (indicates a programming error).
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BASE_HREF_SELECTOR_STR, HEAD_SELECTOR_STR};

    #[test]
    fn test_builtin_selectors_parse() {
        parse_selector_unsafe(HEAD_SELECTOR_STR, "head");
        parse_selector_unsafe(BASE_HREF_SELECTOR_STR, "base");
    }

    #[test]
    #[should_panic(expected = "programming error")]
    fn test_invalid_selector_panics() {
        parse_selector_unsafe("[[[", "test");
    }
}
