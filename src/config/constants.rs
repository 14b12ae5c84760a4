//! Configuration constants.
//!
//! This module defines the fixed values used throughout the application:
//! selectors, duplicate detection exemptions and display limits.

// CSS selector strings
/// Selector for the document head
pub const HEAD_SELECTOR_STR: &str = "head";
/// Selector for the `<base>` element that sets the document base URL
pub const BASE_HREF_SELECTOR_STR: &str = "base[href]";

// Duplicate detection
/// Tags whose records must not repeat an identity
/// `link`, `style` and `script` legitimately repeat and are exempt
pub const DUPLICATE_CHECKED_TAGS: &[&str] = &["meta", "base", "title"];
/// Meta keys known to repeat legitimately (pinned site task lists)
pub const IGNORED_DUPLICATE_KEYS: &[&str] = &["msapplication-task", "msapplication-task-separator"];

// Display limits
/// Maximum value length to display if the value is not matched by a filter
pub const MAX_UNMATCHED_VALUE_LENGTH: usize = 900;
/// Suffix appended to truncated values
pub const TRUNCATION_SUFFIX: &str = "…";
