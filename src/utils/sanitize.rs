//! Utilities for preparing record values for display.
//!
//! Values come straight from untrusted documents, so control characters are
//! removed before printing and very long values can be truncated.

use std::borrow::Cow;

use crate::config::TRUNCATION_SUFFIX;

/// Removes control characters from a value.
///
/// Control characters (0x00-0x1F and 0x7F, except newline/tab/carriage
/// return) could move the cursor or recolor the terminal when printed.
///
/// # Arguments
///
/// * `value` - The text to sanitize
///
/// # Returns
///
/// The input unchanged when it has nothing to remove, otherwise a cleaned copy.
pub fn sanitize_display_text(value: &str) -> Cow<'_, str> {
    let is_allowed = |c: char| {
        let code = c as u32;
        (code >= 0x20 && code != 0x7F) // Printable ASCII starts at 0x20 (space)
            || code == 0x09 // Tab
            || code == 0x0A // Newline
            || code == 0x0D // Carriage return
    };

    if value.chars().all(is_allowed) {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(value.chars().filter(|c| is_allowed(*c)).collect())
    }
}

/// Truncates a value to `max_chars` characters, appending an ellipsis.
pub fn truncate_chars(value: &str, max_chars: usize) -> Cow<'_, str> {
    match value.char_indices().nth(max_chars) {
        Some((byte_index, _)) => Cow::Owned(format!("{}{}", &value[..byte_index], TRUNCATION_SUFFIX)),
        None => Cow::Borrowed(value),
    }
}
