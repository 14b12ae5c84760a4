//! Utility functions.
//!
//! This module provides:
//! - CSS selector parsing utilities
//! - Display text sanitization and truncation

pub mod sanitize;
mod selector;

pub use sanitize::{sanitize_display_text, truncate_chars};
pub use selector::parse_selector_unsafe;
