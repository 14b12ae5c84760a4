//! HTML head parsing and record extraction.
//!
//! This module turns a document head into the uniform record list the
//! validators work on:
//! - Walking the `<head>` children into owned element snapshots
//! - Selecting a per-tag mapping for each element
//! - Building one `MetaItem` per mapped element
//!
//! Parsing is done with the `scraper` crate; href resolution uses `url`.

mod extract;
mod html;
mod mapping;

// Re-export public API
pub use extract::{extract, extract_document};
pub use html::{head_elements, HeadElement};
pub use mapping::{ElementMapping, HeadTag, KeyNameSource};
