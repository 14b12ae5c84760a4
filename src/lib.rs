//! head_meta library: HTML head metadata extraction and validation
//!
//! This library turns the `<head>` of an HTML document into a uniform list of
//! records (`MetaItem`), checks them against the built-in Code, Open Graph
//! and SEO rule sets, detects duplicates, and aggregates the findings into a
//! `Report` ready for display.
//!
//! # Example
//!
//! ```
//! use head_meta::{inspect_document, Severity, ValidationOptions};
//!
//! let html = r#"<html><head><meta property="og:url" content="/about"></head></html>"#;
//! let report = inspect_document(html, None, &ValidationOptions::default());
//!
//! assert_eq!(report.items.len(), 1);
//! assert_eq!(report.open_graph[0].severity, Severity::Error);
//! // No <title>: reported by the code checks as missing
//! assert_eq!(report.missing()[0].message, "Element is missing");
//! ```

pub mod config;
mod error_handling;
pub mod filter;
pub mod initialization;
pub mod models;
pub mod output;
pub mod parse;
pub mod report;
pub mod rules;
mod utils;
pub mod validate;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use url::Url;

// Re-export public API
pub use config::{
    Config, FailOn, LogFormat, LogLevel, OutputFormat, SearchScope, ValidationOptions,
};
pub use error_handling::{InitializationError, InputError};
pub use filter::ItemFilter;
pub use models::{Identity, MetaItem, Severity};
pub use parse::{extract, extract_document};
pub use report::{RecordIssue, Report, SummaryEntry};
pub use validate::{find_duplicates, validate, Issue};

const STDIN_SOURCE_NAME: &str = "<stdin>";

/// Extracts and validates the head of one HTML document.
///
/// # Arguments
///
/// * `html` - The document source
/// * `document_url` - URL the document was loaded from, for resolving relative hrefs
/// * `options` - Rule families to evaluate
pub fn inspect_document(
    html: &str,
    document_url: Option<&Url>,
    options: &ValidationOptions,
) -> Report {
    Report::build(extract_document(html, document_url), options)
}

/// Reads a document from `path`, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns `InputError::ReadError` if the source cannot be read or is not valid UTF-8.
pub fn read_input(path: &Path) -> Result<String, InputError> {
    if path == Path::new("-") {
        let mut html = String::new();
        io::stdin()
            .read_to_string(&mut html)
            .map_err(|e| InputError::read(STDIN_SOURCE_NAME, e))?;
        Ok(html)
    } else {
        fs::read_to_string(path).map_err(|e| InputError::read(path.display().to_string(), e))
    }
}

/// Reads the document named by `config` and inspects it.
///
/// # Errors
///
/// Returns an error if the input cannot be read. Rule violations are part of
/// the returned report, not errors.
pub fn inspect(config: &Config) -> anyhow::Result<Report> {
    let html = read_input(&config.file)?;
    log::info!(
        "Inspecting {} ({} bytes)",
        config.file.display(),
        html.len()
    );
    Ok(inspect_document(
        &html,
        config.url.as_ref(),
        &config.validation_options(),
    ))
}
