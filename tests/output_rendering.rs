//! Tests for rendering reports through the public output API.

use head_meta::config::{OutputFormat, SearchScope};
use head_meta::output::render;
use head_meta::{inspect_document, ItemFilter, ValidationOptions};

const DOCUMENT: &str = concat!(
    "<html><head>",
    r#"<meta charset="utf-8">"#,
    r#"<meta name="viewport" content="width=device-width">"#,
    r#"<meta property="og:url" content="/relative">"#,
    r#"<meta name="twitter:card" content="summary">"#,
    "</head></html>"
);

fn rendered(format: OutputFormat, filter: &ItemFilter) -> Vec<u8> {
    colored::control::set_override(false);
    let report = inspect_document(DOCUMENT, None, &ValidationOptions::default());
    let mut out = Vec::new();
    render(&report, filter, format, &mut out).expect("Rendering to memory should not fail");
    out
}

#[test]
fn test_plain_output_sections() {
    let output = String::from_utf8(rendered(OutputFormat::Plain, &ItemFilter::all())).unwrap();

    assert!(output.starts_with("Missing\n"));
    assert!(output.contains("[Code] title: Element is missing"));
    assert!(output.contains("[SEO] title: Element is missing"));
    assert!(output.contains("Records (4 of 4)"));
    assert!(output.contains("[2] meta og:url = /relative\n"));
    assert!(output.contains("Value must be a fully qualified URL starting with a protocol"));
    assert!(output.contains("  ✖ Code check failed: title\n"));
    assert!(output.contains("  ✖ Meta check failed: og:url\n"));
}

#[test]
fn test_plain_output_filtered_by_value() {
    let filter = ItemFilter::parse("SUMMARY", SearchScope::Values).unwrap();
    let output = String::from_utf8(rendered(OutputFormat::Plain, &filter)).unwrap();

    assert!(output.contains("Records (1 of 4)"));
    assert!(output.contains("[3] meta twitter:card = summary"));
    // Missing records have no value to match
    assert!(!output.starts_with("Missing"));
}

#[test]
fn test_json_output_is_one_document() {
    let filter = ItemFilter::parse("og:, twitter:", SearchScope::Keys).unwrap();
    let value: serde_json::Value =
        serde_json::from_slice(&rendered(OutputFormat::Json, &filter)).unwrap();

    let keys: Vec<&str> = value["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["og:url", "twitter:card"]);
    assert_eq!(value["issues"]["open_graph"][0]["index"], 2);
    assert_eq!(value["issues"]["code"][0]["message"], "Element is missing");
    assert_eq!(value["duplicates"], serde_json::json!([]));
    assert_eq!(value["summary"].as_array().unwrap().len(), 3);
}
