//! End-to-end inspection of HTML documents through the public API.

use head_meta::{
    extract_document, inspect, inspect_document, read_input, Config, FailOn, InputError, Severity,
    ValidationOptions,
};
use std::path::PathBuf;
use tempfile::TempDir;
use url::Url;

const WELL_FORMED: &str = r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8">
  <title>Release notes for the spring edition of the app</title>
  <meta name="description" content="Everything that changed in the spring edition, from the new editor to faster sync.">
  <meta property="og:url" content="https://example.com/notes">
  <meta property="og:image" content="https://example.com/cover.png">
  <link rel="canonical" href="/notes">
  <link rel="icon" sizes="32x32" href="/favicon.ico">
</head>
<body><p>Hello</p></body>
</html>"#;

fn only(code: bool, open_graph: bool, seo: bool) -> ValidationOptions {
    ValidationOptions {
        code,
        open_graph,
        seo,
    }
}

#[test]
fn test_well_formed_document_has_no_issues() {
    let url = Url::parse("https://example.com/notes").unwrap();
    let report = inspect_document(WELL_FORMED, Some(&url), &ValidationOptions::default());

    assert_eq!(report.items.len(), 7);
    assert_eq!(report.issue_count(), 0, "{:#?}", report.summary());
    assert_eq!(report.worst_severity(), None);
    assert!(report.summary().is_empty());

    let icon = &report.items[6];
    assert_eq!(icon.tag, "link");
    assert_eq!(icon.key, "icon");
    assert_eq!(icon.value, "/favicon.ico");
    assert_eq!(
        icon.value_link.as_deref(),
        Some("https://example.com/favicon.ico")
    );
    assert_eq!(icon.attribute("sizes"), Some("32x32"));
    assert_eq!(icon.attribute("rel"), None);
}

#[test]
fn test_base_element_record() {
    let url = Url::parse("https://example.com/a/b.html").unwrap();
    let items = extract_document(
        r#"<html><head><base href="/x/"></head></html>"#,
        Some(&url),
    );

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].tag, "base");
    assert_eq!(items[0].key, "base");
    assert_eq!(items[0].value, "/x/");
    assert_eq!(
        items[0].value_link.as_deref(),
        Some("https://example.com/x/")
    );
}

#[test]
fn test_relative_base_element_record() {
    let url = Url::parse("https://example.com/a/b.html").unwrap();
    let items = extract_document(
        r#"<html><head><base href="x/"><link rel="icon" href="f.ico"></head></html>"#,
        Some(&url),
    );

    assert_eq!(items.len(), 2);
    assert_eq!(
        items[0].value_link.as_deref(),
        Some("https://example.com/a/x/")
    );
    assert_eq!(
        items[1].value_link.as_deref(),
        Some("https://example.com/a/x/f.ico")
    );
}

#[test]
fn test_charset_after_title_is_an_ordering_error() {
    let report = inspect_document(
        r#"<html><head><title>Home</title><meta charset="utf-8"></head></html>"#,
        None,
        &only(true, false, false),
    );

    assert_eq!(report.code.len(), 1);
    let issue = &report.code[0];
    assert_eq!(issue.severity, Severity::Error);
    assert_eq!(issue.message, "Element must not occur after title");
    assert_eq!(issue.meta.as_ref().map(|meta| meta.key.as_str()), Some("charset"));
}

#[test]
fn test_charset_must_be_utf8() {
    let report = inspect_document(
        r#"<html><head><meta charset="latin1"><title>Home</title></head></html>"#,
        None,
        &only(true, false, false),
    );

    assert_eq!(report.code.len(), 1);
    assert!(report.code[0].message.contains("utf-8"));
    assert!(FailOn::Error.should_fail(report.worst_severity()));
}

#[test]
fn test_relative_open_graph_urls_are_errors() {
    let report = inspect_document(
        concat!(
            "<html><head><title>Home</title>",
            r#"<meta property="og:url" content="/home">"#,
            r#"<meta property="og:image" content="//cdn.example.com/i.png">"#,
            r#"<meta property="og:title" content="/not-a-url-field">"#,
            "</head></html>"
        ),
        None,
        &only(false, true, false),
    );

    let keys: Vec<&str> = report
        .open_graph
        .iter()
        .filter_map(|issue| issue.meta.as_ref())
        .map(|meta| meta.key.as_str())
        .collect();
    assert_eq!(keys, vec!["og:url", "og:image"]);
    assert!(report
        .open_graph
        .iter()
        .all(|issue| issue.severity == Severity::Error));
}

#[test]
fn test_duplicate_titles() {
    let report = inspect_document(
        r#"<html><head><meta charset="utf-8"><title>A</title><title>B</title></head></html>"#,
        None,
        &only(true, false, false),
    );

    let indexes: Vec<usize> = report.duplicates.iter().map(|item| item.index).collect();
    assert_eq!(indexes, vec![1, 2]);
    assert_eq!(report.worst_severity(), Some(Severity::Warning));
    assert!(FailOn::Warning.should_fail(report.worst_severity()));
    assert!(!FailOn::Error.should_fail(report.worst_severity()));
}

#[test]
fn test_inspection_is_deterministic() {
    let url = Url::parse("https://example.com/").unwrap();
    let options = ValidationOptions::default();
    let html = r#"<html><head><title>x</title><meta name="description" content=" "><meta charset="x"></head></html>"#;

    let first = inspect_document(html, Some(&url), &options);
    let second = inspect_document(html, Some(&url), &options);
    assert_eq!(first.items, second.items);
    assert_eq!(first.record_issues(), second.record_issues());
    assert_eq!(first.summary(), second.summary());
}

#[test]
fn test_inspect_reads_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input_file = temp_dir.path().join("index.html");
    std::fs::write(&input_file, WELL_FORMED).expect("Failed to write test file");

    let config = Config {
        file: input_file,
        url: Some(Url::parse("https://example.com/notes").unwrap()),
        no_seo: true,
        ..Default::default()
    };
    let report = inspect(&config).expect("Should inspect file");
    assert_eq!(report.items.len(), 7);
    assert!(report.seo.is_empty());
    assert_eq!(
        report.items[5].value_link.as_deref(),
        Some("https://example.com/notes")
    );
}

#[test]
fn test_missing_file_is_an_input_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("absent.html");

    let err = read_input(&missing).unwrap_err();
    match &err {
        InputError::ReadError { source, .. } => {
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
        }
    }
    assert!(err.to_string().contains("absent.html"));

    let config = Config {
        file: PathBuf::from(&missing),
        ..Default::default()
    };
    assert!(inspect(&config).is_err());
}
