//! Tests for command-line parsing into `Config`.

use clap::Parser;
use head_meta::config::{FailOn, LogFormat, LogLevel, OutputFormat, SearchScope};
use head_meta::{Config, ValidationOptions};
use std::path::PathBuf;

#[test]
fn test_cli_defaults() {
    let config = Config::try_parse_from(["head_meta", "index.html"]).expect("Should parse file");

    assert_eq!(config.file, PathBuf::from("index.html"));
    assert!(config.url.is_none());
    assert!(config.filter.is_none());
    assert_eq!(config.search, SearchScope::Both);
    assert_eq!(config.format, OutputFormat::Plain);
    assert_eq!(config.fail_on, FailOn::Never);
    // LogLevel and LogFormat don't implement PartialEq, so we compare via conversion
    assert_eq!(
        log::LevelFilter::from(config.log_level.clone()),
        log::LevelFilter::Warn
    );
    match config.log_format {
        LogFormat::Plain => {}
        _ => panic!("Should be Plain format"),
    }
    assert_eq!(config.validation_options(), ValidationOptions::default());
}

#[test]
fn test_cli_stdin_input() {
    let config = Config::try_parse_from(["head_meta", "-"]).expect("Should parse stdin marker");
    assert_eq!(config.file.as_os_str(), "-");
}

#[test]
fn test_cli_with_options() {
    let args = vec![
        "head_meta",
        "page.html",
        "--url",
        "https://example.com/blog/post",
        "--no-seo",
        "--filter",
        "og:,twitter:",
        "--search",
        "keys",
        "--format",
        "json",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--fail-on",
        "warning",
    ];
    let config = Config::try_parse_from(args).expect("Should parse all options");

    assert_eq!(
        config.url.as_ref().map(|url| url.as_str()),
        Some("https://example.com/blog/post")
    );
    assert_eq!(config.filter.as_deref(), Some("og:,twitter:"));
    assert_eq!(config.search, SearchScope::Keys);
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.fail_on, FailOn::Warning);
    assert_eq!(
        log::LevelFilter::from(config.log_level.clone()),
        log::LevelFilter::from(LogLevel::Debug)
    );
    match config.log_format {
        LogFormat::Json => {}
        _ => panic!("Should be Json format"),
    }
    assert_eq!(
        config.validation_options(),
        ValidationOptions {
            code: true,
            open_graph: true,
            seo: false,
        }
    );
}

#[test]
fn test_cli_disables_every_family() {
    let config = Config::try_parse_from([
        "head_meta",
        "page.html",
        "--no-code",
        "--no-open-graph",
        "--no-seo",
    ])
    .expect("Should parse family switches");
    let options = config.validation_options();
    assert!(!options.code && !options.open_graph && !options.seo);
}

#[test]
fn test_cli_requires_file() {
    assert!(Config::try_parse_from(["head_meta"]).is_err());
}

#[test]
fn test_cli_rejects_relative_url() {
    let result = Config::try_parse_from(["head_meta", "page.html", "--url", "/relative"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_rejects_unknown_values() {
    for args in [
        ["head_meta", "page.html", "--format", "xml"],
        ["head_meta", "page.html", "--fail-on", "sometimes"],
        ["head_meta", "page.html", "--search", "attributes"],
    ] {
        assert!(Config::try_parse_from(args).is_err(), "{:?}", args);
    }
}
