//! Built-in rule sets.
//!
//! These are static data, compiled once on first use.

use std::sync::LazyLock;

use super::types::{Pattern, Rule, RuleFamily, RuleSet};
use crate::models::Identity;

const UTF8_PATTERN_STR: &str = "(?i)utf-8";
const UTF8_PATTERN_MESSAGE: &str =
    r#"Value must be an ASCII case-insensitive match for the string "utf-8""#;

const URL_PATTERN_STR: &str = "^https?://";
const URL_PATTERN_MESSAGE: &str = "Value must be a fully qualified URL starting with a protocol";

/// Open Graph properties that must hold fully qualified URLs.
const OPEN_GRAPH_URL_KEYS: &[&str] = &[
    "og:url",
    "og:image",
    "og:image:url",
    "og:image:secure_url",
    "og:audio",
    "og:audio:url",
    "og:audio:secure_url",
    "og:video",
    "og:video:url",
    "og:video:secure_url",
];

/// Compiles a built-in pattern, panicking on failure.
///
/// Built-in patterns are constants, so a failure is a programming error.
fn compile_pattern_unsafe(expression: &str, message: &str) -> Pattern {
    Pattern::new(expression, message).unwrap_or_else(|e| {
        panic!(
            "Failed to compile built-in pattern '{}': {}. This is a programming error.",
            expression, e
        )
    })
}

static CODE_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        RuleFamily::Code,
        [
            Rule::new("base")
                .key("base")
                .before_all([Identity::tag("link"), Identity::tag("script")]),
            Rule::new("meta").key("charset").before_all(
                ["title", "meta", "base", "link", "style", "script", "noscript"]
                    .into_iter()
                    .map(Identity::tag),
            ),
            Rule::new("meta")
                .key("charset")
                .pattern(compile_pattern_unsafe(UTF8_PATTERN_STR, UTF8_PATTERN_MESSAGE)),
            Rule::new("title").key("title").required().max(255),
        ],
    )
});

static OPEN_GRAPH_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    let url_pattern = compile_pattern_unsafe(URL_PATTERN_STR, URL_PATTERN_MESSAGE);
    RuleSet::new(
        RuleFamily::OpenGraph,
        OPEN_GRAPH_URL_KEYS
            .iter()
            .map(|key| Rule::new("meta").key(key).pattern(url_pattern.clone())),
    )
});

static SEO_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        RuleFamily::Seo,
        [
            Rule::new("title").key("title").required().min(30).safe(50).max(60),
            Rule::new("meta").key("title").min(30).safe(50).max(60),
            Rule::new("meta").key("description").min(50).safe(150).max(160),
            Rule::new("meta").key("author").min(1).safe(30).max(100),
            Rule::new("meta").key("og:title").min(30).safe(50).max(60),
            Rule::new("meta").key("og:description").min(50).safe(150).max(160),
            Rule::new("meta").key("og:image").min(1).max(2000),
            Rule::new("meta").key("og:url").min(1).max(2000),
            Rule::new("meta").key("twitter:title").min(30).safe(50).max(60),
            Rule::new("meta").key("twitter:description").min(50).safe(150).max(160),
            Rule::new("meta").key("twitter:image").min(1).max(2000),
        ],
    )
});

/// Structural rules: charset first and UTF-8, base before links and scripts, title present.
pub fn code_rules() -> &'static RuleSet {
    &CODE_RULES
}

/// Open Graph rules: every URL-valued `og:*` property must be fully qualified.
pub fn open_graph_rules() -> &'static RuleSet {
    &OPEN_GRAPH_RULES
}

/// SEO length guidance for titles, descriptions, authors and their social equivalents.
pub fn seo_rules() -> &'static RuleSet {
    &SEO_RULES
}
