//! Top-level notification summary.

use serde::Serialize;

use super::Report;
use crate::models::Severity;
use crate::validate::Issue;

const MSG_CODE_FAILED: &str = "Code check failed";
const MSG_DUPLICATES_FOUND: &str = "Duplicates found";
const MSG_META_FAILED: &str = "Meta check failed";
const MSG_SEO_FAILED: &str = "SEO check failed";

/// One failed check and the keys it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryEntry {
    /// Worst severity among the check's findings
    pub severity: Severity,
    pub message: String,
    /// Distinct affected keys in first-seen order
    pub keys: Vec<String>,
}

pub(super) fn summarize(report: &Report) -> Vec<SummaryEntry> {
    let mut entries = Vec::new();

    entries.extend(issue_entry(MSG_CODE_FAILED, &report.code));
    if !report.duplicates.is_empty() {
        entries.push(SummaryEntry {
            severity: Severity::Warning,
            message: MSG_DUPLICATES_FOUND.to_string(),
            keys: distinct(report.duplicates.iter().map(|item| item.key.as_str())),
        });
    }
    entries.extend(issue_entry(MSG_META_FAILED, &report.open_graph));
    entries.extend(issue_entry(MSG_SEO_FAILED, &report.seo));

    entries
}

fn issue_entry(message: &str, issues: &[Issue]) -> Option<SummaryEntry> {
    let severity = issues.iter().map(|issue| issue.severity).max()?;
    Some(SummaryEntry {
        severity,
        message: message.to_string(),
        keys: distinct(issues.iter().map(affected_key)),
    })
}

/// The record's key, or for a missing record the rule's key (falling back to its tag).
fn affected_key(issue: &Issue) -> &str {
    match &issue.meta {
        Some(meta) => &meta.key,
        None => issue.rule.key.as_deref().unwrap_or(&issue.rule.tag),
    }
}

fn distinct<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for key in keys {
        if !seen.iter().any(|k| k == key) {
            seen.push(key.to_string());
        }
    }
    seen
}
