//! Machine-readable report rendering.

use std::io::{self, Write};

use serde::Serialize;

use crate::filter::ItemFilter;
use crate::models::{Identity, MetaItem, Severity};
use crate::report::{Report, SummaryEntry};
use crate::validate::Issue;

#[derive(Serialize)]
struct JsonReport<'a> {
    items: Vec<&'a MetaItem>,
    issues: JsonIssues<'a>,
    /// Indexes of duplicate records
    duplicates: Vec<usize>,
    summary: Vec<SummaryEntry>,
}

#[derive(Serialize)]
struct JsonIssues<'a> {
    code: Vec<JsonIssue<'a>>,
    open_graph: Vec<JsonIssue<'a>>,
    seo: Vec<JsonIssue<'a>>,
}

#[derive(Serialize)]
struct JsonIssue<'a> {
    severity: Severity,
    message: &'a str,
    rule: Identity,
    /// Record index; absent for missing records
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    length_delta: Option<i64>,
}

impl<'a> From<&'a Issue> for JsonIssue<'a> {
    fn from(issue: &'a Issue) -> Self {
        Self {
            severity: issue.severity,
            message: &issue.message,
            rule: issue.rule.identity(),
            index: issue.meta.as_ref().map(|meta| meta.index),
            length_delta: issue.length_delta(),
        }
    }
}

fn issue_views(issues: &[Issue]) -> Vec<JsonIssue<'_>> {
    issues.iter().map(JsonIssue::from).collect()
}

/// Writes the report as a pretty-printed JSON document.
///
/// `filter` narrows `items` only; issue lists and the summary stay complete.
pub fn render_json<W: Write>(report: &Report, filter: &ItemFilter, out: &mut W) -> io::Result<()> {
    let document = JsonReport {
        items: report.items.iter().filter(|item| filter.matches(item)).collect(),
        issues: JsonIssues {
            code: issue_views(&report.code),
            open_graph: issue_views(&report.open_graph),
            seo: issue_views(&report.seo),
        },
        duplicates: report.duplicates.iter().map(|item| item.index).collect(),
        summary: report.summary(),
    };
    serde_json::to_writer_pretty(&mut *out, &document)?;
    writeln!(out)
}
