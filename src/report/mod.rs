//! Issue aggregation.
//!
//! Combines the Code, Open Graph and SEO issue lists and the duplicate list
//! into the views a presentation layer needs:
//! - worst severity per record (for highlighting)
//! - every issue keyed by record index (for per-record details)
//! - missing required records
//! - one summary entry per failed check
//!
//! Every issue produced by a validator appears in exactly one of the
//! per-record or missing views, and contributes its key to the summary.

mod summary;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::ValidationOptions;
use crate::models::{MetaItem, Severity};
use crate::rules::{code_rules, open_graph_rules, seo_rules, RuleFamily};
use crate::validate::{find_duplicates, validate, Issue};

pub use summary::SummaryEntry;

pub(crate) const MSG_DUPLICATE: &str = "Element is duplicate";

/// One issue as shown next to its record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordIssue {
    pub family: RuleFamily,
    pub severity: Severity,
    pub message: String,
    /// SEO only: signed distance to the violated length bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_delta: Option<i64>,
}

impl From<&Issue> for RecordIssue {
    fn from(issue: &Issue) -> Self {
        Self {
            family: issue.family,
            severity: issue.severity,
            message: issue.message.clone(),
            length_delta: issue.length_delta(),
        }
    }
}

/// Records of one document head and every finding about them.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub items: Vec<MetaItem>,
    pub code: Vec<Issue>,
    pub open_graph: Vec<Issue>,
    pub seo: Vec<Issue>,
    /// Records sharing an identity; detected with the code checks
    pub duplicates: Vec<MetaItem>,
}

impl Report {
    /// Validates `items` with the built-in rule sets enabled in `options`.
    pub fn build(items: Vec<MetaItem>, options: &ValidationOptions) -> Self {
        let (code, duplicates) = if options.code {
            let duplicates: Vec<MetaItem> = find_duplicates(&items).into_iter().cloned().collect();
            (validate(&items, code_rules()), duplicates)
        } else {
            (Vec::new(), Vec::new())
        };
        let open_graph = if options.open_graph {
            validate(&items, open_graph_rules())
        } else {
            Vec::new()
        };
        let seo = if options.seo {
            validate(&items, seo_rules())
        } else {
            Vec::new()
        };

        let report = Self {
            items,
            code,
            open_graph,
            seo,
            duplicates,
        };
        log::debug!(
            "Report: {} records, {} code, {} open graph, {} seo issues, {} duplicates",
            report.items.len(),
            report.code.len(),
            report.open_graph.len(),
            report.seo.len(),
            report.duplicates.len()
        );
        report
    }

    /// All issues in family order: Code, OpenGraph, SEO.
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.code.iter().chain(&self.open_graph).chain(&self.seo)
    }

    pub fn is_duplicate(&self, item: &MetaItem) -> bool {
        self.duplicates.contains(item)
    }

    /// Worst severity of the findings about `item` (duplicates count as warnings).
    pub fn record_severity(&self, item: &MetaItem) -> Option<Severity> {
        let duplicate = self.is_duplicate(item).then_some(Severity::Warning);
        self.issues()
            .filter(|issue| issue.meta.as_ref() == Some(item))
            .map(|issue| issue.severity)
            .chain(duplicate)
            .max()
    }

    /// Worst severity per record index, for records with findings.
    pub fn severities(&self) -> BTreeMap<usize, Severity> {
        let mut severities = BTreeMap::new();
        let mut raise = |index: usize, severity: Severity| {
            severities
                .entry(index)
                .and_modify(|current: &mut Severity| *current = (*current).max(severity))
                .or_insert(severity);
        };
        for issue in self.issues() {
            if let Some(meta) = &issue.meta {
                raise(meta.index, issue.severity);
            }
        }
        for item in &self.duplicates {
            raise(item.index, Severity::Warning);
        }
        severities
    }

    /// Every finding keyed by record index.
    ///
    /// Within a record the order is Code, duplicate, OpenGraph, SEO, each in
    /// validator order.
    pub fn record_issues(&self) -> BTreeMap<usize, Vec<RecordIssue>> {
        let mut by_record: BTreeMap<usize, Vec<RecordIssue>> = BTreeMap::new();

        push_issues(&self.code, &mut by_record);
        for item in &self.duplicates {
            by_record.entry(item.index).or_default().push(RecordIssue {
                family: RuleFamily::Code,
                severity: Severity::Warning,
                message: MSG_DUPLICATE.to_string(),
                length_delta: None,
            });
        }
        push_issues(&self.open_graph, &mut by_record);
        push_issues(&self.seo, &mut by_record);
        by_record
    }

    /// Issues reporting required records that are absent.
    pub fn missing(&self) -> Vec<&Issue> {
        self.issues().filter(|issue| issue.is_missing()).collect()
    }

    /// One entry per failed check.
    pub fn summary(&self) -> Vec<SummaryEntry> {
        summary::summarize(self)
    }

    /// Worst severity across all findings.
    pub fn worst_severity(&self) -> Option<Severity> {
        let duplicate = (!self.duplicates.is_empty()).then_some(Severity::Warning);
        self.issues().map(|issue| issue.severity).chain(duplicate).max()
    }

    /// Total number of findings, duplicates included.
    pub fn issue_count(&self) -> usize {
        self.code.len() + self.open_graph.len() + self.seo.len() + self.duplicates.len()
    }
}

fn push_issues(issues: &[Issue], by_record: &mut BTreeMap<usize, Vec<RecordIssue>>) {
    for issue in issues {
        if let Some(meta) = &issue.meta {
            by_record
                .entry(meta.index)
                .or_default()
                .push(RecordIssue::from(issue));
        }
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
