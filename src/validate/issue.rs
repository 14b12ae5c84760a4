//! Validation findings.

use std::sync::Arc;

use serde::Serialize;

use crate::models::{MetaItem, Severity};
use crate::rules::{Rule, RuleFamily};

pub(crate) const MSG_VALUE_EMPTY: &str = "Value is empty";
pub(crate) const MSG_ELEMENT_MISSING: &str = "Element is missing";

/// One validation finding.
///
/// `meta` is `None` when the issue reports a required record that is absent.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub severity: Severity,
    pub message: String,
    /// Family of the rule set that produced the issue
    pub family: RuleFamily,
    pub rule: Arc<Rule>,
    pub meta: Option<MetaItem>,
}

impl Issue {
    pub(crate) fn new(
        severity: Severity,
        message: impl Into<String>,
        family: RuleFamily,
        rule: &Arc<Rule>,
        meta: Option<&MetaItem>,
    ) -> Self {
        Self {
            severity,
            message: message.into(),
            family,
            rule: Arc::clone(rule),
            meta: meta.cloned(),
        }
    }

    /// Returns `true` if this issue reports a missing required record.
    pub fn is_missing(&self) -> bool {
        self.meta.is_none()
    }

    /// Signed distance between the record's trimmed length and the violated SEO bound.
    ///
    /// Negative below `min`, positive above `safe` or `max`. `None` for other
    /// families, missing records and values within bounds.
    pub fn length_delta(&self) -> Option<i64> {
        if self.family != RuleFamily::Seo {
            return None;
        }
        let len = self.meta.as_ref()?.value.trim().chars().count() as i64;
        let bound = |b: Option<usize>| b.map(|b| b as i64);

        if let Some(max) = bound(self.rule.max).filter(|max| len > *max) {
            Some(len - max)
        } else if let Some(safe) = bound(self.rule.safe).filter(|safe| len > *safe) {
            Some(len - safe)
        } else {
            bound(self.rule.min)
                .filter(|min| len > 0 && len < *min)
                .map(|min| len - min)
        }
    }
}

// Rules are compared by identity: issues from the same rule set share the `Arc`.
impl PartialEq for Issue {
    fn eq(&self, other: &Self) -> bool {
        self.severity == other.severity
            && self.message == other.message
            && self.family == other.family
            && Arc::ptr_eq(&self.rule, &other.rule)
            && self.meta == other.meta
    }
}

impl Eq for Issue {}
