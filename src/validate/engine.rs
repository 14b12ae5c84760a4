//! Rule evaluation.

use std::sync::Arc;

use super::issue::{Issue, MSG_ELEMENT_MISSING, MSG_VALUE_EMPTY};
use crate::models::{Identity, MetaItem, Severity};
use crate::rules::{Rule, RuleFamily, RuleSet, TestOutcome};

/// Validates records against one rule set.
///
/// Issues are ordered by the record that triggered them (outer loop over
/// records, inner loop over rules in declaration order). Missing-required
/// issues follow all per-record issues, in rule declaration order.
///
/// # Arguments
///
/// * `items` - Extracted records in document order
/// * `rules` - Rule set to evaluate; its family selects the length semantics
///
/// # Returns
///
/// All findings. An empty list means the records satisfy every rule.
pub fn validate(items: &[MetaItem], rules: &RuleSet) -> Vec<Issue> {
    let family = rules.family();
    let mut issues = Vec::new();

    for (position, item) in items.iter().enumerate() {
        for rule in rules.rules().iter().filter(|rule| rule.applies_to(item)) {
            let mut push = |severity: Severity, message: String| {
                issues.push(Issue::new(severity, message, family, rule, Some(item)));
            };

            if let Some((severity, message)) = check_length(rule, &item.value, family) {
                push(severity, message);
            }

            if let Some(pattern) = &rule.pattern {
                if !pattern.is_match(&item.value) {
                    push(Severity::Error, pattern.message.clone());
                }
            }

            for message in check_order(rule, items, position) {
                push(Severity::Error, message);
            }

            if let Some(test) = &rule.test {
                if let TestOutcome::Fail { severity, message } =
                    test.evaluate(item, items, position)
                {
                    push(severity, message);
                }
            }
        }
    }

    issues.extend(missing_required(items, rules.rules(), family));

    log::debug!(
        "{} validation: {} issues for {} records",
        family,
        issues.len(),
        items.len()
    );
    issues
}

/// Length check on the trimmed value. At most one finding per record and rule.
fn check_length(rule: &Rule, value: &str, family: RuleFamily) -> Option<(Severity, String)> {
    let len = value.trim().chars().count();
    if len == 0 {
        return Some((Severity::Error, MSG_VALUE_EMPTY.to_string()));
    }

    let exceeded = |bound: Option<usize>| bound.filter(|bound| len > *bound);
    let not_reached = |bound: Option<usize>| bound.filter(|bound| len < *bound);

    match family {
        RuleFamily::Seo => {
            if let Some(max) = exceeded(rule.max) {
                Some((
                    Severity::Error,
                    format!("{len} / {max} - maximum length exceeded"),
                ))
            } else if let Some(safe) = exceeded(rule.safe) {
                Some((
                    Severity::Warning,
                    format!("{len} / {safe} - recommended length exceeded"),
                ))
            } else {
                not_reached(rule.min).map(|min| {
                    (
                        Severity::Warning,
                        format!("{len} / {min} - recommended length not reached"),
                    )
                })
            }
        }
        RuleFamily::Code | RuleFamily::OpenGraph => {
            if let Some(max) = exceeded(rule.max) {
                Some((
                    Severity::Error,
                    format!("{len} / {max} - maximum length exceeded"),
                ))
            } else {
                not_reached(rule.min).map(|min| {
                    (
                        Severity::Error,
                        format!("{len} / {min} - minimum length not reached"),
                    )
                })
            }
        }
    }
}

/// Positional constraints relative to `items[position]`.
fn check_order(rule: &Rule, items: &[MetaItem], position: usize) -> Vec<String> {
    let mut messages = Vec::new();

    if !rule.precedes_any.is_empty() {
        let next = items.get(position + 1);
        if !next.is_some_and(|next| matches_any(&rule.precedes_any, next)) {
            messages.push(format!(
                "Element must precede one of {}",
                render_identities(&rule.precedes_any)
            ));
        }
    }

    if !rule.follows_any.is_empty() {
        let previous = position.checked_sub(1).and_then(|p| items.get(p));
        if !previous.is_some_and(|previous| matches_any(&rule.follows_any, previous)) {
            messages.push(format!(
                "Element must follow one of {}",
                render_identities(&rule.follows_any)
            ));
        }
    }

    if !rule.before_all.is_empty() {
        messages.extend(
            items[..position]
                .iter()
                .filter(|earlier| matches_any(&rule.before_all, earlier))
                .map(|earlier| format!("Element must not occur after {}", earlier.identity())),
        );
    }

    if !rule.after_all.is_empty() {
        messages.extend(
            items[position + 1..]
                .iter()
                .filter(|later| matches_any(&rule.after_all, later))
                .map(|later| format!("Element must not occur before {}", later.identity())),
        );
    }

    messages
}

fn matches_any(identities: &[Identity], item: &MetaItem) -> bool {
    identities.iter().any(|identity| identity.matches(item))
}

fn render_identities(identities: &[Identity]) -> String {
    identities
        .iter()
        .map(Identity::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn missing_required<'a>(
    items: &'a [MetaItem],
    rules: &'a [Arc<Rule>],
    family: RuleFamily,
) -> impl Iterator<Item = Issue> + 'a {
    rules
        .iter()
        .filter(|rule| rule.required && !items.iter().any(|item| rule.applies_to(item)))
        .map(move |rule| Issue::new(Severity::Error, MSG_ELEMENT_MISSING, family, rule, None))
}
