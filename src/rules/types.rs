//! Rule definitions.
//!
//! A rule targets a tag (and optionally a key) and carries any combination
//! of checks. Which checks a family uses is a matter of the rule set's
//! contents; how lengths are judged is decided by the rule set's family.

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde::{Serialize, Serializer};
use strum_macros::{Display, EnumIter};

use crate::models::{Identity, MetaItem, Severity};

/// The three independent rule families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleFamily {
    /// Structural correctness (strict lengths, patterns, ordering, custom tests)
    #[strum(serialize = "Code")]
    Code,
    /// Social metadata (patterns only)
    #[strum(serialize = "OpenGraph")]
    OpenGraph,
    /// Length guidance (soft `min`/`safe`/`max` bands)
    #[strum(serialize = "SEO")]
    Seo,
}

/// A regular expression the raw value must match, with the message reported on mismatch.
#[derive(Debug, Clone, Serialize)]
pub struct Pattern {
    #[serde(serialize_with = "serialize_regex")]
    pub expression: Regex,
    pub message: String,
}

impl Pattern {
    /// Compiles a pattern.
    ///
    /// # Errors
    ///
    /// Returns the `regex` error if `expression` is not a valid regular expression.
    pub fn new(expression: &str, message: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            expression: Regex::new(expression)?,
            message: message.to_string(),
        })
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.expression.is_match(value)
    }
}

fn serialize_regex<S: Serializer>(regex: &Regex, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(regex.as_str())
}

/// Result of a custom rule test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestOutcome {
    Pass,
    Fail { severity: Severity, message: String },
}

impl TestOutcome {
    pub fn fail(severity: Severity, message: impl Into<String>) -> Self {
        TestOutcome::Fail {
            severity,
            message: message.into(),
        }
    }
}

type TestFn = dyn Fn(&MetaItem, &[MetaItem], usize) -> TestOutcome + Send + Sync;

/// A pure predicate over `(record, all records, record position)`.
#[derive(Clone)]
pub struct CustomTest(Arc<TestFn>);

impl CustomTest {
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&MetaItem, &[MetaItem], usize) -> TestOutcome + Send + Sync + 'static,
    {
        Self(Arc::new(test))
    }

    pub fn evaluate(&self, item: &MetaItem, items: &[MetaItem], position: usize) -> TestOutcome {
        (self.0)(item, items, position)
    }
}

impl fmt::Debug for CustomTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomTest(..)")
    }
}

/// One declarative rule.
///
/// Build rules with [`Rule::new`] and the chained setters:
///
/// ```
/// use head_meta::rules::Rule;
///
/// let rule = Rule::new("title").key("title").required().max(255);
/// assert!(rule.required);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct Rule {
    pub tag: String,
    /// `None` applies the rule to every record of the tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safe: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<Pattern>,
    /// The next record must match one of these
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub precedes_any: Vec<Identity>,
    /// The previous record must match one of these
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub follows_any: Vec<Identity>,
    /// None of these may occur earlier
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub before_all: Vec<Identity>,
    /// None of these may occur later
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub after_all: Vec<Identity>,
    #[serde(skip)]
    pub test: Option<CustomTest>,
}

impl Rule {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn key(mut self, key: &str) -> Self {
        self.key = Some(key.to_string());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    pub fn safe(mut self, safe: usize) -> Self {
        self.safe = Some(safe);
        self
    }

    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn precedes_any(mut self, identities: impl IntoIterator<Item = Identity>) -> Self {
        self.precedes_any.extend(identities);
        self
    }

    pub fn follows_any(mut self, identities: impl IntoIterator<Item = Identity>) -> Self {
        self.follows_any.extend(identities);
        self
    }

    pub fn before_all(mut self, identities: impl IntoIterator<Item = Identity>) -> Self {
        self.before_all.extend(identities);
        self
    }

    pub fn after_all(mut self, identities: impl IntoIterator<Item = Identity>) -> Self {
        self.after_all.extend(identities);
        self
    }

    pub fn test<F>(mut self, test: F) -> Self
    where
        F: Fn(&MetaItem, &[MetaItem], usize) -> TestOutcome + Send + Sync + 'static,
    {
        self.test = Some(CustomTest::new(test));
        self
    }

    /// The identity this rule targets.
    pub fn identity(&self) -> Identity {
        Identity {
            tag: self.tag.clone(),
            key: self.key.clone(),
        }
    }

    /// Returns `true` if the rule applies to the record.
    pub fn applies_to(&self, item: &MetaItem) -> bool {
        self.tag == item.tag && self.key.as_ref().is_none_or(|key| *key == item.key)
    }
}

/// An ordered, immutable set of rules belonging to one family.
#[derive(Debug, Clone)]
pub struct RuleSet {
    family: RuleFamily,
    rules: Vec<Arc<Rule>>,
}

impl RuleSet {
    pub fn new(family: RuleFamily, rules: impl IntoIterator<Item = Rule>) -> Self {
        Self {
            family,
            rules: rules.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn family(&self) -> RuleFamily {
        self.family
    }

    /// Rules in declaration order.
    pub fn rules(&self) -> &[Arc<Rule>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
