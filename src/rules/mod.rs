//! Declarative validation rules.
//!
//! This module provides:
//! - The `Rule` model shared by all three families
//! - `RuleSet`, an ordered family-tagged collection of rules
//! - The built-in Code, Open Graph and SEO rule sets

mod defaults;
mod types;

// Re-export public API
pub use defaults::{code_rules, open_graph_rules, seo_rules};
pub use types::{CustomTest, Pattern, Rule, RuleFamily, RuleSet, TestOutcome};
