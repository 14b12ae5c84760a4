//! Record validation.
//!
//! This module provides:
//! - `validate`: evaluates one rule set against the record list
//! - `find_duplicates`: detects records sharing an identity
//! - `Issue`: the finding type shared by all rule families
//!
//! Validation never fails; every finding is returned as an `Issue` value.

mod duplicates;
mod engine;
mod issue;

// Re-export public API
pub use duplicates::find_duplicates;
pub use engine::validate;
pub use issue::Issue;
