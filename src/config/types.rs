//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use url::Url;

use crate::models::Severity;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored listing of records, issues and summary
    Plain,
    /// A single JSON document
    Json,
}

/// Which record fields the filter searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SearchScope {
    Keys,
    Values,
    Both,
}

impl SearchScope {
    pub fn keys(self) -> bool {
        matches!(self, SearchScope::Keys | SearchScope::Both)
    }

    pub fn values(self) -> bool {
        matches!(self, SearchScope::Values | SearchScope::Both)
    }
}

/// Exit status policy.
///
/// - `Never`: always exit 0 once the report is printed (default)
/// - `Warning`: exit non-zero if any warning or error was found
/// - `Error`: exit non-zero if any error was found
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    Never,
    Warning,
    Error,
}

impl FailOn {
    /// Returns `true` if a report whose worst finding is `worst` should fail the run.
    pub fn should_fail(self, worst: Option<Severity>) -> bool {
        match (self, worst) {
            (FailOn::Never, _) | (_, None) => false,
            (FailOn::Warning, Some(_)) => true,
            (FailOn::Error, Some(severity)) => severity == Severity::Error,
        }
    }
}

/// Which rule families to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Code rules and duplicate detection
    pub code: bool,
    pub open_graph: bool,
    pub seo: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            code: true,
            open_graph: true,
            seo: true,
        }
    }
}

/// Application configuration.
///
/// Parsed from the command line by the binary, or constructed
/// programmatically with `..Default::default()`.
///
/// # Examples
///
/// ```no_run
/// use head_meta::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("index.html"),
///     no_seo: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "head_meta",
    version,
    about = "Inspects and validates the metadata elements of an HTML document head"
)]
pub struct Config {
    /// HTML file to inspect (use '-' for stdin)
    pub file: PathBuf,

    /// URL the document was loaded from, used to resolve relative links
    #[arg(long)]
    pub url: Option<Url>,

    /// Skip code checks (ordering, charset, title, duplicates)
    #[arg(long)]
    pub no_code: bool,

    /// Skip Open Graph checks
    #[arg(long)]
    pub no_open_graph: bool,

    /// Skip SEO length checks
    #[arg(long)]
    pub no_seo: bool,

    /// Only list records matching any of these comma-separated terms
    #[arg(long)]
    pub filter: Option<String>,

    /// Record fields searched by --filter
    #[arg(long, value_enum, default_value_t = SearchScope::Both)]
    pub search: SearchScope,

    /// Report output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Exit with a non-zero status when issues of this severity are found
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    pub fail_on: FailOn,
}

impl Config {
    /// Rule families enabled by this configuration.
    pub fn validation_options(&self) -> ValidationOptions {
        ValidationOptions {
            code: !self.no_code,
            open_graph: !self.no_open_graph,
            seo: !self.no_seo,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("-"),
            url: None,
            no_code: false,
            no_open_graph: false,
            no_seo: false,
            filter: None,
            search: SearchScope::Both,
            format: OutputFormat::Plain,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            fail_on: FailOn::Never,
        }
    }
}
