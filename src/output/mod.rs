//! Report rendering.
//!
//! This module provides:
//! - Colored plain text output for terminals
//! - JSON output for scripts
//! - A stdout writer that tolerates closed pipes

mod json;
mod plain;
mod writer;

use std::io::{self, BufWriter, Write};

use crate::config::OutputFormat;
use crate::filter::ItemFilter;
use crate::report::Report;

// Re-export public API
pub use json::render_json;
pub use plain::render_plain;
pub(crate) use writer::IgnoreBrokenPipe;

/// Writes the report in the requested format.
pub fn render<W: Write>(
    report: &Report,
    filter: &ItemFilter,
    format: OutputFormat,
    out: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Plain => render_plain(report, filter, out),
        OutputFormat::Json => render_json(report, filter, out),
    }
}

/// Writes the report to stdout, ignoring a reader that went away early.
pub fn write_stdout(report: &Report, filter: &ItemFilter, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = IgnoreBrokenPipe::new(BufWriter::new(stdout.lock()));
    render(report, filter, format, &mut out)?;
    out.flush()
}
