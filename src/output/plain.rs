//! Human-readable report rendering.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};

use crate::filter::ItemFilter;
use crate::models::Severity;
use crate::report::Report;
use crate::utils::sanitize_display_text;
use crate::validate::Issue;

/// Writes the report as colored text.
///
/// Layout: missing records, then every record matching `filter` as
/// `[index] tag key = value` with its findings indented beneath, then the
/// summary. The summary always covers the whole document.
pub fn render_plain<W: Write>(report: &Report, filter: &ItemFilter, out: &mut W) -> io::Result<()> {
    let missing: Vec<&Issue> = report
        .missing()
        .into_iter()
        .filter(|issue| !filter.is_active() || filter.matches_key(missing_key(issue)))
        .collect();
    if !missing.is_empty() {
        writeln!(out, "{}", "Missing".bold())?;
        for issue in missing {
            writeln!(
                out,
                "  {} [{}] {}: {}",
                marker(issue.severity),
                issue.family,
                issue.rule.identity(),
                issue.message
            )?;
        }
        writeln!(out)?;
    }

    let severities = report.severities();
    let mut record_issues = report.record_issues();
    let shown: Vec<_> = report.items.iter().filter(|item| filter.matches(item)).collect();
    writeln!(
        out,
        "{} ({} of {})",
        "Records".bold(),
        shown.len(),
        report.items.len()
    )?;
    for item in shown {
        let label = format!("[{}] {} {}", item.index, item.tag, item.key);
        let label = match severities.get(&item.index) {
            Some(severity) => paint(&label, *severity),
            None => label.as_str().normal(),
        };
        let sanitized = sanitize_display_text(&item.value);
        write!(out, "{} = {}", label, filter.display_value(&sanitized))?;
        if let Some(link) = item.value_link.as_deref().filter(|link| *link != item.value) {
            write!(out, " ({})", link.dimmed())?;
        }
        writeln!(out)?;

        for issue in record_issues.remove(&item.index).unwrap_or_default() {
            write!(
                out,
                "    {} [{}] {}",
                marker(issue.severity),
                issue.family,
                issue.message
            )?;
            if let Some(delta) = issue.length_delta {
                write!(out, " ({:+})", delta)?;
            }
            writeln!(out)?;
        }
    }

    writeln!(out)?;
    let summary = report.summary();
    if summary.is_empty() {
        writeln!(out, "{}", "No issues found".green())?;
        return Ok(());
    }
    writeln!(out, "{}", "Summary".bold())?;
    for entry in summary {
        writeln!(
            out,
            "  {} {}: {}",
            marker(entry.severity),
            entry.message,
            entry.keys.join(", ")
        )?;
    }
    Ok(())
}

fn missing_key(issue: &Issue) -> &str {
    issue.rule.key.as_deref().unwrap_or(&issue.rule.tag)
}

fn marker(severity: Severity) -> ColoredString {
    match severity {
        Severity::Error => "✖".red().bold(),
        Severity::Warning => "!".yellow().bold(),
    }
}

fn paint(text: &str, severity: Severity) -> ColoredString {
    match severity {
        Severity::Error => text.red(),
        Severity::Warning => text.yellow(),
    }
}
