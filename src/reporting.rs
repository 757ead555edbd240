//! Console output formatting for sweep results.
//!
//! Collisions are grouped by display type, errors before warnings, with the
//! colliding labels under each entry.

use std::collections::BTreeMap;

use anyhow::Result;
use colored::Colorize;

use crate::kinds::DisplayType;
use crate::phase::Severity;
use crate::types::{EntryReport, SweepReport};

/// Prints a formatted sweep report to stdout.
pub fn print_report(report: &SweepReport) {
    if !report.is_clean() {
        print_grouped(report);
    }
    print_summary(report);
}

/// Prints all reports as one JSON array.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json(reports: &[SweepReport]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(reports)?);
    Ok(())
}

fn print_grouped(report: &SweepReport) {
    let mut by_kind: BTreeMap<DisplayType, Vec<&EntryReport>> = BTreeMap::new();
    for entry in &report.entries {
        by_kind.entry(entry.kind).or_default().push(entry);
    }

    for (kind, mut entries) in by_kind {
        entries.sort_by(|a, b| {
            b.diagnostic
                .severity
                .cmp(&a.diagnostic.severity)
                .then_with(|| a.path.cmp(&b.path))
        });
        println!("\n{} {} ({})", "▸".yellow(), kind.label().yellow().bold(), entries.len());
        for entry in entries {
            print_entry(entry);
        }
    }
}

fn print_entry(entry: &EntryReport) {
    let tag = match entry.diagnostic.severity {
        Severity::Error => "error".red().bold(),
        Severity::Warning => "warn".yellow().bold(),
    };
    println!("  {tag} {} = {}", entry.path, format!("{:?}", entry.value).cyan());
    for label in entry.diagnostic.colliding.iter() {
        println!("      {} {}", "↔".dimmed(), label.header.header_code());
    }
    println!("      {}", entry.diagnostic.message.dimmed());
}

fn print_summary(report: &SweepReport) {
    println!(
        "\n{} {} | {} entries | {} errors | {} warnings | {}ms",
        "DISPLAY COLLISIONS".cyan().bold(),
        report.locale.bold(),
        report.checked,
        format_count(report.errors, Severity::Error),
        format_count(report.warnings, Severity::Warning),
        report.duration_ms,
    );
}

fn format_count(n: usize, severity: Severity) -> String {
    if n == 0 {
        return n.to_string().green().to_string();
    }
    match severity {
        Severity::Error => n.to_string().red().to_string(),
        Severity::Warning => n.to_string().yellow().to_string(),
    }
}
