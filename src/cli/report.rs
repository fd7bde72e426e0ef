//! Command output formatting.
//!
//! Kept apart from the core so jsgettext can be used as a library without
//! printing anything.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, ExtractSummary, InitSummary};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match result {
        CommandResult::Extract(summary) => print_extract(summary, verbose, writer),
        CommandResult::Init(summary) => print_init(summary, writer),
    }
}

fn print_extract<W: Write>(summary: &ExtractSummary, verbose: bool, writer: &mut W) {
    if verbose && !summary.config_from_file {
        let _ = writeln!(
            writer,
            "{} no config file found, using defaults",
            "note:".bold().cyan()
        );
    }

    for group in &summary.groups {
        let files = if verbose {
            format!(" ({} files scanned)", group.file_count)
        } else {
            String::new()
        };
        let _ = writeln!(
            writer,
            "Extracted {} messages from {} files.{}",
            group.message_count.to_string().bold(),
            group.language.name(),
            files
        );
    }

    if summary.skipped_count > 0 {
        let _ = writeln!(
            writer,
            "{} {} source path(s) could not be read",
            "warning:".bold().yellow(),
            summary.skipped_count
        );
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "{} messages successfully extracted, {} written.",
            summary.message_count,
            summary.pot_file.display()
        )
        .green()
    );
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}
