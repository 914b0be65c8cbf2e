//! Status output of the command line.
//!
//! Separate from the core pipeline so langgen can be used as a library.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, GenerateSummary, InitSummary};
use crate::core::{GeneratedFile, Progress, ScanStats, SourceCategory};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Prints pipeline progress to stdout as it happens.
pub struct StatusPrinter;

impl Progress for StatusPrinter {
    fn root_started(&mut self, category: SourceCategory, dir: &Path) {
        let _ = writeln!(io::stdout().lock(), "{}", started_line(category, dir));
    }

    fn root_finished(&mut self, category: SourceCategory, stats: &ScanStats) {
        let _ = writeln!(io::stdout().lock(), "{}", finished_line(category, stats));
    }

    fn keys_collected(&mut self, total: usize) {
        let line = format!("Total keys found: {}", total);
        let _ = writeln!(io::stdout().lock(), "{}", line.bold());
    }

    fn locale_written(&mut self, file: &GeneratedFile) {
        let _ = writeln!(io::stdout().lock(), "{}", generated_line(file));
    }
}

fn started_line(category: SourceCategory, dir: &Path) -> String {
    match category {
        SourceCategory::Custom => format!("Parsing custom path...\nPath: {}", dir.display()),
        _ => format!("Parsing {} folder...", category),
    }
}

fn finished_line(category: SourceCategory, stats: &ScanStats) -> String {
    let counts = stats.get(category);
    format!(
        "{} parse finished. Found {} keys in {} files",
        capitalize(category.as_str()),
        counts.keys,
        counts.files
    )
}

fn generated_line(file: &GeneratedFile) -> String {
    format!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Generated {}", file.path.display()).green()
    )
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Print the summary of a finished command.
pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Generate(summary) => print_generate(summary, verbose),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

fn print_generate(summary: &GenerateSummary, verbose: bool) {
    print_skipped_warning_to(summary.skipped_count, verbose, &mut io::stderr().lock());
}

/// Print a warning about paths that could not be scanned.
fn print_skipped_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be scanned (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

fn print_init(summary: &InitSummary) {
    match &summary.error {
        None => println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", summary.path.display()).green()
        ),
        Some(error) => eprintln!("{} {}", FAILURE_MARK.red(), error.red()),
    }
}
