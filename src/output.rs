//! Output formatting and styling.
//!
//! Centralizes terminal rendering for the CLI: colored status lines, the
//! per-file ✓/✗ outcome markers, category listings, the summary table, and
//! the busy spinner shown while a run is in flight.

use crate::preview::PreviewResult;
use crate::report::{MoveOutcome, OrganizeStats};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Renders all CLI output with consistent styling.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red with an X mark.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a warning message in yellow.
    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a section header.
    pub fn header(header: &str) {
        println!("\n{}", header.bold());
    }

    /// Creates a spinner for a long-running operation.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sortdir::output::OutputFormatter;
    ///
    /// let spinner = OutputFormatter::create_spinner("Moving files...");
    /// // ... do the work ...
    /// spinner.finish_and_clear();
    /// ```
    pub fn create_spinner(message: &str) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("Invalid spinner template"),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }

    /// Prints the plan a preview produced, one category at a time.
    ///
    /// Categories are sorted by name for stable output; files keep their
    /// scan order.
    pub fn preview_listing(preview: &PreviewResult) {
        let mut groups: Vec<_> = preview.groups.iter().collect();
        groups.sort_by_key(|g| g.category.dir_name());

        for group in groups {
            Self::header(&format!(
                "{} ({})",
                group.category.dir_name(),
                group.files.len()
            ));
            for file in &group.files {
                println!("  {} {}", "→".cyan(), file);
            }
        }

        if preview.skipped > 0 {
            println!(
                "\n{} {} {} left in place",
                "⚠".yellow(),
                preview.skipped,
                if preview.skipped == 1 { "file" } else { "files" },
            );
        }
    }

    /// Prints one per-file move outcome with a ✓/✗ marker.
    pub fn outcome_line(outcome: &MoveOutcome) {
        match &outcome.error {
            None => {
                println!(
                    " {} {} {} {}/",
                    "✓".green(),
                    outcome.file_name,
                    "→".cyan(),
                    outcome.category.dir_name()
                );
            }
            Some(error) => {
                eprintln!(" {} {}: {}", "✗".red(), outcome.file_name, error);
            }
        }
    }

    /// Prints the aggregate statistics table for an organization run.
    pub fn stats_summary(stats: &OrganizeStats) {
        Self::header("SUMMARY");

        let rows = [
            ("Moved", stats.moved, stats.moved.to_string().green()),
            ("Errors", stats.errored, stats.errored.to_string().red()),
            ("Skipped", stats.skipped, stats.skipped.to_string().yellow()),
        ];

        println!("{:<8} | {}", "Result".bold(), "Files".bold());
        println!("{}", "-".repeat(18));
        for (label, count, styled) in rows {
            println!(
                "{:<8} | {} {}",
                label,
                styled,
                if count == 1 { "file" } else { "files" }
            );
        }
    }
}
