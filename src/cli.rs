//! Command-line interface.
//!
//! The CLI is presentation glue over the engine: it resolves the target
//! directory, loads skip-rule configuration, asks for confirmation before
//! moving anything, and renders previews, per-file outcomes, and summary
//! statistics. With `--json` it prints the boundary responses verbatim for
//! machine consumers.

use crate::api::{self, Session};
use crate::config::SkipConfig;
use crate::file_category::Classifier;
use crate::file_organizer::FileOrganizer;
use crate::output::OutputFormatter;
use crate::preview::PreviewBuilder;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

/// Sort the files of a directory into category subfolders.
#[derive(Debug, Parser)]
#[command(name = "sortdir", version, about)]
pub struct Cli {
    /// Directory to sort (defaults to your documents folder)
    pub directory: Option<PathBuf>,

    /// Show what would be moved without touching anything
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Extra skip rules from a TOML file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Runs the CLI with parsed arguments.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use sortdir::cli::{Cli, run};
///
/// let cli = Cli::parse_from(["sortdir", "/home/user/Downloads", "--dry-run"]);
/// if let Err(e) = run(&cli) {
///     eprintln!("Error: {}", e);
/// }
/// ```
pub fn run(cli: &Cli) -> Result<(), String> {
    let raw = match &cli.directory {
        Some(directory) => directory.clone(),
        None => api::default_start_path(),
    };
    let session = Session::open(&raw.to_string_lossy()).map_err(|e| e.to_string())?;

    let config = SkipConfig::load(cli.config.as_deref())
        .map_err(|e| format!("Error loading configuration: {}", e))?;
    let policy = config
        .compile()
        .map_err(|e| format!("Error compiling skip rules: {}", e))?;
    let classifier = Classifier::new(policy);

    if cli.dry_run {
        run_preview(cli, &session, &classifier)
    } else {
        run_organize(cli, &session, &classifier)
    }
}

/// Shows the plan without moving anything.
fn run_preview(cli: &Cli, session: &Session, classifier: &Classifier) -> Result<(), String> {
    if cli.json {
        let response = api::refresh(session, classifier);
        return print_json(&response);
    }

    OutputFormatter::info(&format!("Previewing: {}", session.target().display()));

    let preview =
        PreviewBuilder::preview(session.target(), classifier).map_err(|e| e.to_string())?;

    if preview.is_empty() && preview.skipped == 0 {
        OutputFormatter::warning("No files found to organize.");
        return Ok(());
    }

    OutputFormatter::preview_listing(&preview);
    OutputFormatter::success(&format!(
        "Dry run complete. {} files would be moved; nothing was modified.",
        preview.eligible_count()
    ));
    Ok(())
}

/// Organizes the target directory, after confirmation.
fn run_organize(cli: &Cli, session: &Session, classifier: &Classifier) -> Result<(), String> {
    if !cli.yes {
        let preview =
            PreviewBuilder::preview(session.target(), classifier).map_err(|e| e.to_string())?;
        if preview.is_empty() {
            if !cli.json {
                OutputFormatter::warning("No files to organize.");
            }
            // Nothing to confirm; fall through so the run still reports.
        } else {
            let prompt = format!(
                "Move {} files into {} folders under {}?",
                preview.eligible_count(),
                preview.groups.len(),
                session.target().display()
            );
            if !confirm(&prompt) {
                return Err("Aborted.".to_string());
            }
        }
    }

    if cli.json {
        let response = api::organize(session, classifier);
        return print_json(&response);
    }

    OutputFormatter::info(&format!("Organizing: {}", session.target().display()));

    let spinner = OutputFormatter::create_spinner("Moving files...");
    let report =
        FileOrganizer::organize(session.target(), classifier).map_err(|e| e.to_string())?;
    spinner.finish_and_clear();

    for outcome in &report.outcomes {
        OutputFormatter::outcome_line(outcome);
    }

    OutputFormatter::stats_summary(&report.stats);

    if report.is_complete_success() {
        OutputFormatter::success("Organization complete!");
    } else {
        OutputFormatter::warning("Some files could not be organized. Review the errors above.");
    }
    Ok(())
}

/// Asks the user to confirm before moving files. Anything but y/yes declines.
fn confirm(prompt: &str) -> bool {
    eprint!("{} [y/N] ", prompt);
    io::stderr().flush().ok();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return false;
    }
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Prints a boundary response as pretty JSON on stdout.
fn print_json<T: serde::Serialize>(response: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(response).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_directory_and_flags() {
        let cli = Cli::parse_from(["sortdir", "/tmp/downloads", "--dry-run", "--json"]);
        assert_eq!(cli.directory, Some(PathBuf::from("/tmp/downloads")));
        assert!(cli.dry_run);
        assert!(cli.json);
        assert!(!cli.yes);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_directory_is_optional() {
        let cli = Cli::parse_from(["sortdir"]);
        assert!(cli.directory.is_none());
    }

    #[test]
    fn test_cli_accepts_config_path() {
        let cli = Cli::parse_from(["sortdir", "/tmp", "--config", "rules.toml", "-y"]);
        assert_eq!(cli.config, Some(PathBuf::from("rules.toml")));
        assert!(cli.yes);
    }

    #[test]
    fn test_run_fails_on_missing_directory() {
        let cli = Cli::parse_from(["sortdir", "/no/such/directory", "--dry-run"]);
        assert!(run(&cli).is_err());
    }
}
