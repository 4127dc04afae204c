//! Command-line interface module for homesort.
//!
//! Parses the single `--dry-run` flag, resolves the run configuration from
//! the environment, and drives an organization run with end-of-run reporting.

use crate::config::OrganizeConfig;
use crate::organizer::Organizer;
use crate::output::OutputFormatter;
use clap::Parser;

/// Organize files from Desktop, Downloads, and Pictures.
#[derive(Debug, Parser)]
#[command(name = "homesort", version)]
pub struct Cli {
    /// Simulate the process without copying any files. Prints source and
    /// destination paths.
    #[arg(long)]
    pub dry_run: bool,
}

/// Runs the CLI application.
///
/// Loads the configuration from the environment, runs the organizer, and
/// prints the summary. Per-entry failures are reported during the run and do
/// not surface as an error here; only configuration problems and a target
/// base directory that cannot be created do.
///
/// # Examples
///
/// ```no_run
/// use homesort::cli::{Cli, run_cli};
///
/// let cli = Cli { dry_run: true };
/// match run_cli(&cli) {
///     Ok(()) => println!("Operation completed successfully"),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn run_cli(cli: &Cli) -> Result<(), String> {
    let config = OrganizeConfig::from_env().map_err(|e| e.to_string())?;

    OutputFormatter::info("Starting file organization process...");
    if cli.dry_run {
        OutputFormatter::dry_run_notice("No files will be copied.");
    }

    let organizer = Organizer::new(&config, cli.dry_run);
    let summary = organizer.run().map_err(|e| e.to_string())?;

    OutputFormatter::summary_table(
        &summary.category_counts,
        summary.copied_files,
        summary.copied_dirs,
    );

    if !summary.failures.is_empty() {
        let entry_word = if summary.failures.len() == 1 {
            "entry"
        } else {
            "entries"
        };
        OutputFormatter::warning(&format!(
            "{} {} could not be copied. Review the errors above.",
            summary.failures.len(),
            entry_word
        ));
    }

    if cli.dry_run {
        OutputFormatter::success("Dry run complete. No files were modified.");
    } else {
        OutputFormatter::success("File organization process complete.");
    }

    Ok(())
}
