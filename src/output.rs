//! Output formatting and styling module.
//!
//! Centralizes all terminal output: colored notices, per-entry report lines,
//! progress bars for real-mode runs, and the end-of-run summary table.

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;

/// Manages CLI output with consistent styling.
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

    /// Prints a warning message in yellow with a warning symbol.
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

    /// Prints a dry-run notice message.
    pub fn dry_run_notice(message: &str) {
        println!("{}", format!("[DRY RUN] {}", message).yellow());
    }

    /// Prints a summary table of copied files by category, followed by the
    /// directory count.
    pub fn summary_table(
        category_counts: &HashMap<String, usize>,
        copied_files: usize,
        copied_dirs: usize,
    ) {
        Self::header("SUMMARY");

        // Sort categories for consistent output
        let mut categories: Vec<_> = category_counts.iter().collect();
        categories.sort_by_key(|&(name, _)| name);

        let max_category_len = categories
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0)
            .max(8); // At least "Category" width

        println!(
            "{:<width$} | {}",
            "Category".bold(),
            "Files".bold(),
            width = max_category_len
        );
        println!("{}", "-".repeat(max_category_len + 10));

        for (category, count) in &categories {
            let file_word = if **count == 1 { "file" } else { "files" };
            println!(
                "{:<width$} | {} {}",
                category,
                count.to_string().green(),
                file_word,
                width = max_category_len
            );
        }

        println!("{}", "-".repeat(max_category_len + 10));
        println!(
            "{:<width$} | {} {}",
            "Total".bold(),
            copied_files.to_string().green().bold(),
            if copied_files == 1 { "file" } else { "files" },
            width = max_category_len
        );

        if copied_dirs > 0 {
            println!(
                "{:<width$} | {} {}",
                "Folders".bold(),
                copied_dirs.to_string().green(),
                if copied_dirs == 1 {
                    "directory"
                } else {
                    "directories"
                },
                width = max_category_len
            );
        }
    }
}

/// Per-source progress reporting.
///
/// Real-mode runs show a progress bar and route entry lines through it so the
/// bar and the lines do not interleave; dry runs print plain lines.
pub struct SourceProgress {
    bar: Option<ProgressBar>,
}

impl SourceProgress {
    /// Creates a progress bar sized to the number of entries in a source.
    pub fn bar(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("█▓░"),
        );
        Self { bar: Some(bar) }
    }

    /// Creates a plain reporter without a bar.
    pub fn plain() -> Self {
        Self { bar: None }
    }

    /// Emits one report line.
    pub fn line(&self, message: &str) {
        match &self.bar {
            Some(bar) => bar.println(message),
            None => println!("{}", message),
        }
    }

    /// Advances the bar by one entry.
    pub fn tick(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    /// Clears the bar once the source is done.
    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
