//! The organization run: source enumeration, classification, and copying.
//!
//! A run walks the three fixed source folders under the home directory and
//! copies every top-level entry into the target base directory, sorting files
//! into category subfolders. The traversal is written once; whether anything
//! is actually copied depends on the injected
//! [`ActionPerformer`](crate::copier::ActionPerformer).

use crate::config::OrganizeConfig;
use crate::copier::{ActionPerformer, CopyError, CopyResult, FsPerformer, NoopPerformer};
use crate::file_category::{Category, CategoryMapper};
use crate::output::{OutputFormatter, SourceProgress};
use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// The fixed source folders, processed in this order.
const SOURCE_DIR_NAMES: [&str; 3] = ["Desktop", "Downloads", "Pictures"];

/// A logical source folder resolved against the home directory.
#[derive(Debug, Clone)]
pub struct SourceDir {
    /// The folder's logical name ("Desktop", "Downloads", "Pictures").
    pub name: &'static str,
    /// Absolute path under the home directory.
    pub path: PathBuf,
}

/// One top-level entry of a source folder.
struct SourceEntry {
    /// The entry's name, kept as an `OsString` so the destination path matches
    /// the source exactly even for non-UTF-8 names.
    file_name: OsString,
    path: PathBuf,
}

impl SourceEntry {
    fn display_name(&self) -> String {
        self.file_name.to_string_lossy().to_string()
    }
}

/// What happened to a single entry.
enum EntryOutcome {
    CopiedFile(Category),
    CopiedDir,
    /// Neither a file nor a directory (sockets, broken links); ignored.
    Ignored,
}

/// Totals for a completed run.
///
/// Per-entry failures are recorded here rather than aborting the run; they do
/// not affect the process exit status.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub copied_files: usize,
    pub copied_dirs: usize,
    /// Copied file counts keyed by category folder name.
    pub category_counts: HashMap<String, usize>,
    /// Source folders that did not exist and were skipped.
    pub skipped_sources: Vec<PathBuf>,
    /// Entries that failed, with the error detail.
    pub failures: Vec<(PathBuf, String)>,
}

/// Drives a single organization run.
pub struct Organizer<'a> {
    config: &'a OrganizeConfig,
    performer: Box<dyn ActionPerformer>,
    mapper: CategoryMapper,
    dry_run: bool,
}

impl<'a> Organizer<'a> {
    /// Creates an organizer for the given configuration.
    ///
    /// Dry-run mode swaps the real copier for a no-op performer, so the same
    /// traversal produces report lines without mutating anything.
    pub fn new(config: &'a OrganizeConfig, dry_run: bool) -> Self {
        let performer: Box<dyn ActionPerformer> = if dry_run {
            Box::new(NoopPerformer)
        } else {
            Box::new(FsPerformer)
        };
        Self::with_performer(config, performer, dry_run)
    }

    /// Creates an organizer with an explicit performer.
    pub fn with_performer(
        config: &'a OrganizeConfig,
        performer: Box<dyn ActionPerformer>,
        dry_run: bool,
    ) -> Self {
        Self {
            config,
            performer,
            mapper: CategoryMapper::default(),
            dry_run,
        }
    }

    /// Resolves the fixed source folders under the configured home directory.
    pub fn source_dirs(&self) -> [SourceDir; 3] {
        SOURCE_DIR_NAMES.map(|name| SourceDir {
            name,
            path: self.config.home_dir.join(name),
        })
    }

    /// Runs the organization pass over every source folder.
    ///
    /// The only fatal error is failing to create the target base directory;
    /// everything after that point is per-entry and soft. Missing source
    /// folders produce a skip notice and are recorded in the summary.
    pub fn run(&self) -> CopyResult<RunSummary> {
        let mut summary = RunSummary::default();

        let target = &self.config.target_base_dir;
        if !self.dry_run && !target.exists() {
            OutputFormatter::info(&format!(
                "Creating target base directory: {}",
                target.display()
            ));
            self.performer.ensure_dir(target)?;
        }

        for source in self.source_dirs() {
            if !source.path.is_dir() {
                OutputFormatter::warning(&format!(
                    "Source directory not found, skipping: {}",
                    source.path.display()
                ));
                summary.skipped_sources.push(source.path.clone());
                continue;
            }

            OutputFormatter::header(&format!(
                "Processing files from: {} ({})",
                source.name,
                source.path.display()
            ));

            let entries = match list_entries(&source.path) {
                Ok(entries) => entries,
                Err(e) => {
                    OutputFormatter::error(&format!(
                        "Error processing {}: {}",
                        source.path.display(),
                        e
                    ));
                    summary.failures.push((source.path.clone(), e.to_string()));
                    continue;
                }
            };

            let progress = if self.dry_run {
                SourceProgress::plain()
            } else {
                SourceProgress::bar(entries.len() as u64)
            };

            for entry in &entries {
                match self.process_entry(entry, &progress) {
                    Ok(EntryOutcome::CopiedFile(category)) => {
                        summary.copied_files += 1;
                        *summary
                            .category_counts
                            .entry(category.dir_name().to_string())
                            .or_insert(0) += 1;
                    }
                    Ok(EntryOutcome::CopiedDir) => summary.copied_dirs += 1,
                    Ok(EntryOutcome::Ignored) => {}
                    Err(e) => {
                        // A single bad entry never aborts the run.
                        OutputFormatter::error(&format!(
                            "Error processing {}: {}",
                            entry.path.display(),
                            e
                        ));
                        summary.failures.push((entry.path.clone(), e.to_string()));
                    }
                }
                progress.tick();
            }

            progress.finish();
        }

        Ok(summary)
    }

    /// Copies one entry: directories are replicated whole under the target
    /// base, files are classified and copied into their category folder.
    fn process_entry(
        &self,
        entry: &SourceEntry,
        progress: &SourceProgress,
    ) -> CopyResult<EntryOutcome> {
        // is_dir/is_file follow symlinks, so linked content is treated like
        // the entry kind it points at.
        if entry.path.is_dir() {
            let destination = self.config.target_base_dir.join(&entry.file_name);
            progress.line(&format!(
                "[Folder] {} -> {}",
                entry.path.display(),
                destination.display()
            ));
            self.performer.copy_tree(&entry.path, &destination)?;
            return Ok(EntryOutcome::CopiedDir);
        }

        if entry.path.is_file() {
            let category = self.mapper.categorize(&entry.display_name());
            let destination_dir = self.config.target_base_dir.join(category.dir_name());
            let destination = destination_dir.join(&entry.file_name);
            progress.line(&format!(
                "[File]   {} -> {}",
                entry.path.display(),
                destination.display()
            ));
            self.performer.ensure_dir(&destination_dir)?;
            self.performer.copy_file(&entry.path, &destination)?;
            return Ok(EntryOutcome::CopiedFile(category));
        }

        Ok(EntryOutcome::Ignored)
    }
}

/// Lists the immediate entries of a source folder, sorted by name for stable
/// output.
fn list_entries(path: &Path) -> CopyResult<Vec<SourceEntry>> {
    let read_error = |e| CopyError::DirectoryReadFailed {
        path: path.to_path_buf(),
        source: e,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(path).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        entries.push(SourceEntry {
            file_name: entry.file_name(),
            path: entry.path(),
        });
    }
    entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(entries)
}
