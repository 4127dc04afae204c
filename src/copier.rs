/// Filesystem copy primitives behind a capability trait.
///
/// The organizer's traversal is written once against the `ActionPerformer`
/// trait. `FsPerformer` carries out real copies; `NoopPerformer` backs
/// dry-run mode by succeeding without touching the filesystem.
use filetime::FileTime;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur while performing copy operations.
#[derive(Debug)]
pub enum CopyError {
    /// Failed to create a destination directory.
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to copy a single file to its destination.
    FileCopyFailed {
        source: PathBuf,
        destination: PathBuf,
        source_error: std::io::Error,
    },
    /// Failed to list a directory during a tree copy.
    DirectoryReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for CopyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::FileCopyFailed {
                source,
                destination,
                source_error,
            } => {
                write!(
                    f,
                    "Failed to copy {} to {}: {}",
                    source.display(),
                    destination.display(),
                    source_error
                )
            }
            Self::DirectoryReadFailed { path, source } => {
                write!(f, "Failed to read directory {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for CopyError {}

/// Result type for copy operations.
pub type CopyResult<T> = Result<T, CopyError>;

/// The filesystem mutations the organizer can request.
///
/// Implementations decide whether the mutation actually happens, which keeps
/// the traversal and classification logic identical between real runs and
/// dry runs.
pub trait ActionPerformer {
    /// Creates a directory, including any missing parents.
    fn ensure_dir(&self, path: &Path) -> CopyResult<()>;

    /// Copies a single file, preserving metadata and overwriting any existing
    /// file at the destination.
    fn copy_file(&self, source: &Path, destination: &Path) -> CopyResult<()>;

    /// Recursively copies a directory tree, merging into an existing
    /// destination. Files at the same relative path are overwritten.
    fn copy_tree(&self, source: &Path, destination: &Path) -> CopyResult<()>;
}

/// Performs real filesystem copies.
pub struct FsPerformer;

impl FsPerformer {
    fn read_dir_error(path: &Path, source: std::io::Error) -> CopyError {
        CopyError::DirectoryReadFailed {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl ActionPerformer for FsPerformer {
    fn ensure_dir(&self, path: &Path) -> CopyResult<()> {
        fs::create_dir_all(path).map_err(|e| CopyError::DirectoryCreationFailed {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn copy_file(&self, source: &Path, destination: &Path) -> CopyResult<()> {
        // fs::copy overwrites the destination and carries permissions over.
        fs::copy(source, destination).map_err(|e| CopyError::FileCopyFailed {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            source_error: e,
        })?;

        // Timestamp preservation is best effort.
        if let Ok(metadata) = fs::metadata(source) {
            let mtime = FileTime::from_last_modification_time(&metadata);
            let _ = filetime::set_file_mtime(destination, mtime);
        }

        Ok(())
    }

    fn copy_tree(&self, source: &Path, destination: &Path) -> CopyResult<()> {
        self.ensure_dir(destination)?;

        let entries =
            fs::read_dir(source).map_err(|e| Self::read_dir_error(source, e))?;

        for entry in entries {
            let entry = entry.map_err(|e| Self::read_dir_error(source, e))?;
            let entry_path = entry.path();
            let entry_destination = destination.join(entry.file_name());

            // is_dir/is_file follow symlinks, so linked content is copied.
            if entry_path.is_dir() {
                self.copy_tree(&entry_path, &entry_destination)?;
            } else if entry_path.is_file() {
                self.copy_file(&entry_path, &entry_destination)?;
            }
            // Other entry kinds (sockets, broken links) are ignored.
        }

        Ok(())
    }
}

/// Succeeds on every request without touching the filesystem.
pub struct NoopPerformer;

impl ActionPerformer for NoopPerformer {
    fn ensure_dir(&self, _path: &Path) -> CopyResult<()> {
        Ok(())
    }

    fn copy_file(&self, _source: &Path, _destination: &Path) -> CopyResult<()> {
        Ok(())
    }

    fn copy_tree(&self, _source: &Path, _destination: &Path) -> CopyResult<()> {
        Ok(())
    }
}
