//! Run configuration for the organizer.
//!
//! The core never reads the environment itself: `main` loads a local `.env`
//! file first, and [`OrganizeConfig::from_env`] resolves the process
//! environment into an explicit struct that the rest of the crate receives by
//! reference. Construction fails before any filesystem I/O when the target
//! base directory is missing.

use std::path::PathBuf;

/// Environment variable holding the destination root for organized files.
pub const TARGET_BASE_DIR_VAR: &str = "TARGET_BASE_DIR";

/// Errors that can occur while resolving the run configuration.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// `TARGET_BASE_DIR` is unset or empty.
    TargetDirNotSet,
    /// The home directory could not be determined.
    HomeDirUnavailable,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::TargetDirNotSet => {
                write!(
                    f,
                    "{} is not set. Add it to your environment or .env file.",
                    TARGET_BASE_DIR_VAR
                )
            }
            ConfigError::HomeDirUnavailable => {
                write!(f, "Could not determine the home directory (HOME is not set).")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Resolved configuration for a single organization run.
#[derive(Debug, Clone)]
pub struct OrganizeConfig {
    /// The user's home directory; the fixed source folders live under it.
    pub home_dir: PathBuf,
    /// Root directory under which all categorized output is written.
    pub target_base_dir: PathBuf,
}

impl OrganizeConfig {
    /// Creates a configuration from explicit paths.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::TargetDirNotSet` if the target path is empty and
    /// `ConfigError::HomeDirUnavailable` if the home path is empty.
    pub fn new(home_dir: PathBuf, target_base_dir: PathBuf) -> Result<Self, ConfigError> {
        if home_dir.as_os_str().is_empty() {
            return Err(ConfigError::HomeDirUnavailable);
        }
        if target_base_dir.as_os_str().is_empty() {
            return Err(ConfigError::TargetDirNotSet);
        }

        Ok(Self {
            home_dir,
            target_base_dir,
        })
    }

    /// Resolves the configuration from the process environment.
    ///
    /// Reads `HOME` for the source folders and [`TARGET_BASE_DIR_VAR`] for the
    /// destination root. Values supplied via a `.env` file are visible here
    /// once `main` has loaded it.
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let home_dir =
            std::env::var("HOME").map_err(|_| ConfigError::HomeDirUnavailable)?;
        let target_base_dir =
            std::env::var(TARGET_BASE_DIR_VAR).map_err(|_| ConfigError::TargetDirNotSet)?;

        Self::new(PathBuf::from(home_dir), PathBuf::from(target_base_dir))
    }
}
