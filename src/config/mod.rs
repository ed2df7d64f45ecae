//! Run configuration: source, target, ignore file, and dry-run flag.
pub mod ignore;

use std::path::{Path, PathBuf};

use crate::cli::GlobalOpts;
use crate::error::{ConfigError, IgnoreError};
use crate::logging::Log;

pub use ignore::IgnoreList;

/// Name of the per-source ignore file.
pub const IGNORE_FILE_NAME: &str = ".stow-local-ignore";

/// Resolved configuration for one stow run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StowConfig {
    /// Absolute path of the source tree.
    pub source: PathBuf,
    /// Directory the source tree is mirrored into.
    pub target: PathBuf,
    /// Path of the ignore file inside the source tree.
    pub ignore_file: PathBuf,
    /// Report intended links without touching the filesystem.
    pub dry_run: bool,
}

impl StowConfig {
    /// Build a configuration for an explicit source and target.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` does not exist or is not a directory.
    pub fn new(source: &Path, target: PathBuf, dry_run: bool) -> Result<Self, ConfigError> {
        Ok(Self::resolved(validate_source(source)?, target, dry_run))
    }

    fn resolved(source: PathBuf, target: PathBuf, dry_run: bool) -> Self {
        let ignore_file = source.join(IGNORE_FILE_NAME);
        Self {
            source,
            target,
            ignore_file,
            dry_run,
        }
    }

    /// Resolve the configuration from CLI options.
    ///
    /// The source defaults to the current directory; the target is always the
    /// user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is missing or not a directory, or if the
    /// home directory cannot be determined.  The source is checked first.
    pub fn from_args(global: &GlobalOpts) -> Result<Self, ConfigError> {
        let source = match &global.path {
            Some(path) => path.clone(),
            None => std::env::current_dir().map_err(ConfigError::CurrentDir)?,
        };
        let source = validate_source(&source)?;
        Ok(Self::resolved(source, home_dir()?, global.dry_run))
    }

    /// Load the ignore list and append the ignore file's own name.
    ///
    /// # Errors
    ///
    /// Returns an error if the ignore file exists but cannot be read.
    pub fn ignore_list(&self, log: &dyn Log) -> Result<IgnoreList, IgnoreError> {
        Ok(ignore::load(&self.ignore_file, log)?.with_entry(IGNORE_FILE_NAME))
    }
}

/// Make `source` absolute and confirm it is a directory.
fn validate_source(source: &Path) -> Result<PathBuf, ConfigError> {
    if !source.exists() {
        return Err(ConfigError::SourceNotFound(source.to_path_buf()));
    }
    if !source.is_dir() {
        return Err(ConfigError::SourceNotDirectory(source.to_path_buf()));
    }
    dunce::canonicalize(source).map_err(|_| ConfigError::SourceNotFound(source.to_path_buf()))
}

/// Return the invoking user's home directory.
///
/// # Errors
///
/// Returns an error if neither `HOME` nor (on Windows) `USERPROFILE` is set.
pub fn home_dir() -> Result<PathBuf, ConfigError> {
    let home = if cfg!(target_os = "windows") {
        std::env::var("USERPROFILE")
            .or_else(|_| std::env::var("HOME"))
            .map_err(|_| ConfigError::HomeNotSet("USERPROFILE"))?
    } else {
        std::env::var("HOME").map_err(|_| ConfigError::HomeNotSet("HOME"))?
    };
    Ok(PathBuf::from(home))
}
