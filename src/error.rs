//! Domain-specific error types for the stow engine.
//!
//! Each layer returns its own [`thiserror`] enum; the CLI boundary converts
//! them to [`anyhow::Error`] via `?`.  Per-entry link failures are not errors
//! at this level: they are contained in
//! [`LinkOutcome::Failed`](crate::resources::LinkOutcome::Failed).
//!
//! # Error hierarchy
//!
//! ```text
//! StowError
//! ├── Config(ConfigError): source path and home directory resolution
//! ├── Ignore(IgnoreError): reading the ignore file
//! └── Plan(PlanError):     walking the source tree
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for a stow run.
#[derive(Error, Debug)]
pub enum StowError {
    /// Configuration could not be resolved.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The ignore file exists but could not be read.
    #[error("Ignore file error: {0}")]
    Ignore(#[from] IgnoreError),

    /// The source tree could not be walked.
    #[error("Planning error: {0}")]
    Plan(#[from] PlanError),
}

/// Errors that arise while resolving the run configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The source path does not exist.
    #[error("Path '{}' does not exist", .0.display())]
    SourceNotFound(PathBuf),

    /// The source path exists but is not a directory.
    #[error("Path '{}' is not a directory", .0.display())]
    SourceNotDirectory(PathBuf),

    /// The current working directory could not be determined.
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// The home directory environment variable is not set.
    #[error("{0} environment variable is not set")]
    HomeNotSet(&'static str),
}

/// Errors that arise while loading the ignore file.
#[derive(Error, Debug)]
pub enum IgnoreError {
    /// The ignore file exists but could not be read.
    #[error("cannot read ignore file {}: {source}", path.display())]
    Read {
        /// Path of the ignore file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors that arise while walking the source tree.
#[derive(Error, Debug)]
pub enum PlanError {
    /// The source root could not be listed.
    #[error("cannot read directory {}: {source}", path.display())]
    ReadDir {
        /// Directory that could not be listed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
