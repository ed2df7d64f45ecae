//! Link resource: one destination mirroring one source entry.
//!
//! Applying the resource replaces whatever is at the destination with a
//! symbolic link to the source.  When the platform refuses symlinks the
//! chain falls back to a hard link for files or a recursive copy for
//! directories, and finally to a plain copy if the hard link fails too.
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

use super::helpers::fs::{
    copy_dir_recursive, copy_file_with_metadata, ensure_parent_dir, remove_existing,
};
use super::{LinkOutcome, SkipReason};
use crate::logging::Log;
use crate::operations::{LinkOps, is_symlink_privilege_error};

/// A link to create: destination -> source.
#[derive(Debug, Clone)]
pub struct LinkResource {
    /// The source file/directory (what the link points to).
    pub source: PathBuf,
    /// Where the link is created.
    pub destination: PathBuf,
}

impl LinkResource {
    /// Create a new link resource.
    #[must_use]
    pub const fn new(source: PathBuf, destination: PathBuf) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Human-readable `destination -> source` description.
    #[must_use]
    pub fn description(&self) -> String {
        format!("{} -> {}", self.destination.display(), self.source.display())
    }

    /// Replace the destination with a link to the source.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created, the
    /// existing destination cannot be removed, or every link strategy fails.
    /// Intermediate fallback failures are reported on `log` at debug level.
    pub fn apply(&self, ops: &dyn LinkOps, log: &dyn Log) -> Result<LinkOutcome> {
        ensure_parent_dir(&self.destination)?;

        if self.provided_by_parent() {
            return Ok(LinkOutcome::Skipped(SkipReason::ProvidedByParent));
        }

        remove_existing(&self.destination)
            .with_context(|| format!("remove existing: {}", self.destination.display()))?;

        match ops.symlink(&self.source, &self.destination) {
            Ok(()) => Ok(LinkOutcome::Symlink),
            Err(e) if is_symlink_privilege_error(&e) => {
                log.debug(&format!("symlink refused for {}: {e}", self.description()));
                self.apply_without_symlinks(ops, log)
            }
            Err(e) => Err(e).with_context(|| format!("create symlink: {}", self.description())),
        }
    }

    /// Hard link (files) or copy (directories) when symlinks are refused.
    fn apply_without_symlinks(&self, ops: &dyn LinkOps, log: &dyn Log) -> Result<LinkOutcome> {
        if self.source.is_dir() {
            remove_existing(&self.destination)?;
            copy_dir_recursive(&self.source, &self.destination)?;
            return Ok(LinkOutcome::Copy);
        }

        match ops.hard_link(&self.source, &self.destination) {
            Ok(()) => return Ok(LinkOutcome::HardLink),
            Err(e) => log.debug(&format!(
                "hard link failed for {}, copying instead: {e}",
                self.description()
            )),
        }

        remove_existing(&self.destination)?;
        copy_file_with_metadata(&self.source, &self.destination)?;
        Ok(LinkOutcome::Copy)
    }

    /// Return `true` if the destination's parent is the source's parent,
    /// reached through a directory link created earlier.
    fn provided_by_parent(&self) -> bool {
        let (Some(dest_parent), Some(source_parent)) =
            (self.destination.parent(), self.source.parent())
        else {
            return false;
        };
        same_dir(dest_parent, source_parent)
    }
}

fn same_dir(a: &Path, b: &Path) -> bool {
    match (dunce::canonicalize(a), dunce::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
