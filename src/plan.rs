//! Link planning: decide which source entries to link.
//!
//! The walk is top-down and depth-first.  Within one directory, files are
//! listed before subdirectories, each group ordered by file name, and the
//! subdirectories are then descended in that order.  Symbolic links become
//! plan entries but are never followed.
use std::path::{Path, PathBuf};

use crate::config::IgnoreList;
use crate::error::PlanError;
use crate::logging::Log;
use crate::operations::{LinkOps, SystemLinkOps};

/// One filesystem object to link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StowEntry {
    /// Absolute path inside the source tree.
    pub source: PathBuf,
    /// Path relative to the source root; appended to the target root to get
    /// the destination.
    pub relative: PathBuf,
}

impl StowEntry {
    /// Destination of this entry under `target_root`.
    #[must_use]
    pub fn destination(&self, target_root: &Path) -> PathBuf {
        target_root.join(&self.relative)
    }
}

/// Ordered sequence of entries in walk order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StowPlan {
    entries: Vec<StowEntry>,
}

impl StowPlan {
    /// The planned entries in order.
    #[must_use]
    pub fn entries(&self) -> &[StowEntry] {
        &self.entries
    }

    /// Relative paths of every entry, in order.
    #[must_use]
    pub fn relative_paths(&self) -> Vec<&Path> {
        self.entries.iter().map(|e| e.relative.as_path()).collect()
    }

    /// Number of planned entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if nothing is planned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the planned entries.
    pub fn iter(&self) -> std::slice::Iter<'_, StowEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a StowPlan {
    type Item = &'a StowEntry;
    type IntoIter = std::slice::Iter<'a, StowEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Children of one directory, split the way the walk visits them.
#[derive(Default)]
struct Listing {
    files: Vec<PathBuf>,
    dirs: Vec<PathBuf>,
}

/// Walk `source_root` on the real filesystem and collect every entry not
/// excluded by `ignore`.
///
/// # Errors
///
/// Returns [`PlanError::ReadDir`] if `source_root` cannot be listed.
/// Unreadable subdirectories are reported on `log` and skipped.
pub fn plan(
    source_root: &Path,
    ignore: &IgnoreList,
    log: &dyn Log,
) -> Result<StowPlan, PlanError> {
    Planner::new(&SystemLinkOps, ignore, log).plan(source_root)
}

/// Walks a source tree, listing directories through an injectable
/// [`LinkOps`].
///
/// Descent into an ignored directory is skipped: with prefix matching every
/// descendant's relative path starts with the directory's, so none of them
/// could be planned anyway.
pub struct Planner<'a> {
    ops: &'a dyn LinkOps,
    ignore: &'a IgnoreList,
    log: &'a dyn Log,
}

impl std::fmt::Debug for Planner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Planner")
            .field("ops", &self.ops)
            .field("ignore", &self.ignore)
            .field("log", &"<dyn Log>")
            .finish()
    }
}

impl<'a> Planner<'a> {
    /// Create a planner that lists with `ops`, filters with `ignore` and
    /// reports to `log`.
    #[must_use]
    pub const fn new(ops: &'a dyn LinkOps, ignore: &'a IgnoreList, log: &'a dyn Log) -> Self {
        Self { ops, ignore, log }
    }

    /// Walk `source_root` and return the plan.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::ReadDir`] if `source_root` cannot be listed.
    pub fn plan(&self, source_root: &Path) -> Result<StowPlan, PlanError> {
        let listing = self
            .list_dir(source_root)
            .map_err(|source| PlanError::ReadDir {
                path: source_root.to_path_buf(),
                source,
            })?;
        let mut plan = StowPlan::default();
        self.walk(source_root, listing, &mut plan);
        Ok(plan)
    }

    fn walk(&self, root: &Path, listing: Listing, plan: &mut StowPlan) {
        for file in listing.files {
            push_unless_ignored(root, file, self.ignore, plan);
        }

        let mut descend = Vec::new();
        for dir in listing.dirs {
            if push_unless_ignored(root, dir.clone(), self.ignore, plan) && is_real_dir(&dir) {
                descend.push(dir);
            }
        }

        for dir in descend {
            match self.list_dir(&dir) {
                Ok(children) => self.walk(root, children, plan),
                Err(e) => self
                    .log
                    .warn(&format!("cannot read directory {}: {e}", dir.display())),
            }
        }
    }

    /// List `dir`, grouping children into files and directories.
    ///
    /// Classification follows symlinks, so a link to a directory is grouped
    /// with directories; [`is_real_dir`] keeps the walk from descending into it.
    fn list_dir(&self, dir: &Path) -> std::io::Result<Listing> {
        let mut listing = Listing::default();
        for path in self.ops.read_dir(dir)? {
            if path.is_dir() {
                listing.dirs.push(path);
            } else {
                listing.files.push(path);
            }
        }
        listing.files.sort();
        listing.dirs.sort();
        Ok(listing)
    }
}

/// Append `path` unless its relative path is ignored; returns whether it was added.
fn push_unless_ignored(
    root: &Path,
    path: PathBuf,
    ignore: &IgnoreList,
    plan: &mut StowPlan,
) -> bool {
    let Ok(relative) = path.strip_prefix(root).map(Path::to_path_buf) else {
        return false;
    };
    if relative.as_os_str().is_empty() || ignore.is_ignored(&relative.to_string_lossy()) {
        return false;
    }
    plan.entries.push(StowEntry {
        source: path,
        relative,
    });
    true
}

fn is_real_dir(path: &Path) -> bool {
    path.symlink_metadata()
        .map(|m| m.is_dir() && !m.file_type().is_symlink())
        .unwrap_or(false)
}
