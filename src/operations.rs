//! Filesystem abstractions for dependency injection.
//!
//! The planner lists directories and the fallback chain in
//! [`resources::link`](crate::resources::link) creates links through
//! [`LinkOps`], so tests can simulate unreadable directories and platforms
//! that refuse symbolic links.  Production code uses [`SystemLinkOps`].
#![cfg_attr(test, allow(missing_docs))]
use std::io;
use std::path::{Path, PathBuf};

/// Raw OS error code reported when the process may not create symlinks.
///
/// `ERROR_PRIVILEGE_NOT_HELD` on Windows; `EPERM` on Unix, where it means the
/// filesystem does not support symlinks.
pub const SYMLINK_PRIVILEGE_ERROR: i32 = if cfg!(windows) { 1314 } else { 1 };

/// Return `true` if `err` means symlinks cannot be created here at all, as
/// opposed to an ordinary I/O failure.
#[must_use]
pub fn is_symlink_privilege_error(err: &io::Error) -> bool {
    err.raw_os_error() == Some(SYMLINK_PRIVILEGE_ERROR)
}

/// Filesystem primitives used by the planner and the fallback chain.
#[cfg_attr(test, mockall::automock)]
pub trait LinkOps: Send + Sync + std::fmt::Debug {
    /// Create a symbolic link at `link` pointing to `source`.
    ///
    /// # Errors
    ///
    /// Returns the raw I/O error so callers can detect the privilege case.
    fn symlink(&self, source: &Path, link: &Path) -> io::Result<()>;

    /// Create a hard link at `link` for the file `source`.
    ///
    /// # Errors
    ///
    /// Returns the raw I/O error from the operating system.
    fn hard_link(&self, source: &Path, link: &Path) -> io::Result<()>;

    /// List the paths of the immediate children of `dir`, in no particular
    /// order.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if `dir` or one of its entries cannot be read.
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
}

/// Production [`LinkOps`] implementation that delegates to [`std::fs`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLinkOps;

impl LinkOps for SystemLinkOps {
    fn symlink(&self, source: &Path, link: &Path) -> io::Result<()> {
        #[cfg(unix)]
        {
            std::os::unix::fs::symlink(source, link)
        }

        #[cfg(windows)]
        {
            if source.is_dir() {
                std::os::windows::fs::symlink_dir(source, link)
            } else {
                std::os::windows::fs::symlink_file(source, link)
            }
        }
    }

    fn hard_link(&self, source: &Path, link: &Path) -> io::Result<()> {
        std::fs::hard_link(source, link)
    }

    fn read_dir(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        std::fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect()
    }
}
