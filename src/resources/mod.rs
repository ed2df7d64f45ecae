//! Link resources and their materialization outcomes.
pub mod helpers;
pub mod link;

use std::fmt;

/// Why an entry was reported without being linked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Dry run: the link was only described.
    DryRun,
    /// The destination is already reachable through a directory linked
    /// earlier in the same plan; replacing it would delete the source.
    ProvidedByParent,
}

/// Result of materializing one plan entry.
///
/// # Examples
///
/// ```
/// use dotstow::resources::{LinkOutcome, SkipReason};
///
/// let outcome = LinkOutcome::Skipped(SkipReason::DryRun);
/// assert!(!outcome.is_linked());
/// assert!(LinkOutcome::HardLink.is_linked());
/// assert_eq!(LinkOutcome::Copy.to_string(), "copy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// A symbolic link now points at the source.
    Symlink,
    /// Symlinks are unavailable; the file was hard-linked instead.
    HardLink,
    /// Symlinks are unavailable; the content was copied instead.
    Copy,
    /// Nothing was changed.
    Skipped(SkipReason),
    /// The entry could not be materialized.
    Failed {
        /// Error chain describing the failure.
        reason: String,
    },
}

impl LinkOutcome {
    /// Return `true` if the destination now provides the source content.
    #[must_use]
    pub const fn is_linked(&self) -> bool {
        matches!(self, Self::Symlink | Self::HardLink | Self::Copy)
    }

    /// Return `true` for [`LinkOutcome::Failed`].
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl fmt::Display for LinkOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symlink => write!(f, "symlink"),
            Self::HardLink => write!(f, "hardlink"),
            Self::Copy => write!(f, "copy"),
            Self::Skipped(_) => write!(f, "skipped"),
            Self::Failed { .. } => write!(f, "failed"),
        }
    }
}
