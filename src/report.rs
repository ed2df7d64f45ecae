//! End-of-run summary of link outcomes.
use crate::logging::Log;
use crate::resources::{LinkOutcome, SkipReason};

/// Count of each outcome class in one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Entries linked with a symbolic link.
    pub symlinked: usize,
    /// Entries hard-linked because symlinks were unavailable.
    pub hard_linked: usize,
    /// Entries copied because symlinks were unavailable.
    pub copied: usize,
    /// Entries reported by a dry run.
    pub dry_run: usize,
    /// Entries already present through a linked parent directory.
    pub provided_by_parent: usize,
    /// Entries that could not be materialized.
    pub failed: usize,
}

impl Summary {
    /// Tally `outcomes`.
    #[must_use]
    pub fn from_outcomes(outcomes: &[LinkOutcome]) -> Self {
        let mut summary = Self::default();
        for outcome in outcomes {
            match outcome {
                LinkOutcome::Symlink => summary.symlinked += 1,
                LinkOutcome::HardLink => summary.hard_linked += 1,
                LinkOutcome::Copy => summary.copied += 1,
                LinkOutcome::Skipped(SkipReason::DryRun) => summary.dry_run += 1,
                LinkOutcome::Skipped(SkipReason::ProvidedByParent) => {
                    summary.provided_by_parent += 1;
                }
                LinkOutcome::Failed { .. } => summary.failed += 1,
            }
        }
        summary
    }

    /// Total number of entries.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.symlinked
            + self.hard_linked
            + self.copied
            + self.dry_run
            + self.provided_by_parent
            + self.failed
    }

    /// One-line description of the totals.
    #[must_use]
    pub fn line(&self, dry_run: bool) -> String {
        if dry_run {
            return format!("{} entries: {} would link", self.total(), self.dry_run);
        }
        format!(
            "{} entries: {} symlinked, {} hard-linked, {} copied, {} via parent, {} failed",
            self.total(),
            self.symlinked,
            self.hard_linked,
            self.copied,
            self.provided_by_parent,
            self.failed
        )
    }

    /// Write the summary to `log`.
    pub fn log(&self, log: &dyn Log, dry_run: bool) {
        log.stage("Summary");
        let line = self.line(dry_run);
        if self.failed > 0 {
            log.warn(&line);
        } else {
            log.info(&line);
        }
    }
}
