//! Link materialization: apply a plan to the target directory.
//!
//! Entries are processed strictly in plan order.  A failing entry is
//! reported as [`LinkOutcome::Failed`] and never stops the remaining ones.
use std::path::Path;

use crate::logging::Log;
use crate::operations::{LinkOps, SystemLinkOps};
use crate::plan::{StowEntry, StowPlan};
use crate::resources::link::LinkResource;
use crate::resources::{LinkOutcome, SkipReason};

/// Materialize `plan` under `target_root` using the real filesystem.
///
/// Returns one outcome per entry, in plan order.
#[must_use]
pub fn materialize(
    target_root: &Path,
    dry_run: bool,
    plan: &StowPlan,
    log: &dyn Log,
) -> Vec<LinkOutcome> {
    Materializer::new(&SystemLinkOps, log).run(target_root, dry_run, plan)
}

/// Applies plan entries through an injectable [`LinkOps`].
pub struct Materializer<'a> {
    ops: &'a dyn LinkOps,
    log: &'a dyn Log,
}

impl std::fmt::Debug for Materializer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Materializer")
            .field("ops", &self.ops)
            .field("log", &"<dyn Log>")
            .finish()
    }
}

impl<'a> Materializer<'a> {
    /// Create a materializer that links with `ops` and reports to `log`.
    #[must_use]
    pub const fn new(ops: &'a dyn LinkOps, log: &'a dyn Log) -> Self {
        Self { ops, log }
    }

    /// Process every entry of `plan`, returning one outcome per entry.
    #[must_use]
    pub fn run(&self, target_root: &Path, dry_run: bool, plan: &StowPlan) -> Vec<LinkOutcome> {
        plan.iter()
            .map(|entry| self.entry(target_root, dry_run, entry))
            .collect()
    }

    /// Process a single entry and report its outcome.
    #[must_use]
    pub fn entry(&self, target_root: &Path, dry_run: bool, entry: &StowEntry) -> LinkOutcome {
        let resource = LinkResource::new(entry.source.clone(), entry.destination(target_root));

        if dry_run {
            self.log
                .dry_run(&format!("would link {}", resource.description()));
            return LinkOutcome::Skipped(SkipReason::DryRun);
        }

        let outcome = resource
            .apply(self.ops, self.log)
            .unwrap_or_else(|e| LinkOutcome::Failed {
                reason: format!("{e:#}"),
            });
        self.report(&resource, &outcome);
        outcome
    }

    fn report(&self, resource: &LinkResource, outcome: &LinkOutcome) {
        let desc = resource.description();
        match outcome {
            LinkOutcome::Symlink => self.log.success(&format!("linked {desc}")),
            LinkOutcome::HardLink => self
                .log
                .success(&format!("hard-linked {desc} (symlinks unavailable)")),
            LinkOutcome::Copy => self
                .log
                .success(&format!("copied {desc} (symlinks unavailable)")),
            LinkOutcome::Skipped(SkipReason::ProvidedByParent) => self.log.debug(&format!(
                "already provided by a linked parent: {}",
                resource.destination.display()
            )),
            LinkOutcome::Skipped(SkipReason::DryRun) => {}
            LinkOutcome::Failed { reason } => self.log.error(&format!(
                "cannot link {}: {reason}",
                resource.source.display()
            )),
        }
    }
}
