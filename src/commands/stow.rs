//! The `stow` command: resolve, plan, materialize, summarize.
use anyhow::Result;

use crate::cli::{GlobalOpts, VERSION};
use crate::config::StowConfig;
use crate::error::StowError;
use crate::logging::Log;
use crate::materialize::materialize;
use crate::plan::{StowPlan, plan};
use crate::report::Summary;
use crate::resources::LinkOutcome;

/// Run the stow command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be resolved, the ignore file
/// cannot be read, or the source root cannot be listed.  Individual link
/// failures are reported through `log` and do not produce an error.
pub fn run(global: &GlobalOpts, log: &dyn Log) -> Result<Vec<LinkOutcome>> {
    log.info(&format!("dotstow {VERSION}"));
    let config = StowConfig::from_args(global).map_err(StowError::from)?;
    Ok(execute(&config, log)?)
}

/// Plan and materialize one stow run for an already-resolved `config`.
///
/// # Errors
///
/// Returns an error if the ignore file exists but cannot be read, or if the
/// source root cannot be listed.
pub fn execute(config: &StowConfig, log: &dyn Log) -> Result<Vec<LinkOutcome>, StowError> {
    let ignore = config.ignore_list(log)?;

    log.info(&format!("Using path: {}", config.source.display()));
    log.stage("Stow configuration");
    log.info(&format!("Source Directory: {}", config.source.display()));
    log.info(&format!("Ignore List: {}", ignore.entries().join(", ")));
    log.info(&format!("Target Directory: {}", config.target.display()));
    log.info(&format!("Dry Run: {}", config.dry_run));

    let plan = plan(&config.source, &ignore, log)?;
    if plan.is_empty() {
        log.warn("No files or directories found to stow.");
        return Ok(Vec::new());
    }
    list_plan(&plan, log);

    log.stage("Stowing files");
    let outcomes = materialize(&config.target, config.dry_run, &plan, log);
    Summary::from_outcomes(&outcomes).log(log, config.dry_run);
    Ok(outcomes)
}

fn list_plan(plan: &StowPlan, log: &dyn Log) {
    log.stage("Files to stow");
    for entry in plan {
        log.info(&format!("- {}", entry.relative.display()));
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::IGNORE_FILE_NAME;
    use crate::logging::{Level, MemoryLog};
    use crate::resources::SkipReason;

    fn config(source: &std::path::Path, target: &std::path::Path, dry_run: bool) -> StowConfig {
        StowConfig::new(source, target.to_path_buf(), dry_run).unwrap()
    }

    #[test]
    fn empty_source_warns_and_links_nothing() {
        let source = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        let log = MemoryLog::new();

        let outcomes = execute(&config(source.path(), target.path(), false), &log).unwrap();

        assert!(outcomes.is_empty());
        assert!(log.contains(Level::Warn, "No files or directories found to stow."));
        assert_eq!(std::fs::read_dir(target.path()).unwrap().count(), 0);
    }

    #[test]
    fn source_with_only_ignore_file_is_empty() {
        let source = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        std::fs::write(source.path().join(IGNORE_FILE_NAME), ".git\n").unwrap();
        let log = MemoryLog::new();

        let outcomes = execute(&config(source.path(), target.path(), false), &log).unwrap();

        assert!(outcomes.is_empty());
        assert!(!target.path().join(IGNORE_FILE_NAME).exists());
    }

    #[test]
    fn logs_configuration_block() {
        let source = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        std::fs::write(source.path().join("file1.txt"), "Hello, World!").unwrap();
        let log = MemoryLog::new();

        execute(&config(source.path(), target.path(), true), &log).unwrap();

        assert!(log.contains(Level::Info, "Source Directory:"));
        assert!(log.contains(Level::Info, IGNORE_FILE_NAME));
        assert!(log.contains(Level::Info, "Target Directory:"));
        assert!(log.contains(Level::Info, "Dry Run: true"));
        assert!(log.contains(Level::Info, "- file1.txt"));
        assert!(log.contains(Level::Stage, "Summary"));
    }

    #[test]
    fn announces_source_path_before_configuration() {
        let source = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        let config = config(source.path(), target.path(), true);
        let log = MemoryLog::new();

        execute(&config, &log).unwrap();

        let messages: Vec<String> = log.records().into_iter().map(|r| r.message).collect();
        let using = format!("Using path: {}", config.source.display());
        let using_at = messages.iter().position(|m| *m == using).unwrap();
        let block_at = messages
            .iter()
            .position(|m| m == "Stow configuration")
            .unwrap();
        assert!(using_at < block_at, "{messages:?}");
    }

    #[test]
    fn dry_run_reports_every_entry() {
        let source = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        std::fs::write(source.path().join("a"), "a").unwrap();
        std::fs::write(source.path().join("b"), "b").unwrap();
        let log = MemoryLog::new();

        let outcomes = execute(&config(source.path(), target.path(), true), &log).unwrap();

        assert_eq!(outcomes, vec![LinkOutcome::Skipped(SkipReason::DryRun); 2]);
        assert_eq!(log.messages(Level::DryRun).len(), 2);
        assert!(!target.path().join("a").exists());
    }

    #[cfg(unix)]
    #[test]
    fn live_run_links_files() {
        let source = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        std::fs::write(source.path().join("file1.txt"), "Hello, World!").unwrap();
        let log = MemoryLog::new();

        let outcomes = execute(&config(source.path(), target.path(), false), &log).unwrap();

        assert_eq!(outcomes, [LinkOutcome::Symlink]);
        assert_eq!(
            std::fs::read_to_string(target.path().join("file1.txt")).unwrap(),
            "Hello, World!"
        );
    }

    #[test]
    fn run_rejects_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let global = GlobalOpts {
            dry_run: true,
            path: Some(dir.path().join("missing")),
        };

        let err = run(&global, &MemoryLog::new()).unwrap_err();

        assert!(err.to_string().contains("does not exist"));
    }
}
