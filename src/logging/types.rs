//! Core logging types: severity levels and the [`Log`] trait.

/// Severity of a logged message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Diagnostic detail, shown on the console only with `--verbose`.
    Debug,
    /// Informational message.
    Info,
    /// A link (or fallback) was created.
    Success,
    /// A would-be action during a dry run.
    DryRun,
    /// A major section header.
    Stage,
    /// Recoverable problem.
    Warn,
    /// Failure of a single operation or of the whole run.
    Error,
}

/// Abstraction over logging backends.
///
/// [`Logger`](super::Logger) routes messages through `tracing`;
/// [`MemoryLog`](super::MemoryLog) keeps them in memory.  Core code takes a
/// `&dyn Log` so it stays free of console formatting.
pub trait Log: Send + Sync {
    /// Log a message at `level`.
    fn log(&self, level: Level, msg: &str);

    /// Log a stage header (major section).
    fn stage(&self, msg: &str) {
        self.log(Level::Stage, msg);
    }

    /// Log an informational message.
    fn info(&self, msg: &str) {
        self.log(Level::Info, msg);
    }

    /// Log a successful action.
    fn success(&self, msg: &str) {
        self.log(Level::Success, msg);
    }

    /// Log a debug message (may be suppressed on console).
    fn debug(&self, msg: &str) {
        self.log(Level::Debug, msg);
    }

    /// Log a warning message.
    fn warn(&self, msg: &str) {
        self.log(Level::Warn, msg);
    }

    /// Log an error message.
    fn error(&self, msg: &str) {
        self.log(Level::Error, msg);
    }

    /// Log a dry-run action message.
    fn dry_run(&self, msg: &str) {
        self.log(Level::DryRun, msg);
    }
}
