//! Tracing subscriber setup: console formatter, run log file, and initialisation.
use std::fs;
use std::io::Write as _;
use std::path::Path;
use std::sync::Mutex;

use super::types::Level;
use super::utils::{log_file_path, utc_now};
use crate::cli::VERSION;

/// Environment variable that overrides the console filter (`EnvFilter` syntax).
const LOG_ENV: &str = "DOTSTOW_LOG";

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
struct MessageExtractor {
    message: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            value.clone_into(&mut self.message);
        }
    }
}

/// Recover the [`Level`] a [`Logger`](super::Logger) event was emitted with.
fn classify(event: &tracing::Event<'_>) -> (Level, String) {
    let metadata = event.metadata();
    let level = match (*metadata.level(), metadata.target()) {
        (tracing::Level::ERROR, _) => Level::Error,
        (tracing::Level::WARN, _) => Level::Warn,
        (tracing::Level::INFO, "dotstow::stage") => Level::Stage,
        (tracing::Level::INFO, "dotstow::success") => Level::Success,
        (tracing::Level::INFO, "dotstow::dry_run") => Level::DryRun,
        (tracing::Level::INFO, _) => Level::Info,
        _ => Level::Debug,
    };
    let mut extractor = MessageExtractor::default();
    event.record(&mut extractor);
    (level, extractor.message)
}

/// Render one run-log line: `[HH:MM:SS] <tag> message`.
fn file_line(time: &str, level: Level, msg: &str) -> String {
    let tag = match level {
        Level::Stage => return format!("[{time}] ==> {msg}"),
        Level::Info => "",
        Level::Success => "[ok] ",
        Level::DryRun => "[dry run] ",
        Level::Error => "[error] ",
        Level::Warn => "[warn] ",
        Level::Debug => "[debug] ",
    };
    format!("[{time}]     {tag}{msg}")
}

/// A [`tracing_subscriber::Layer`] that records one stow run in a plain-text
/// log file, one timestamped line per event.
#[derive(Debug)]
pub(super) struct RunLog {
    file: Mutex<fs::File>,
}

impl RunLog {
    /// Open `<log dir>/<command>.log`, creating the directory if needed.
    ///
    /// Returns `None` if no log directory can be determined or created.
    pub(super) fn new(command: &str) -> Option<Self> {
        let path = log_file_path(command)?;
        fs::create_dir_all(path.parent()?).ok()?;
        Self::at(&path, command)
    }

    /// Replace `path` with a fresh run header and open it for appending.
    pub(super) fn at(path: &Path, command: &str) -> Option<Self> {
        let header = format!(
            "# dotstow {VERSION} {command} run started {} UTC\n",
            utc_now("%Y-%m-%d %H:%M:%S"),
        );
        fs::write(path, header).ok()?;
        let file = fs::OpenOptions::new().append(true).open(path).ok()?;
        Some(Self {
            file: Mutex::new(file),
        })
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for RunLog {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let (level, msg) = classify(event);
        let line = file_line(&utc_now("%H:%M:%S"), level, &msg);
        if let Ok(mut f) = self.file.lock() {
            writeln!(f, "{line}").ok();
        }
    }
}

/// A [`tracing_subscriber::fmt::FormatEvent`] that emits dotstow-style
/// console output.
struct StowFormatter;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for StowFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let (level, msg) = classify(event);
        match level {
            Level::Error => writeln!(writer, "\x1b[31mERROR\x1b[0m {msg}"),
            Level::Warn => writeln!(writer, "\x1b[33mWARN\x1b[0m  {msg}"),
            Level::Stage => writeln!(writer, "\x1b[1;34m==>\x1b[0m \x1b[1m{msg}\x1b[0m"),
            Level::Success => writeln!(writer, "  \x1b[32m✓\x1b[0m {msg}"),
            Level::DryRun => writeln!(writer, "  \x1b[33m[DRY RUN]\x1b[0m {msg}"),
            Level::Info => writeln!(writer, "  {msg}"),
            Level::Debug => writeln!(writer, "  \x1b[2m{msg}\x1b[0m"),
        }
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// The console shows `info` and above (`debug` with `verbose`), unless
/// `DOTSTOW_LOG` supplies an explicit filter.  Warnings and errors go to
/// stderr, everything else to stdout.  Every event at `debug` and above is
/// also recorded in `$XDG_CACHE_HOME/dotstow/<command>.log`.
/// Must be called once at program startup, before any logging.
pub fn init_subscriber(verbose: bool, command: &str) {
    use tracing_subscriber::fmt::writer::MakeWriterExt as _;
    use tracing_subscriber::{
        EnvFilter, Layer as _, filter::LevelFilter, fmt, layer::SubscriberExt as _,
        util::SubscriberInitExt as _,
    };

    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let console_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::default().add_directive(default_level.into()));

    let make_writer = std::io::stderr
        .with_max_level(tracing::Level::WARN)
        .and(std::io::stdout.with_min_level(tracing::Level::INFO));

    let console_layer = fmt::layer()
        .event_format(StowFormatter)
        .with_writer(make_writer)
        .with_filter(console_filter);

    let run_log = RunLog::new(command).map(|l| l.with_filter(LevelFilter::DEBUG));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(run_log)
        .init();
}
