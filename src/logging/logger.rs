//! Console/file logger backed by `tracing`.
use super::types::{Level, Log};

/// Logger that emits every message as a `tracing` event.
///
/// Stage, success, and dry-run messages use dedicated targets so the
/// console formatter and the file layer can render them differently.  The
/// logger holds no state; output destinations are decided by the subscriber
/// installed with [`init_subscriber`](super::init_subscriber).
#[derive(Debug, Default, Clone, Copy)]
pub struct Logger;

impl Logger {
    /// Create a new logger.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Log for Logger {
    fn log(&self, level: Level, msg: &str) {
        match level {
            Level::Debug => tracing::debug!("{msg}"),
            Level::Info => tracing::info!("{msg}"),
            Level::Success => tracing::info!(target: "dotstow::success", "{msg}"),
            Level::DryRun => tracing::info!(target: "dotstow::dry_run", "{msg}"),
            Level::Stage => tracing::info!(target: "dotstow::stage", "{msg}"),
            Level::Warn => tracing::warn!("{msg}"),
            Level::Error => tracing::error!("{msg}"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::SubscriberExt as _;

    /// Captures `(level, target, message)` for every event it sees.
    #[derive(Default)]
    struct CaptureLayer {
        events: Arc<Mutex<Vec<(tracing::Level, String)>>>,
    }

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for CaptureLayer {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            let meta = event.metadata();
            self.events
                .lock()
                .unwrap()
                .push((*meta.level(), meta.target().to_string()));
        }
    }

    #[test]
    fn routes_levels_to_tracing_targets() {
        let layer = CaptureLayer::default();
        let events = Arc::clone(&layer.events);
        let subscriber = tracing_subscriber::registry().with(layer);
        let _guard = tracing::subscriber::set_default(subscriber);

        let log = Logger::new();
        log.stage("stage");
        log.success("linked");
        log.dry_run("would link");
        log.warn("careful");

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 4);
        assert_eq!(events[0], (tracing::Level::INFO, "dotstow::stage".to_string()));
        assert_eq!(events[1], (tracing::Level::INFO, "dotstow::success".to_string()));
        assert_eq!(events[2], (tracing::Level::INFO, "dotstow::dry_run".to_string()));
        assert_eq!(events[3].0, tracing::Level::WARN);
    }
}
