//! Local text-line sink.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::level::Level;

/// Destination for fully formatted log lines. The line already carries its
/// severity prefix; the level is passed alongside so implementations can map
/// it onto their own level machinery.
pub trait LocalSink: Send + Sync {
    fn write_line(&self, level: Level, line: &str);
}

/// Default local sink: emits each line as a `tracing` event at the matching
/// level. Pair with [`init_tracing`] (or the host application's own
/// subscriber setup) to get console output.
#[derive(Debug, Default)]
pub struct TracingSink;

impl LocalSink for TracingSink {
    fn write_line(&self, level: Level, line: &str) {
        match level {
            Level::Debug => tracing::debug!("{line}"),
            Level::Info => tracing::info!("{line}"),
            Level::Warning => tracing::warn!("{line}"),
            Level::Error => tracing::error!("{line}"),
        }
    }
}

/// Install a fmt subscriber filtered from `RUST_LOG`, falling back to
/// `default_filter`. Call once, early in `main`.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
