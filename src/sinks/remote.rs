//! Remote telemetry sink.
//!
//! # Design Decisions
//! - Establishment failures surface at configure time; transport failures
//!   afterwards stay inside the client (no retry or queuing here)
//! - The Sentry init guard lives as long as the sink, so replacing the
//!   configuration flushes and closes the previous client

use sentry::types::Dsn;
use sentry::ClientInitGuard;

use crate::error::ConfigError;
use crate::level::Level;
use crate::options::LoggerOptions;

/// Remote error/event-tracking collaborator.
pub trait RemoteSink: Send + Sync {
    /// Record a leveled, fully formatted message event.
    fn capture_message(&self, level: Level, text: &str);

    /// Record an error value as a structured exception event.
    fn capture_error(&self, err: &dyn std::error::Error);

    /// Record a panic observed by the crash-report middleware.
    fn capture_panic(&self, payload: &str);
}

/// Production [`RemoteSink`] backed by the Sentry client.
pub struct SentrySink {
    _guard: ClientInitGuard,
}

impl SentrySink {
    /// Parse the DSN and initialize the Sentry client. Stack traces are
    /// attached to every captured error; the client's own debug output
    /// stays off so it never echoes into the local log.
    pub fn establish(options: &LoggerOptions) -> Result<Self, ConfigError> {
        let dsn: Dsn = options
            .remote_endpoint
            .parse()
            .map_err(ConfigError::InvalidEndpoint)?;

        let guard = sentry::init(sentry::ClientOptions {
            dsn: Some(dsn),
            environment: Some(options.remote_environment.clone().into()),
            release: Some(options.module_name.clone().into()),
            traces_sample_rate: options.remote_sample_rate,
            attach_stacktrace: true,
            debug: false,
            ..Default::default()
        });

        Ok(Self { _guard: guard })
    }
}

impl RemoteSink for SentrySink {
    fn capture_message(&self, level: Level, text: &str) {
        sentry::capture_message(text, level.into());
    }

    fn capture_error(&self, err: &dyn std::error::Error) {
        sentry::capture_error(err);
    }

    fn capture_panic(&self, payload: &str) {
        sentry::capture_message(&format!("panic: {payload}"), sentry::Level::Fatal);
    }
}

impl From<Level> for sentry::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Debug => sentry::Level::Debug,
            Level::Info => sentry::Level::Info,
            Level::Warning => sentry::Level::Warning,
            Level::Error => sentry::Level::Error,
        }
    }
}
