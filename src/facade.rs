//! The logging facade.
//!
//! # Responsibilities
//! - Hold the process-wide logger configuration behind an atomic pointer
//! - Route every leveled call to the local sink, and to the remote sink
//!   according to the configured policy
//! - Hand out the crash-report middleware bound to the remote sink
//!
//! # Design Decisions
//! - The facade is an explicit handle, not a package-level global; callers
//!   construct one `Logger` and share it (typically via `Arc` or app state)
//! - Configuration is published with a single `ArcSwapOption` store, so a
//!   reader always sees a whole record and the emit path takes no lock
//! - Emitters are total: calling before `configure` degrades to local-only
//!   output with a visible marker, it never errors and never panics
//! - Only the middleware factory fails fast on misuse, because it runs once
//!   at server setup rather than on a request path

use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::error::{ConfigError, NotInitialized};
use crate::level::Level;
use crate::middleware::CrashReportLayer;
use crate::options::LoggerOptions;
use crate::sinks::{LocalSink, RemoteSink, SentrySink, TracingSink};

/// Marker prepended to local lines emitted before `configure` completes.
const UNCONFIGURED_MARKER: &str = "[unconfigured]";

struct ConfiguredState {
    options: LoggerOptions,
    /// Present only when `options.remote_enabled` held at configure time.
    remote: Option<Arc<dyn RemoteSink>>,
}

/// Dual-sink logging facade. Cheap to share behind an `Arc`; all methods
/// take `&self` and are safe to call from any number of threads or tasks.
pub struct Logger {
    state: ArcSwapOption<ConfiguredState>,
    local: Arc<dyn LocalSink>,
}

impl Logger {
    /// New unconfigured facade writing local lines through [`TracingSink`].
    pub fn new() -> Self {
        Self::with_local_sink(Arc::new(TracingSink))
    }

    /// New unconfigured facade with a caller-supplied local sink.
    pub fn with_local_sink(local: Arc<dyn LocalSink>) -> Self {
        Self {
            state: ArcSwapOption::const_empty(),
            local,
        }
    }

    /// Validate and publish `options`, establishing the Sentry client when
    /// remote forwarding is enabled.
    ///
    /// On error the facade keeps its previous state (unconfigured at
    /// startup), so emitters fall back to local-only degraded mode.
    /// Configuring again replaces the record wholesale; the previous remote
    /// client is flushed and closed when the old state drops.
    pub fn configure(&self, options: LoggerOptions) -> Result<(), ConfigError> {
        options.validate()?;
        let remote: Option<Arc<dyn RemoteSink>> = if options.remote_enabled {
            Some(Arc::new(SentrySink::establish(&options)?))
        } else {
            None
        };
        self.publish(options, remote);
        Ok(())
    }

    /// Like [`configure`](Self::configure), but with a caller-supplied
    /// remote sink instead of the Sentry client. The sink is only wired in
    /// when `options.remote_enabled` is set.
    pub fn configure_with_sink(
        &self,
        options: LoggerOptions,
        sink: Arc<dyn RemoteSink>,
    ) -> Result<(), ConfigError> {
        options.validate()?;
        let remote = options.remote_enabled.then_some(sink);
        self.publish(options, remote);
        Ok(())
    }

    fn publish(&self, options: LoggerOptions, remote: Option<Arc<dyn RemoteSink>>) {
        self.state
            .store(Some(Arc::new(ConfiguredState { options, remote })));
    }

    /// Whether remote forwarding is active. Calling before `configure` is a
    /// programmer error and yields [`NotInitialized`] rather than a silent
    /// `false`, which would mask a dead remote pipeline.
    pub fn is_remote_enabled(&self) -> Result<bool, NotInitialized> {
        let state = self.state.load();
        state
            .as_ref()
            .map(|s| s.options.remote_enabled)
            .ok_or(NotInitialized)
    }

    /// Middleware reporting panics that escape a request handler to the
    /// remote sink, then re-raising them untouched.
    ///
    /// # Panics
    ///
    /// Panics when called before `configure`, or when remote forwarding is
    /// disabled. This runs once during server setup, so misuse fails fast
    /// instead of silently dropping crash reports.
    pub fn crash_report_layer(&self) -> CrashReportLayer {
        let state = self.state.load();
        let Some(state) = state.as_ref() else {
            panic!("configure the logger before requesting the crash-report middleware");
        };
        let Some(remote) = state.remote.clone() else {
            panic!("crash-report middleware requires remote forwarding to be enabled");
        };
        CrashReportLayer::new(remote)
    }

    pub fn debug(&self, message: &str) {
        self.emit(Level::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.emit(Level::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.emit(Level::Warning, message);
    }

    /// Log an error value. Always forwarded as an exception event when
    /// remote forwarding is on; the severity threshold never applies here.
    pub fn error(&self, err: &dyn std::error::Error) {
        let state = self.state.load();
        match state.as_ref() {
            None => self.local.write_line(
                Level::Error,
                &format!("{UNCONFIGURED_MARKER} Error: {err}"),
            ),
            Some(state) => {
                if let Some(remote) = &state.remote {
                    remote.capture_error(err);
                }
                self.local.write_line(Level::Error, &format!("Error: {err}"));
            }
        }
    }

    fn emit(&self, level: Level, message: &str) {
        let state = self.state.load();
        match state.as_ref() {
            None => self
                .local
                .write_line(level, &format!("{UNCONFIGURED_MARKER} {level}: {message}")),
            Some(state) => {
                let line = format!("{level}: {message}");
                // Remote dispatch first; the local write below never
                // depends on its outcome.
                if let Some(remote) = &state.remote {
                    if level >= state.options.remote_min_severity {
                        remote.capture_message(level, &line);
                    }
                }
                self.local.write_line(level, &line);
            }
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Format-then-delegate variant of [`Logger::debug`].
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(&format!($($arg)*))
    };
}

/// Format-then-delegate variant of [`Logger::info`].
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(&format!($($arg)*))
    };
}

/// Format-then-delegate variant of [`Logger::warning`].
#[macro_export]
macro_rules! warningf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warning(&format!($($arg)*))
    };
}

/// Formats a message into an [`AdHocError`](crate::AdHocError) and logs it
/// through [`Logger::error`], so it reaches the exception-capture path.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(&$crate::AdHocError::new(format!($($arg)*)))
    };
}
