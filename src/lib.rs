//! Unified local/remote logging facade.
//!
//! `logbridge` sits between application code and two sinks: a local text-log
//! sink (console output via `tracing` by default) and a remote error-tracking
//! service (Sentry). A [`Logger`] handle is configured once at startup and
//! then shared; every leveled call writes a prefixed line locally and, per
//! the configured policy, forwards the event to the remote sink. A tower
//! [`CrashReportLayer`] reports panics that escape a request handler before
//! re-raising them.

pub mod error;
pub mod facade;
pub mod level;
pub mod middleware;
pub mod options;
pub mod sinks;

pub use error::{AdHocError, ConfigError, NotInitialized};
pub use facade::Logger;
pub use level::Level;
pub use middleware::CrashReportLayer;
pub use options::LoggerOptions;
