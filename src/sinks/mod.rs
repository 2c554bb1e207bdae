//! Sink collaborators.
//!
//! # Data Flow
//! ```text
//! Logger::debug/info/warning/error
//!     → RemoteSink (message or exception event, per policy)
//!     → LocalSink (one formatted line, always)
//!
//! CrashReportLayer
//!     → RemoteSink::capture_panic (then re-raises)
//! ```
//!
//! # Design Decisions
//! - Both sinks are traits so tests and alternate backends can be injected
//! - Production local sink emits through `tracing`
//! - Production remote sink is the Sentry client, established at configure
//!   time and closed when the configuration is replaced or dropped

pub mod local;
pub mod remote;

pub use local::{init_tracing, LocalSink, TracingSink};
pub use remote::{RemoteSink, SentrySink};
