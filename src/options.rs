//! Logger configuration record.
//!
//! All fields have defaults so a minimal config stays minimal; the record
//! derives Serde traits so it can be embedded in a service's config file.
//! Syntactic checks are serde's job, semantic checks live in `validate`.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::level::Level;

/// Configuration for a [`Logger`](crate::Logger). Immutable once published;
/// changes require a fresh `configure` call which replaces the whole record.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LoggerOptions {
    /// Identifier of the emitting service, sent to the remote sink as the
    /// release tag.
    pub module_name: String,

    /// Master gate for all remote forwarding.
    pub remote_enabled: bool,

    /// Remote sink DSN. Opaque to the facade beyond parsing at establish
    /// time.
    pub remote_endpoint: String,

    /// Environment tag (e.g. "production", "staging") attached to every
    /// forwarded event.
    pub remote_environment: String,

    /// Minimum severity forwarded to the remote sink as a message event.
    /// Errors bypass this threshold. Default `Debug` forwards everything.
    pub remote_min_severity: Level,

    /// Fraction of traced operations the remote sink records, in 0.0..=1.0.
    pub remote_sample_rate: f32,
}

impl LoggerOptions {
    /// Semantic validation, run before the record is published.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.remote_sample_rate) {
            return Err(ConfigError::InvalidSampleRate(self.remote_sample_rate));
        }
        Ok(())
    }
}
