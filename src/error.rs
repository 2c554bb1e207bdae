//! Error definitions.

use thiserror::Error;

/// Errors surfaced by [`Logger::configure`](crate::Logger::configure). The
/// caller decides whether a failed remote establishment aborts startup; the
/// facade stays unconfigured either way.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The remote endpoint string could not be parsed as a DSN.
    #[error("invalid remote endpoint: {0}")]
    InvalidEndpoint(#[source] sentry::types::ParseDsnError),

    /// Sample rate outside the accepted range.
    #[error("remote sample rate must be within 0.0..=1.0, got {0}")]
    InvalidSampleRate(f32),
}

/// A precondition-guarded accessor was called before `configure`.
#[derive(Debug, Error)]
#[error("logger used before configure()")]
pub struct NotInitialized;

/// Free-text error for the `errorf!` path, so a formatted message can flow
/// through the exception-capture pipeline like any other error value.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct AdHocError(String);

impl AdHocError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidSampleRate(1.5);
        assert!(err.to_string().contains("1.5"));

        let err = AdHocError::new("disk full");
        assert_eq!(err.to_string(), "disk full");
    }
}
