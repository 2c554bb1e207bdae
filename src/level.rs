//! Severity levels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered severity level. The ordering is only consulted for the remote
/// forwarding threshold; local lines are written at every level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Debug,
    Info,
    Warning,
    Error,
}

impl Level {
    /// Prefix used for local log lines ("Debug: ...", "Info: ...", etc.).
    pub fn prefix(&self) -> &'static str {
        match self {
            Level::Debug => "Debug",
            Level::Info => "Info",
            Level::Warning => "Warning",
            Level::Error => "Error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
    }

    #[test]
    fn test_level_display() {
        assert_eq!(Level::Debug.to_string(), "Debug");
        assert_eq!(Level::Warning.to_string(), "Warning");
    }

    #[test]
    fn test_level_serde_lowercase() {
        let level: Level = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(level, Level::Warning);
        assert_eq!(serde_json::to_string(&Level::Error).unwrap(), "\"error\"");
    }
}
