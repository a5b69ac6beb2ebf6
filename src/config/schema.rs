//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Logging configuration. Records always go to stderr.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive: a bare level (trace, debug, info, warn, error, off)
    /// or a comma-separated list of levels and `target=level` directives.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Configuration with a different threshold.
    pub fn with_level(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
        }
    }
}
