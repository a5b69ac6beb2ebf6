//! Configuration validation.
//!
//! Serde handles syntax; this pass checks values. All errors are
//! collected, not just the first.

use thiserror::Error;
use crate::config::schema::AppConfig;
use crate::observability::logging::parse_filter;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `logging.level` is empty.
    #[error("logging.level must not be empty")]
    EmptyLevel,

    /// `logging.level` is not a valid filter directive.
    #[error("logging.level '{directive}' is invalid: {reason}")]
    InvalidLevel { directive: String, reason: String },
}

/// Validate a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let level = config.logging.level.trim();
    if level.is_empty() {
        errors.push(ValidationError::EmptyLevel);
    } else if let Err(e) = parse_filter(level) {
        errors.push(ValidationError::InvalidLevel {
            directive: level.to_string(),
            reason: e.to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LoggingConfig;

    fn with_level(level: &str) -> AppConfig {
        AppConfig {
            logging: LoggingConfig::with_level(level),
        }
    }

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_bare_levels_are_valid() {
        for level in ["trace", "debug", "info", "warn", "error", "off"] {
            assert!(validate_config(&with_level(level)).is_ok(), "{level}");
        }
    }

    #[test]
    fn test_target_directive_is_valid() {
        assert!(validate_config(&with_level("hello_log=debug,warn")).is_ok());
    }

    #[test]
    fn test_empty_level() {
        let errors = validate_config(&with_level("  ")).unwrap_err();
        assert_eq!(errors, vec![ValidationError::EmptyLevel]);
    }

    #[test]
    fn test_misspelled_bare_level() {
        let errors = validate_config(&with_level("debgu")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            ValidationError::InvalidLevel { directive, reason }
                if directive == "debgu" && reason.contains("unknown log level")
        ));
    }

    #[test]
    fn test_invalid_level() {
        let errors = validate_config(&with_level("hello_log=loud")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            ValidationError::InvalidLevel { directive, .. } if directive == "hello_log=loud"
        ));
    }
}
