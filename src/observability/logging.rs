//! Logging setup.
//!
//! Builds the process-wide subscriber from [`LoggingConfig`]: an
//! `EnvFilter` parsed from the configured threshold (never from
//! `RUST_LOG`), and a fmt layer rendering [`LevelTargetFormat`] lines to
//! stderr. The global subscriber can be installed once.

use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::filter::{LevelFilter, ParseError};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::observability::format::LevelTargetFormat;

/// Errors raised while setting up logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// A bare directive that names no level.
    #[error("unknown log level '{0}' (expected trace, debug, info, warn, error or off)")]
    UnknownLevel(String),

    /// The threshold is not a valid filter directive.
    #[error("invalid log level '{level}': {source}")]
    InvalidLevel {
        level: String,
        #[source]
        source: ParseError,
    },

    /// A global subscriber is already installed.
    #[error("logging already initialized: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Parse a threshold into a filter.
///
/// `EnvFilter` reads a bare word as a target name, so a misspelled level
/// would silently disable everything else. Bare directives (no `=`, no
/// `::`) must therefore be level names.
pub fn parse_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    let level = level.trim();

    let unknown = level
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty() && !d.contains('=') && !d.contains("::"))
        .find(|d| d.parse::<LevelFilter>().is_err());
    if let Some(word) = unknown {
        return Err(LoggingError::UnknownLevel(word.to_string()));
    }

    EnvFilter::builder()
        .parse(level)
        .map_err(|source| LoggingError::InvalidLevel {
            level: level.to_string(),
            source,
        })
}

/// Build a subscriber for `config` that writes to `make_writer`, without
/// installing it.
pub fn subscriber<W>(
    config: &LoggingConfig,
    make_writer: W,
) -> Result<impl Subscriber + Send + Sync + 'static, LoggingError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = parse_filter(&config.level)?;

    Ok(tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_ansi(false)
            .event_format(LevelTargetFormat)
            .with_writer(make_writer),
    ))
}

/// Install the global stderr subscriber described by `config`.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    subscriber(config, std::io::stderr)?.try_init()?;
    Ok(())
}
