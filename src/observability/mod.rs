//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! tracing::debug!(..)
//!     → EnvFilter (threshold from LoggingConfig)
//!     → fmt layer + format.rs (LEVEL:target:message)
//!     → stderr
//! ```

pub mod format;
pub mod logging;

pub use format::LevelTargetFormat;
pub use logging::{init, parse_filter, subscriber, LoggingError};
