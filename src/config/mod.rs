//! Configuration management.
//!
//! # Data Flow
//! ```text
//! TOML text / file
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//! ```
//!
//! The binary runs on `AppConfig::default()`; loading from TOML is a
//! library entry point for embedders.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{AppConfig, LoggingConfig};
pub use validation::{validate_config, ValidationError};
