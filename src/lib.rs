//! Hello-log library.
//!
//! # Architecture Overview
//!
//! ```text
//!   main ──▶ config (LoggingConfig defaults)
//!     │
//!     ├──▶ observability::logging::init  (install subscriber once)
//!     │
//!     └──▶ greeting::greet  ──▶  DEBUG:hello_log::greeting:Hello, World!  ──▶ stderr
//!
//!   collections   GrowableArray, DoublyLinkedList, RingBuffer
//!   algorithms    binary_search, bubble_sort
//! ```

pub mod algorithms;
pub mod collections;
pub mod config;
pub mod greeting;
pub mod observability;

pub use collections::{CollectionError, CollectionResult};
pub use config::{AppConfig, LoggingConfig};
pub use greeting::greet;
