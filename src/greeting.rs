//! The greeting record.

/// The literal message carried by the greeting record.
pub const GREETING: &str = "Hello, World!";

/// Emit exactly one DEBUG record whose message is [`GREETING`].
///
/// The record's target is this module's path. Whether it reaches a sink is
/// decided by the installed subscriber's threshold.
pub fn greet() {
    tracing::debug!("{}", GREETING);
}
