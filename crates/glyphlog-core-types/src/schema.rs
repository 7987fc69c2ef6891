//! Canonical format literals and configuration keys
//!
//! These constants pin down the parts of the output format that must stay
//! byte-for-byte stable across releases.

/// Text placed immediately before the line number in the location segment.
///
/// Fixed literal inherited from the format's original authors; its exact
/// bytes are part of the output contract and must not be localized.
pub const LINE_MARKER_PREFIX: &str = "第";

/// Text placed immediately after the line number in the location segment.
pub const LINE_MARKER_SUFFIX: &str = "行";

/// Default strftime pattern for the timestamp prefix.
///
/// Equivalent to the original `yyyy-MM-dd hh:mm:ssSSS`: date, 12-hour
/// clock, seconds followed directly by milliseconds.
pub const DEFAULT_TIMESTAMP_PATTERN: &str = "%Y-%m-%d %I:%M:%S%3f";

// Environment keys read by LogConfig::from_env
pub const ENV_ENABLED: &str = "GLYPHLOG_ENABLED";
pub const ENV_SHOW_TIMESTAMP: &str = "GLYPHLOG_SHOW_TIMESTAMP";
pub const ENV_TIMESTAMP_PATTERN: &str = "GLYPHLOG_TIMESTAMP_PATTERN";
