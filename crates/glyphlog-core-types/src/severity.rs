//! Severity taxonomy and its fixed display symbols
//!
//! The six levels form a closed set; each maps 1:1 to a short bracketed
//! glyph that prefixes the message segment of every emitted line. The
//! mapping is defined here once and never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Log severity level
///
/// Every variant has exactly one display symbol, returned by
/// [`Severity::symbol`]. The symbol is always rendered when a line is
/// emitted, regardless of configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Recoverable errors
    Error,
    /// General information
    Info,
    /// Debugging detail
    Debug,
    /// High-volume tracing detail
    Verbose,
    /// Suspicious but non-fatal conditions
    Warning,
    /// Unrecoverable or data-loss conditions
    Severe,
}

impl Severity {
    /// All severities, in taxonomy order
    pub const ALL: [Severity; 6] = [
        Severity::Error,
        Severity::Info,
        Severity::Debug,
        Severity::Verbose,
        Severity::Warning,
        Severity::Severe,
    ];

    /// The fixed display symbol for this severity
    pub const fn symbol(self) -> &'static str {
        match self {
            Severity::Error => "[‼️]",
            Severity::Info => "[ℹ️]",
            Severity::Debug => "[💬]",
            Severity::Verbose => "[🔬]",
            Severity::Warning => "[⚠️]",
            Severity::Severe => "[🔥]",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
