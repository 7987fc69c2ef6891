//! Ephemeral log record
//!
//! A record is built per emission call, consumed by the formatter, and
//! discarded. It has no lifecycle beyond the single call that created it.

use chrono::{DateTime, Local};
use glyphlog_core_types::{Severity, SourceLocation};

/// One log call's worth of data, ready for formatting
///
/// The timestamp is present only when the configuration asked for a
/// timestamp prefix; a suppressed call never builds a record at all.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub severity: Severity,
    pub message: String,
    pub location: SourceLocation,
    pub timestamp: Option<DateTime<Local>>,
}

impl LogRecord {
    /// Assemble a record from an emission call's inputs
    pub fn new(
        severity: Severity,
        message: String,
        location: SourceLocation,
        timestamp: Option<DateTime<Local>>,
    ) -> Self {
        Self {
            severity,
            message,
            location,
            timestamp,
        }
    }
}
