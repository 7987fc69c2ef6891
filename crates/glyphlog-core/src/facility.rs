//! The log facility
//!
//! One parameterized emission operation does all the work; the
//! per-severity methods are thin delegates that preserve the familiar
//! six-entry-point surface. Emission is total: it never fails, never
//! blocks, and short-circuits before timestamp capture when disabled.

use crate::config::{pattern_is_valid, LogConfig};
use crate::record::LogRecord;
use crate::sink::{Sink, StdoutSink};
use chrono::format::StrftimeItems;
use chrono::{DateTime, Local};
use glyphlog_core_types::{schema, Severity, SourceLocation};
use std::fmt;
use std::sync::Arc;

/// Console logger with severity glyphs
///
/// Holds its configuration as an explicit value; there is no ambient
/// global state. Shareable across threads when the sink is.
///
/// # Example
///
/// ```
/// use glyphlog_core::{LogConfig, Logger, SourceLocation};
///
/// let logger = Logger::new(LogConfig::default());
/// logger.error(
///     format_args!("boom"),
///     &SourceLocation::new(file!(), line!(), column!(), "main"),
/// );
/// ```
pub struct Logger {
    config: LogConfig,
    sink: Arc<dyn Sink>,
}

impl Logger {
    /// Create a logger writing to standard output
    pub fn new(config: LogConfig) -> Self {
        Self::with_sink(config, Arc::new(StdoutSink))
    }

    /// Create a logger writing to the given sink
    pub fn with_sink(config: LogConfig, sink: Arc<dyn Sink>) -> Self {
        Self { config, sink }
    }

    /// The configuration this logger was built with
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Format and conditionally emit one line
    ///
    /// No-op when the enabled flag is false; the short-circuit happens
    /// before timestamp capture. Never fails, regardless of input.
    pub fn emit(&self, severity: Severity, args: fmt::Arguments<'_>, location: &SourceLocation) {
        if !self.config.enabled {
            return;
        }
        let timestamp = self.config.show_timestamp.then(Local::now);
        let record = LogRecord::new(severity, args.to_string(), location.clone(), timestamp);
        self.sink.write(&render(&self.config, &record));
    }

    /// Emit at [`Severity::Error`]
    pub fn error(&self, args: fmt::Arguments<'_>, location: &SourceLocation) {
        self.emit(Severity::Error, args, location);
    }

    /// Emit at [`Severity::Info`]
    pub fn info(&self, args: fmt::Arguments<'_>, location: &SourceLocation) {
        self.emit(Severity::Info, args, location);
    }

    /// Emit at [`Severity::Debug`]
    pub fn debug(&self, args: fmt::Arguments<'_>, location: &SourceLocation) {
        self.emit(Severity::Debug, args, location);
    }

    /// Emit at [`Severity::Verbose`]
    pub fn verbose(&self, args: fmt::Arguments<'_>, location: &SourceLocation) {
        self.emit(Severity::Verbose, args, location);
    }

    /// Emit at [`Severity::Warning`]
    pub fn warn(&self, args: fmt::Arguments<'_>, location: &SourceLocation) {
        self.emit(Severity::Warning, args, location);
    }

    /// Emit at [`Severity::Severe`]
    pub fn severe(&self, args: fmt::Arguments<'_>, location: &SourceLocation) {
        self.emit(Severity::Severe, args, location);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Assemble the full output line for a record
///
/// Body template, byte-for-byte:
/// ` {short} 第{line}行 {function}\n {symbol} {message} \n`
/// A timestamp, when present, is prepended before the body's leading
/// space.
fn render(config: &LogConfig, record: &LogRecord) -> String {
    let body = format!(
        " {} {}{}{} {}\n {} {} \n",
        record.location.short_file_name(),
        schema::LINE_MARKER_PREFIX,
        record.location.line(),
        schema::LINE_MARKER_SUFFIX,
        record.location.function(),
        record.severity.symbol(),
        record.message,
    );
    match record.timestamp {
        Some(ts) => format!("{}{}", render_timestamp(ts, &config.timestamp_pattern), body),
        None => body,
    }
}

/// Render a timestamp, falling back to the default pattern when the
/// configured one does not parse
///
/// The fallback keeps emission total even for a config built directly
/// with a bad pattern.
fn render_timestamp(ts: DateTime<Local>, pattern: &str) -> String {
    if !pattern_is_valid(pattern) {
        return ts.format(schema::DEFAULT_TIMESTAMP_PATTERN).to_string();
    }
    ts.format_with_items(StrftimeItems::new(pattern)).to_string()
}
