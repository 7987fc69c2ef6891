//! GlyphLog Core - Console log facility with severity glyphs
//!
//! This crate provides the log facility itself:
//! - `Logger` with one parameterized emission operation plus per-severity
//!   convenience methods
//! - Explicit `LogConfig` (no ambient global state), with environment
//!   overrides
//! - `Sink` abstraction with stdout, no-op, and test-capture
//!   implementations
//! - Call-site capture macros (`log_e!` through `log_s!`)
//!
//! Emission is total: it never fails, never blocks, and is a complete
//! no-op when the configured enabled flag is false.
//!
//! # Usage
//!
//! ```rust
//! use glyphlog_core::{log_i, LogConfig, Logger};
//!
//! let logger = Logger::new(LogConfig::default());
//! log_i!(logger, "application started");
//! ```

pub mod config;
pub mod errors;
pub mod facility;
pub mod macros;
pub mod record;
pub mod sink;
pub mod test_capture;

// Re-export commonly used types
pub use config::LogConfig;
pub use errors::{ConfigError, Result};
pub use facility::Logger;
pub use glyphlog_core_types::{schema, Severity, SourceLocation};
pub use record::LogRecord;
pub use sink::{NoopSink, Sink, StdoutSink};
pub use test_capture::CaptureSink;
