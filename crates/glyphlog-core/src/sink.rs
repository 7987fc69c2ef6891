//! Output sink abstraction
//!
//! A sink receives one fully formatted string per emission. There is no
//! framing, no return value, and no error channel; interleaving safety of
//! concurrent writes is the sink's own concern.

/// Destination for formatted log lines
///
/// Implementations must be `Send + Sync` so a logger can be shared across
/// threads.
pub trait Sink: Send + Sync {
    /// Receive one assembled line
    fn write(&self, line: &str);
}

/// Sink that prints each line to standard output
///
/// Appends a trailing newline per write, matching console `print`
/// semantics; the assembled line itself carries no trailing newline
/// beyond its own template.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write(&self, line: &str) {
        println!("{line}");
    }
}

/// Sink that discards everything
///
/// Useful for unit tests where log output would be noise, and for silent
/// operation modes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl Sink for NoopSink {
    #[inline]
    fn write(&self, _line: &str) {}
}
