//! In-memory capture sink for deterministic assertions
//!
//! Lives in the library proper (not behind `cfg(test)`) so host test
//! suites can capture their own log output too.

use crate::sink::Sink;
use std::sync::{Arc, Mutex};

/// Sink that collects every line in memory
///
/// Cloning shares the underlying buffer, so a test can keep one handle
/// and give another to the logger.
///
/// # Example
///
/// ```
/// use glyphlog_core::{CaptureSink, LogConfig, Logger, SourceLocation};
/// use std::sync::Arc;
///
/// let capture = CaptureSink::new();
/// let logger = Logger::with_sink(
///     LogConfig::default().with_enabled(true),
///     Arc::new(capture.clone()),
/// );
/// logger.info(format_args!("ready"), &SourceLocation::new("main.rs", 1, 1, "main"));
/// assert_eq!(capture.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured lines
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Number of captured lines
    pub fn len(&self) -> usize {
        self.lines.lock().map(|l| l.len()).unwrap_or(0)
    }

    /// Whether nothing has been captured
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all captured lines
    pub fn clear(&self) {
        self.lines.lock().map(|mut l| l.clear()).ok();
    }

    /// Count lines matching a predicate
    pub fn count_lines<F>(&self, predicate: F) -> usize
    where
        F: Fn(&str) -> bool,
    {
        self.lines().iter().filter(|l| predicate(l)).count()
    }

    /// Assert that some captured line contains the given fragment
    ///
    /// # Panics
    ///
    /// Panics if no captured line contains the fragment
    pub fn assert_line_contains(&self, fragment: &str) {
        let lines = self.lines();
        assert!(
            lines.iter().any(|l| l.contains(fragment)),
            "Expected fragment {:?} not found in {} captured lines",
            fragment,
            lines.len()
        );
    }
}

impl Sink for CaptureSink {
    fn write(&self, line: &str) {
        self.lines
            .lock()
            .map(|mut lines| lines.push(line.to_string()))
            .ok();
    }
}
