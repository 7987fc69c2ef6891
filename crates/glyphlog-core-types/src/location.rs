//! Call-site metadata carried with every emission
//!
//! A `SourceLocation` names where in the host program a log call happened.
//! The column is captured for call-site fidelity but is not part of the
//! rendered output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source location of a log call
///
/// # Example
///
/// ```
/// use glyphlog_core_types::SourceLocation;
///
/// let loc = SourceLocation::new("/src/App/Main.ext", 42, 5, "run");
/// assert_eq!(loc.short_file_name(), "Main.ext");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    file: String,
    line: u32,
    column: u32,
    function: String,
}

impl SourceLocation {
    /// Create a location from explicit call-site values
    pub fn new(
        file: impl Into<String>,
        line: u32,
        column: u32,
        function: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            column,
            function: function.into(),
        }
    }

    /// Full file path as supplied by the caller
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Line number within the file
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column number within the line (carried, never rendered)
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Name of the enclosing function
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Final path segment of the file, for compact display
    ///
    /// Returns the text after the last `/`, the whole string when no
    /// separator is present, and an empty string for an empty path.
    pub fn short_file_name(&self) -> &str {
        match self.file.rfind('/') {
            Some(idx) => &self.file[idx + 1..],
            None => &self.file,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.short_file_name(), self.line, self.function)
    }
}
