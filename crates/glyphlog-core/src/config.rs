//! Log facility configuration
//!
//! Configuration is an explicit value handed to the logger at
//! construction rather than ambient process-wide state. The enabled flag
//! is a runtime boolean whose default follows the build mode, so debug
//! builds log and release builds stay silent unless the host overrides
//! it.

use crate::errors::{ConfigError, Result};
use chrono::format::{Item, StrftimeItems};
use glyphlog_core_types::schema;
use serde::{Deserialize, Serialize};

/// Configuration read by every emission call
///
/// # Example
///
/// ```
/// use glyphlog_core::LogConfig;
///
/// let config = LogConfig::default()
///     .with_enabled(true)
///     .with_show_timestamp(true)
///     .with_timestamp_pattern("%H:%M:%S")
///     .unwrap();
/// assert!(config.show_timestamp);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// strftime pattern used when the timestamp prefix is shown
    pub timestamp_pattern: String,
    /// Whether to prepend a timestamp to each emitted line
    pub show_timestamp: bool,
    /// Sole gate on emission; false makes every call a no-op
    pub enabled: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            timestamp_pattern: schema::DEFAULT_TIMESTAMP_PATTERN.to_string(),
            show_timestamp: false,
            enabled: cfg!(debug_assertions),
        }
    }
}

impl LogConfig {
    /// Set the enabled flag
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set timestamp visibility
    pub fn with_show_timestamp(mut self, show: bool) -> Self {
        self.show_timestamp = show;
        self
    }

    /// Set the timestamp pattern, validating it up front
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimestampPattern`] when the pattern
    /// contains a specifier chrono does not recognize. A config built
    /// directly with a bad pattern still cannot make emission fail; the
    /// renderer falls back to the default pattern.
    pub fn with_timestamp_pattern(mut self, pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if !pattern_is_valid(&pattern) {
            return Err(ConfigError::InvalidTimestampPattern { pattern });
        }
        self.timestamp_pattern = pattern;
        Ok(self)
    }

    /// Build a config from the process environment over the defaults
    ///
    /// Reads `GLYPHLOG_ENABLED`, `GLYPHLOG_SHOW_TIMESTAMP` (both
    /// accepting `1`/`0`/`true`/`false`, case-insensitive) and
    /// `GLYPHLOG_TIMESTAMP_PATTERN`. Unset or unparsable booleans keep
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimestampPattern`] when the pattern
    /// variable is set but does not parse.
    ///
    /// # Example
    ///
    /// ```
    /// use glyphlog_core::LogConfig;
    ///
    /// let config = LogConfig::from_env().unwrap_or_default();
    /// ```
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Some(enabled) = env_bool(schema::ENV_ENABLED) {
            config.enabled = enabled;
        }
        if let Some(show) = env_bool(schema::ENV_SHOW_TIMESTAMP) {
            config.show_timestamp = show;
        }
        if let Ok(pattern) = std::env::var(schema::ENV_TIMESTAMP_PATTERN) {
            config = config.with_timestamp_pattern(pattern)?;
        }
        Ok(config)
    }
}

/// Check a strftime pattern for unrecognized specifiers
pub(crate) fn pattern_is_valid(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

fn env_bool(key: &str) -> Option<bool> {
    let value = std::env::var(key).ok()?;
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LogConfig::default();
        assert_eq!(config.timestamp_pattern, schema::DEFAULT_TIMESTAMP_PATTERN);
        assert!(!config.show_timestamp);
        assert_eq!(config.enabled, cfg!(debug_assertions));
    }

    #[test]
    fn test_builders() {
        let config = LogConfig::default()
            .with_enabled(true)
            .with_show_timestamp(true);
        assert!(config.enabled);
        assert!(config.show_timestamp);
    }

    #[test]
    fn test_valid_pattern_accepted() {
        let config = LogConfig::default()
            .with_timestamp_pattern("%H:%M:%S")
            .unwrap();
        assert_eq!(config.timestamp_pattern, "%H:%M:%S");
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = LogConfig::default()
            .with_timestamp_pattern("%Q")
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidTimestampPattern {
                pattern: "%Q".to_string()
            }
        );
    }

    #[test]
    fn test_default_pattern_is_valid() {
        assert!(pattern_is_valid(schema::DEFAULT_TIMESTAMP_PATTERN));
    }

    #[test]
    fn test_pattern_without_specifiers_is_valid() {
        assert!(pattern_is_valid("plain text"));
        assert!(pattern_is_valid(""));
    }

    #[test]
    fn test_serialization() {
        let config = LogConfig::default().with_enabled(true);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: LogConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
