use thiserror::Error;

/// Result type alias using ConfigError
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised by the configuration surface
///
/// Emission itself is total by contract and has no error taxonomy; the
/// only fallible operations are configuration setters and environment
/// loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The strftime pattern contains an unrecognized specifier
    #[error("invalid timestamp pattern: {pattern}")]
    InvalidTimestampPattern { pattern: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidTimestampPattern {
            pattern: "%Q".to_string(),
        };
        assert_eq!(format!("{}", err), "invalid timestamp pattern: %Q");
    }
}
