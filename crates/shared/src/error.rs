//! Application-wide error types.

use thiserror::Error;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Business rule violation.
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// Conflict (e.g., duplicate code).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Persistence error.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Returns the process exit code for this error.
    ///
    /// Follows the `sysexits.h` conventions.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::BusinessRule(_) | Self::Conflict(_) => 65,
            Self::NotFound(_) => 66,
            Self::Storage(_) => 74,
            Self::Config(_) => 78,
        }
    }

    /// Returns the machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BusinessRule(_) => "BUSINESS_RULE_VIOLATION",
            Self::Conflict(_) => "CONFLICT",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::NotFound(String::new()), 66)]
    #[case(AppError::Validation(String::new()), 65)]
    #[case(AppError::BusinessRule(String::new()), 65)]
    #[case(AppError::Conflict(String::new()), 65)]
    #[case(AppError::Storage(String::new()), 74)]
    #[case(AppError::Config(String::new()), 78)]
    fn test_exit_codes(#[case] err: AppError, #[case] expected: u8) {
        assert_eq!(err.exit_code(), expected);
    }

    #[rstest]
    #[case(AppError::NotFound(String::new()), "NOT_FOUND")]
    #[case(AppError::Validation(String::new()), "VALIDATION_ERROR")]
    #[case(AppError::BusinessRule(String::new()), "BUSINESS_RULE_VIOLATION")]
    #[case(AppError::Conflict(String::new()), "CONFLICT")]
    #[case(AppError::Storage(String::new()), "STORAGE_ERROR")]
    #[case(AppError::Config(String::new()), "CONFIG_ERROR")]
    fn test_error_codes(#[case] err: AppError, #[case] expected: &str) {
        assert_eq!(err.error_code(), expected);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::NotFound("msg".into()).to_string(),
            "Not found: msg"
        );
        assert_eq!(
            AppError::Conflict("msg".into()).to_string(),
            "Conflict: msg"
        );
        assert_eq!(
            AppError::Storage("msg".into()).to_string(),
            "Storage error: msg"
        );
    }
}
