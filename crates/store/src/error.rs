//! Store error types.

use std::path::PathBuf;

use chartree_core::ChartError;
use chartree_shared::AppError;
use thiserror::Error;

/// Errors raised while loading or saving a chart.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid chart document.
    #[error("Invalid chart file {path}: {source}")]
    Serialization {
        /// File being parsed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// The file was written by an unknown format version.
    #[error("Unsupported chart file version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the file.
        found: u32,
        /// Version this build writes.
        expected: u32,
    },

    /// The stored accounts break a chart invariant.
    #[error("Corrupt chart file: {0}")]
    Corrupt(#[from] ChartError),
}

impl StoreError {
    /// Returns the machine-readable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "STORE_IO",
            Self::Serialization { .. } => "STORE_SERIALIZATION",
            Self::UnsupportedVersion { .. } => "STORE_UNSUPPORTED_VERSION",
            Self::Corrupt(_) => "STORE_CORRUPT",
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = StoreError::UnsupportedVersion {
            found: 7,
            expected: 1,
        };
        assert_eq!(err.error_code(), "STORE_UNSUPPORTED_VERSION");
        assert_eq!(
            err.to_string(),
            "Unsupported chart file version 7 (expected 1)"
        );

        let err = StoreError::from(ChartError::DuplicateCode("1".into()));
        assert_eq!(err.error_code(), "STORE_CORRUPT");
    }

    #[test]
    fn test_app_error_mapping() {
        let app: AppError = StoreError::UnsupportedVersion {
            found: 2,
            expected: 1,
        }
        .into();
        assert_eq!(app.error_code(), "STORAGE_ERROR");
    }
}
