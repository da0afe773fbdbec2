//! JSON file store.
//!
//! The chart is kept as a single document holding the ordered account
//! sequence. Saves write a sibling temp file and rename it over the target so
//! a crash never leaves a half-written chart behind.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chartree_core::{Account, ChartOfAccounts};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::StoreError;

/// Format version written by this build.
pub const FORMAT_VERSION: u32 = 1;

/// On-disk chart document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredChart {
    /// Format version.
    pub version: u32,
    /// When the document was written.
    pub saved_at: DateTime<Utc>,
    /// Accounts in chart order.
    #[serde(default)]
    pub accounts: Vec<Account>,
}

/// Loads and saves a chart from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the chart. A missing file yields an empty chart.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, was written by
    /// another format version, or its records do not form a valid chart.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<ChartOfAccounts, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("Chart file not found, starting empty");
                return Ok(ChartOfAccounts::new());
            }
            Err(source) => return Err(self.io_error(source)),
        };

        let stored: StoredChart =
            serde_json::from_str(&raw).map_err(|source| StoreError::Serialization {
                path: self.path.clone(),
                source,
            })?;

        if stored.version != FORMAT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: stored.version,
                expected: FORMAT_VERSION,
            });
        }

        let chart = ChartOfAccounts::from_accounts(stored.accounts)?;
        debug!(accounts = chart.len(), "Chart loaded");
        Ok(chart)
    }

    /// Saves the chart, replacing the file atomically.
    ///
    /// The temp file is removed again when the rename fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or its directory cannot be written.
    #[instrument(skip(self, chart), fields(path = %self.path.display(), accounts = chart.len()))]
    pub fn save(&self, chart: &ChartOfAccounts) -> Result<(), StoreError> {
        let stored = StoredChart {
            version: FORMAT_VERSION,
            saved_at: Utc::now(),
            accounts: chart.accounts().to_vec(),
        };
        let body =
            serde_json::to_string_pretty(&stored).map_err(|source| StoreError::Serialization {
                path: self.path.clone(),
                source,
            })?;

        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|source| self.io_error(source))?;
        }

        let tmp = self.temp_path();
        fs::write(&tmp, body).map_err(|source| self.io_error(source))?;
        if let Err(source) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(self.io_error(source));
        }

        info!("Chart saved");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
