//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then environment variables, then
//! command-line overrides applied by the CLI.

use crate::constants::{
    DEFAULT_FETCH_TIMEOUT_SECS, STATUS_BOOK_FILENAME, STATUS_BOOK_URL, env_vars,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Where the status book lives and how to obtain it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBookConfig {
    /// Local CSV file, read as-is when present
    pub source_path: PathBuf,

    /// Remote location used when the local file is missing
    pub source_url: String,

    /// Upper bound for the single download attempt, in seconds
    pub fetch_timeout_secs: u64,

    /// Download the file when it is absent (otherwise a missing file is an error)
    pub fetch_if_missing: bool,
}

impl Default for StatusBookConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(STATUS_BOOK_FILENAME),
            source_url: STATUS_BOOK_URL.to_string(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            fetch_if_missing: true,
        }
    }
}

impl StatusBookConfig {
    /// Apply overrides from an environment-like lookup
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(env_vars::SOURCE_PATH) {
            debug!("{} overrides source path: {}", env_vars::SOURCE_PATH, path);
            self.source_path = PathBuf::from(path);
        }

        if let Some(url) = lookup(env_vars::SOURCE_URL) {
            debug!("{} overrides source URL: {}", env_vars::SOURCE_URL, url);
            self.source_url = url;
        }

        if let Some(timeout) = lookup(env_vars::FETCH_TIMEOUT_SECS) {
            self.fetch_timeout_secs = timeout.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    env_vars::FETCH_TIMEOUT_SECS,
                    timeout
                ))
            })?;
        }

        Ok(())
    }

    pub fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = path.into();
        self
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    pub fn with_fetch_timeout_secs(mut self, secs: u64) -> Self {
        self.fetch_timeout_secs = secs;
        self
    }

    /// Treat a missing source file as an error instead of downloading it
    pub fn without_fetch(mut self) -> Self {
        self.fetch_if_missing = false;
        self
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.source_path.as_os_str().is_empty() {
            return Err(Error::configuration("Source path must not be empty"));
        }

        if self.source_path.is_dir() {
            return Err(Error::configuration(format!(
                "Source path is a directory: {}",
                self.source_path.display()
            )));
        }

        if self.fetch_if_missing {
            let url = self.source_url.trim();
            if url.is_empty() {
                return Err(Error::configuration("Source URL must not be empty"));
            }
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(Error::configuration(format!(
                    "Source URL must use http or https: {}",
                    url
                )));
            }
        }

        if self.fetch_timeout_secs == 0 {
            return Err(Error::configuration(
                "Fetch timeout must be greater than 0 seconds",
            ));
        }

        Ok(())
    }
}
