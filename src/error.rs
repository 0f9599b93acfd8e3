//! Error handling for status book acquisition and parsing.
//!
//! Only fatal conditions live here. Blank or malformed scalar cells are not
//! errors; they are reported through [`FieldOutcome`] and counted in
//! [`ParseStats`].
//!
//! [`FieldOutcome`]: crate::app::services::status_parser::FieldOutcome
//! [`ParseStats`]: crate::app::services::status_parser::ParseStats

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Underlying CSV read failure. `row` counts the header as row 1.
    #[error("CSV read error on row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed row {row}: expected {expected} columns, found {found}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid {column} '{value}' on row {row}: {source}")]
    InvalidIdentifier {
        row: usize,
        column: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Failed to fetch {url}: {message}")]
    Fetch {
        url: String,
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Status book not found at {} and fetching is disabled", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Interrupted: {reason}")]
    Interrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a fetch error for `url`
    pub fn fetch(
        url: impl Into<String>,
        message: impl Into<String>,
        source: Option<reqwest::Error>,
    ) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an interruption error
    pub fn interrupted(reason: impl Into<String>) -> Self {
        Self::Interrupted {
            reason: reason.into(),
        }
    }

    /// Row number the error refers to, if it came from the CSV body
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::Csv { row, .. }
            | Self::ColumnCount { row, .. }
            | Self::InvalidIdentifier { row, .. } => Some(*row),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            return Self::io("Failed to write JSON output", error.into());
        }
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
