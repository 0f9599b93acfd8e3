//! Application constants for the NFIP status book tool
//!
//! Source locations, parsing thresholds and environment variable names used
//! throughout the crate.

use std::time::Duration;

// =============================================================================
// Source file
// =============================================================================

/// Local filename the status book is stored under
pub const STATUS_BOOK_FILENAME: &str = "nation.csv";

/// Published location of the NFIP Community Status Book
pub const STATUS_BOOK_URL: &str = "https://www.fema.gov/cis/nation.csv";

/// Default upper bound for the single download attempt
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// User agent sent when downloading the status book
pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Parsing
// =============================================================================

/// Number of columns every data row must carry
pub const COLUMN_COUNT: usize = 15;

/// Characters the source wraps around cells to defeat spreadsheet auto-formatting
pub const CELL_DECORATION: &[char] = &['"', '='];

/// Two-digit years at or below this value belong to the 2000s, the rest to the 1900s.
///
/// Fixed on purpose: moving it changes which historical years are representable.
pub const TWO_DIGIT_YEAR_CUTOFF: u32 = 22;

/// Accepted tokens for yes/no columns (compared case-insensitively)
pub mod yes_no {
    pub const YES: &str = "yes";
    pub const NO: &str = "no";
}

// =============================================================================
// Environment
// =============================================================================

/// Environment variables that override configuration defaults
pub mod env_vars {
    pub const SOURCE_PATH: &str = "NFIP_STATUS_SOURCE";
    pub const SOURCE_URL: &str = "NFIP_STATUS_URL";
    pub const FETCH_TIMEOUT_SECS: &str = "NFIP_STATUS_TIMEOUT_SECS";
}

/// Default fetch timeout as a [`Duration`]
pub const fn default_fetch_timeout() -> Duration {
    Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_names_crate() {
        assert!(APP_USER_AGENT.starts_with("nfip_status/"));
    }

    #[test]
    fn test_default_fetch_timeout() {
        assert_eq!(default_fetch_timeout(), Duration::from_secs(30));
    }
}
