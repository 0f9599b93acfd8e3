//! NFIP Status Book Library
//!
//! Loads the FEMA National Flood Insurance Program Community Status Book
//! (`nation.csv`) into typed records.
//!
//! This library provides tools for:
//! - Downloading the status book once when it is missing locally
//! - Cleaning spreadsheet-guarded cells such as `="060213"`
//! - Reading two-digit-year dates and yes/no flags leniently
//! - Substring search over community name, county and identifier
//! - JSON export of the loaded collection

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod status_book;
        pub mod status_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::CommunityStatus;
pub use app::services::status_book::loader::load_status_book;
pub use app::services::status_book::{CommunityStatusCollection, LoadOutcome};
pub use config::StatusBookConfig;
pub use error::{Error, Result};
