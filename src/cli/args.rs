//! Command-line argument definitions for the NFIP status tool
//!
//! Defines the CLI interface using the clap derive API. Source options are
//! global so they can follow any subcommand.

use crate::config::StatusBookConfig;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the NFIP Community Status Book tool
#[derive(Debug, Clone, Parser)]
#[command(
    name = "nfip-status",
    version,
    about = "Search and export the FEMA NFIP Community Status Book",
    long_about = "Loads the FEMA National Flood Insurance Program Community Status Book CSV \
                  (downloading it once if it is not present locally), normalizes its quoted \
                  numbers, two-digit dates and yes/no flags, and searches or exports the \
                  resulting records as JSON."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Local status book CSV (downloaded here when missing)
    #[arg(
        short = 's',
        long = "source",
        value_name = "PATH",
        global = true,
        help = "Path to the local status book CSV"
    )]
    pub source_path: Option<PathBuf>,

    /// URL the status book is downloaded from when missing
    #[arg(long = "url", value_name = "URL", global = true)]
    pub source_url: Option<String>,

    /// Download timeout in seconds
    #[arg(long = "timeout", value_name = "SECS", global = true)]
    pub timeout_secs: Option<u64>,

    /// Fail instead of downloading when the source file is missing
    #[arg(long = "no-fetch", global = true)]
    pub no_fetch: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Make sure the status book is available locally
    Fetch(FetchArgs),
    /// Find communities by name, county or identifier
    Search(SearchArgs),
    /// Write every community record as JSON
    Export(ExportArgs),
    /// Show record counts and parse statistics
    Summary,
}

#[derive(Debug, Clone, Parser)]
pub struct FetchArgs {
    /// Download again even if the file already exists
    #[arg(long = "force")]
    pub force: bool,
}

#[derive(Debug, Clone, Parser)]
pub struct SearchArgs {
    /// Case-insensitive text matched against name, county and identifier
    #[arg(value_name = "TERM")]
    pub term: String,

    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Indent JSON output
    #[arg(long = "pretty")]
    pub pretty: bool,
}

#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// Write to this file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Indent JSON output
    #[arg(long = "pretty")]
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

impl Args {
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validate arguments that clap cannot check on its own
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == Some(0) {
            return Err(Error::configuration(
                "Timeout must be greater than 0 seconds",
            ));
        }

        if let Some(Commands::Export(export)) = &self.command {
            if let Some(output) = &export.output {
                if output.is_dir() {
                    return Err(Error::configuration(format!(
                        "Output path is a directory: {}",
                        output.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Apply CLI overrides on top of a layered configuration
    pub fn apply_overrides(&self, config: &mut StatusBookConfig) {
        if let Some(path) = &self.source_path {
            config.source_path = path.clone();
        }
        if let Some(url) = &self.source_url {
            config.source_url = url.clone();
        }
        if let Some(timeout) = self.timeout_secs {
            config.fetch_timeout_secs = timeout;
        }
        if self.no_fetch {
            config.fetch_if_missing = false;
        }
    }
}
