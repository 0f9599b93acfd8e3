//! Status book acquisition
//!
//! The source file is downloaded only when it is missing locally. A download
//! is a single attempt bounded by the configured timeout; the body is staged
//! in a temporary file next to the destination and renamed into place, so a
//! failed download never leaves a truncated CSV behind.

use crate::config::StatusBookConfig;
use crate::constants::APP_USER_AGENT;
use crate::error::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Make sure the configured source file exists, downloading it if needed
///
/// Returns `true` when a download happened. An existing file is used as-is
/// with no staleness check.
///
/// # Errors
/// * [`Error::SourceNotFound`] if the file is missing and fetching is disabled
/// * [`Error::Fetch`] for transport failures, timeouts and non-success statuses
/// * [`Error::Io`] if the file cannot be written
pub async fn ensure_source_file(config: &StatusBookConfig, show_progress: bool) -> Result<bool> {
    if config.source_path.exists() {
        debug!(
            "Using existing status book at {}",
            config.source_path.display()
        );
        return Ok(false);
    }

    if !config.fetch_if_missing {
        return Err(Error::SourceNotFound {
            path: config.source_path.clone(),
        });
    }

    info!(
        "Status book not found at {}, downloading",
        config.source_path.display()
    );
    download_status_book(
        &config.source_url,
        &config.source_path,
        config.fetch_timeout(),
        show_progress,
    )
    .await?;

    Ok(true)
}

/// Download `url` to `destination`, replacing any existing file
///
/// Returns the number of bytes written.
pub async fn download_status_book(
    url: &str,
    destination: &Path,
    timeout: Duration,
    show_progress: bool,
) -> Result<u64> {
    info!("Downloading status book from {}", url);

    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(APP_USER_AGENT)
        .build()
        .map_err(|e| Error::fetch(url, "could not build HTTP client", Some(e)))?;

    let mut response = client
        .get(url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| Error::fetch(url, describe_request_error(&e, timeout), Some(e)))?;

    let parent = destination
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    std::fs::create_dir_all(parent)
        .map_err(|e| Error::io(format!("Failed to create {}", parent.display()), e))?;

    let mut staged = tempfile::NamedTempFile::new_in(parent).map_err(|e| {
        Error::io(
            format!("Failed to create temporary file in {}", parent.display()),
            e,
        )
    })?;

    let progress_bar = show_progress.then(|| download_progress_bar(response.content_length()));

    let mut bytes_written: u64 = 0;
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| Error::fetch(url, describe_request_error(&e, timeout), Some(e)))?
    {
        staged
            .write_all(&chunk)
            .map_err(|e| Error::io("Failed to write downloaded status book", e))?;
        bytes_written += chunk.len() as u64;
        if let Some(pb) = &progress_bar {
            pb.set_position(bytes_written);
        }
    }

    staged
        .flush()
        .map_err(|e| Error::io("Failed to write downloaded status book", e))?;
    staged.persist(destination).map_err(|e| {
        Error::io(
            format!("Failed to save status book to {}", destination.display()),
            e.error,
        )
    })?;

    if let Some(pb) = &progress_bar {
        pb.finish_with_message("Status book downloaded");
    }

    info!(
        "Saved {} bytes to {}",
        bytes_written,
        destination.display()
    );

    Ok(bytes_written)
}

fn describe_request_error(error: &reqwest::Error, timeout: Duration) -> String {
    if error.is_timeout() {
        format!("request timed out after {}s", timeout.as_secs())
    } else if let Some(status) = error.status() {
        format!("server responded with {}", status)
    } else if error.is_connect() {
        "could not connect".to_string()
    } else {
        "request failed".to_string()
    }
}

fn download_progress_bar(content_length: Option<u64>) -> ProgressBar {
    match content_length {
        Some(len) => {
            let pb = ProgressBar::new(len);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            pb.set_message("Downloading status book...");
            pb
        }
        None => {
            let pb = ProgressBar::new_spinner();
            pb.set_message("Downloading status book...");
            pb
        }
    }
}
