//! Status book loading
//!
//! Acquire the source file if missing, then parse it into a collection on
//! the blocking pool.

use super::LoadOutcome;
use super::fetch::ensure_source_file;
use crate::app::services::status_parser::parse_file;
use crate::config::StatusBookConfig;
use crate::error::{Error, Result};
use std::time::Instant;
use tracing::info;

/// Load the status book described by `config`
///
/// # Errors
/// Any fatal acquisition or parse error; no partial collection is returned.
pub async fn load_status_book(config: &StatusBookConfig, show_progress: bool) -> Result<LoadOutcome> {
    let start_time = Instant::now();

    let downloaded = ensure_source_file(config, show_progress).await?;

    // Parsing is synchronous and must not block the runtime
    let source_path = config.source_path.clone();
    let result = tokio::task::spawn_blocking(move || parse_file(&source_path))
        .await
        .map_err(|e| Error::interrupted(format!("Status book parse task did not finish: {}", e)))??;

    let outcome = LoadOutcome {
        collection: result.collection,
        stats: result.stats,
        source_path: config.source_path.clone(),
        downloaded,
        load_duration: start_time.elapsed(),
    };

    info!(
        "Status book loaded: {} communities from {} in {:.2}s",
        outcome.collection.len(),
        outcome.source_path.display(),
        outcome.load_duration.as_secs_f64()
    );

    Ok(outcome)
}
