//! Command implementations for the NFIP status CLI
//!
//! Logging setup, layered configuration and the four subcommands. Command
//! output goes to stdout; logs and progress go to stderr.

use crate::app::services::status_book::fetch::{download_status_book, ensure_source_file};
use crate::app::services::status_book::{CommunityStatusCollection, LoadOutcome};
use crate::cli::args::{Args, Commands, ExportArgs, FetchArgs, OutputFormat, SearchArgs};
use crate::config::StatusBookConfig;
use crate::{Error, Result, load_status_book};
use colored::Colorize;
use std::fs::File;
use std::future::Future;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// What a command did, for the final log line
#[derive(Debug, Clone, Default)]
pub struct CommandReport {
    /// Records loaded from the status book
    pub records_loaded: usize,
    /// Records written to the output
    pub records_written: usize,
    pub downloaded: bool,
    pub elapsed: Duration,
}

/// Main command runner
///
/// Sets up logging, resolves configuration (defaults, environment, flags)
/// and dispatches to the selected subcommand.
pub async fn run(args: Args) -> Result<CommandReport> {
    let start_time = Instant::now();

    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    let mut report = match &args.command {
        Some(Commands::Fetch(fetch)) => run_fetch(fetch, &config, args.show_progress()).await?,
        Some(Commands::Search(search)) => {
            run_search(search, &config, args.show_progress()).await?
        }
        Some(Commands::Export(export)) => {
            run_export(export, &config, args.show_progress()).await?
        }
        Some(Commands::Summary) => run_summary(&config, args.show_progress()).await?,
        None => return Err(Error::configuration("No command given")),
    };

    report.elapsed = start_time.elapsed();
    info!(
        "Finished in {:.2}s: {} communities loaded, {} written",
        report.elapsed.as_secs_f64(),
        report.records_loaded,
        report.records_written
    );

    Ok(report)
}

/// Drive `work` to completion unless `shutdown` resolves first
///
/// `shutdown` is always polled before `work`, so an interrupt that is already
/// pending wins. `work` must yield to the runtime for a later interrupt to
/// be noticed.
pub async fn run_until_interrupted<T, W, S>(work: W, shutdown: S) -> Result<T>
where
    W: Future<Output = Result<T>>,
    S: Future<Output = ()>,
{
    tokio::select! {
        biased;
        _ = shutdown => Err(Error::interrupted("Interrupted by user")),
        result = work => result,
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nfip_status={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(io::stderr),
        )
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to initialise logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Resolve configuration: defaults, then environment, then CLI flags
pub fn load_configuration(args: &Args) -> Result<StatusBookConfig> {
    load_configuration_with(args, |key| std::env::var(key).ok())
}

/// [`load_configuration`] with an explicit environment lookup
pub fn load_configuration_with<F>(args: &Args, lookup: F) -> Result<StatusBookConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = StatusBookConfig::default();
    config.apply_env_overrides(lookup)?;
    args.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

async fn run_fetch(
    fetch: &FetchArgs,
    config: &StatusBookConfig,
    show_progress: bool,
) -> Result<CommandReport> {
    let downloaded = if fetch.force {
        download_status_book(
            &config.source_url,
            &config.source_path,
            config.fetch_timeout(),
            show_progress,
        )
        .await?;
        true
    } else {
        ensure_source_file(config, show_progress).await?
    };

    if downloaded {
        println!("Downloaded status book to {}", config.source_path.display());
    } else {
        println!(
            "Status book already present at {}",
            config.source_path.display()
        );
    }

    Ok(CommandReport {
        downloaded,
        ..Default::default()
    })
}

async fn run_search(
    search: &SearchArgs,
    config: &StatusBookConfig,
    show_progress: bool,
) -> Result<CommandReport> {
    let outcome = load_status_book(config, show_progress).await?;
    let matches = outcome.collection.search(&search.term);
    info!(
        "Search '{}' matched {} of {} communities",
        search.term,
        matches.len(),
        outcome.collection.len()
    );

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    match search.format {
        OutputFormat::Json if search.pretty => matches.to_json_pretty_writer(&mut writer)?,
        OutputFormat::Json => matches.to_json_writer(&mut writer)?,
        OutputFormat::Table => write_table(&matches, &mut writer)?,
    }

    Ok(report_for(&outcome, matches.len()))
}

async fn run_export(
    export: &ExportArgs,
    config: &StatusBookConfig,
    show_progress: bool,
) -> Result<CommandReport> {
    let outcome = load_status_book(config, show_progress).await?;
    let report = report_for(&outcome, outcome.collection.len());

    let collection = outcome.collection;
    let output = export.output.clone();
    let pretty = export.pretty;

    tokio::task::spawn_blocking(move || -> Result<()> {
        match output {
            Some(path) => {
                write_staged(&path, |file| {
                    write_json(&collection, BufWriter::new(file), pretty)
                })?;
                info!("Exported {} communities to {}", collection.len(), path.display());
                Ok(())
            }
            None => write_json(&collection, BufWriter::new(io::stdout().lock()), pretty),
        }
    })
    .await
    .map_err(|e| Error::interrupted(format!("Export task did not finish: {}", e)))??;

    Ok(report)
}

async fn run_summary(config: &StatusBookConfig, show_progress: bool) -> Result<CommandReport> {
    let outcome = load_status_book(config, show_progress).await?;
    let stats = &outcome.stats;

    println!("{}", "NFIP Community Status Book".bright_green().bold());
    println!("  Source:                 {}", outcome.source_path.display());
    println!("  Downloaded this run:    {}", outcome.downloaded);
    println!("  Communities:            {}", outcome.collection.len());
    println!(
        "  Participating:          {}",
        outcome.collection.participating_count()
    );
    println!(
        "  In rating system:       {}",
        outcome.collection.rating_system_count()
    );
    println!(
        "  Map dates known:        {} of {}",
        outcome.collection.known_date_count(),
        outcome.collection.len() * 4
    );
    println!("  Blank identifiers:      {}", stats.blank_identifiers);
    println!(
        "  Dates parsed/blank/bad: {}/{}/{}",
        stats.dates_parsed, stats.dates_empty, stats.dates_invalid
    );
    println!(
        "  Flags parsed/blank/bad: {}/{}/{}",
        stats.flags_parsed, stats.flags_empty, stats.flags_invalid
    );
    if stats.is_clean() {
        println!("  {}", "All non-blank cells parsed".green());
    } else {
        println!(
            "  {}",
            format!(
                "{} malformed cells left blank ({:.1}% of dates)",
                stats.invalid_cells(),
                stats.invalid_date_rate()
            )
            .yellow()
        );
    }

    Ok(report_for(&outcome, 0))
}

fn write_json<W: Write>(collection: &CommunityStatusCollection, writer: W, pretty: bool) -> Result<()> {
    if pretty {
        collection.to_json_pretty_writer(writer)
    } else {
        collection.to_json_writer(writer)
    }
}

/// Write `path` through a temporary file beside it
///
/// The destination is replaced only after `write` succeeds; on failure any
/// previous file is left untouched and the temporary file is removed.
fn write_staged<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut File) -> Result<()>,
{
    let parent = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut staged = NamedTempFile::new_in(parent).map_err(|e| {
        Error::io(
            format!("Failed to create temporary file in {}", parent.display()),
            e,
        )
    })?;

    write(staged.as_file_mut())?;

    staged
        .persist(path)
        .map_err(|e| Error::io(format!("Failed to save {}", path.display()), e.error))?;
    Ok(())
}

fn write_table<W: Write>(collection: &CommunityStatusCollection, writer: &mut W) -> Result<()> {
    let write_err = |e: io::Error| Error::io("Failed to write search results", e);

    writeln!(
        writer,
        "{:>7}  {:<40}  {:<30}  {:<7}  {}",
        "CID", "COMMUNITY", "COUNTY", "PROGRAM", "PARTICIPATING"
    )
    .map_err(write_err)?;

    for community in collection {
        writeln!(
            writer,
            "{:>7}  {:<40}  {:<30}  {:<7}  {}",
            community.id,
            community.name,
            community.county,
            community.program,
            if community.participating_community { "yes" } else { "no" }
        )
        .map_err(write_err)?;
    }

    writer.flush().map_err(write_err)
}

fn report_for(outcome: &LoadOutcome, records_written: usize) -> CommandReport {
    CommandReport {
        records_loaded: outcome.collection.len(),
        records_written,
        downloaded: outcome.downloaded,
        ..Default::default()
    }
}
