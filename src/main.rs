use anyhow::Context;
use clap::Parser;
use nfip_status::cli::{args::Args, commands};
use std::process;

fn main() {
    if let Err(error) = try_main() {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        return Ok(());
    }

    let runtime = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;

    let result = runtime.block_on(commands::run_until_interrupted(
        commands::run(args),
        shutdown_signal(),
    ));

    // A parse still running on the blocking pool is abandoned after an interrupt
    runtime.shutdown_background();

    result?;
    Ok(())
}

/// Resolves on the first CTRL+C
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No handler could be installed, so never interrupt
        std::future::pending::<()>().await;
    }
    eprintln!("\nReceived CTRL+C, shutting down...");
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("nfip-status - FEMA NFIP Community Status Book tool");
    println!("==================================================");
    println!();
    println!("USAGE:");
    println!("    nfip-status <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    fetch       Download the status book if it is not present locally");
    println!("    search      Find communities by name, county or identifier");
    println!("    export      Write every community record as JSON");
    println!("    summary     Show record counts and parse statistics");
    println!();
    println!("EXAMPLES:");
    println!("    nfip-status search anaheim --format table");
    println!("    nfip-status export --output communities.json --pretty");
    println!("    nfip-status --source /data/nation.csv summary");
    println!();
    println!("For detailed help on any command, use:");
    println!("    nfip-status <COMMAND> --help");
}
