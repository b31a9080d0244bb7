//! # ars CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ars_cli::fetch::{run_fetch, FetchArgs};
use ars_cli::request::{run_request, RequestArgs};

/// Artifact retrieval service CLI.
///
/// Pulls a single file from a GitLab repository, either directly through
/// the retrieval client or via a running service instance.
#[derive(Parser, Debug)]
#[command(name = "ars", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Retrieve a file directly from GitLab using the local client.
    Fetch(FetchArgs),

    /// Retrieve a file through a running service instance's API.
    Request(RequestArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Fetch(args) => run_fetch(&args).await,
        Commands::Request(args) => run_request(&args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
