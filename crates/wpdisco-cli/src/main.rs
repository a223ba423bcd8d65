//! wpdisco CLI - WordPress REST API discovery
//!
//! Entry point for the `wpdisco` command-line interface. Command
//! implementations live in [`commands`]; this file only parses arguments,
//! sets up logging, and maps failures to exit codes.

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;
mod utils;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = utils::logging::initialize_logging(&cli) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match execute_command(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(error::exit_code_from_error(&err))
        },
    }
}

async fn execute_command(cli: Cli) -> anyhow::Result<()> {
    let config = utils::settings::load_config(&cli)?;

    match cli.command {
        Commands::Discover { uri, legacy, format } => {
            commands::discover(&config, &uri, legacy, format).await
        },
        Commands::Root { uri, legacy, format } => {
            commands::find_root(&config, &uri, legacy, format).await
        },
        Commands::Index { url, format } => commands::show_index(&config, &url, format).await,
        Commands::ParseLink { segments, format } => commands::parse_links(&segments, format),
    }
}
