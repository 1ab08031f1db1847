//! Baseclone CLI - Main entry point

use baseclone_cli::{Cli, Commands, Settings};
use baseclone_common::logging::{init_logging, LogConfig, LogLevel};
use clap::Parser;
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    // Load .env if present; explicit environment still wins.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize logging based on verbose flag and environment
    let log_config = if cli.verbose {
        LogConfig::builder()
            .level(LogLevel::Debug)
            .log_file_prefix("baseclone".to_string())
            .build()
    } else {
        LogConfig::builder()
            .level(LogLevel::Warn)
            .log_file_prefix("baseclone".to_string())
            .build()
    };

    // An explicit LOG_LEVEL takes precedence over the verbose flag
    let log_config = if std::env::var("LOG_LEVEL").is_ok() {
        LogConfig::from_env().unwrap_or(log_config)
    } else {
        log_config
    };

    // The CLI should keep working even when logging cannot initialize
    let _ = init_logging(&log_config);

    let result = execute_command(cli).await;

    if let Err(e) = result {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: Cli) -> baseclone_cli::Result<()> {
    let settings = Settings::from_cli(&cli);

    match cli.command {
        Commands::Clone { url, name, json } => {
            baseclone_cli::commands::clone::run(&settings, url, name, json).await
        }

        Commands::Inspect { url, json } => {
            baseclone_cli::commands::inspect::run(&settings, url, json).await
        }
    }
}
