//! Statsbot binary.
//!
//! Loads `.env`, configures logging, and runs the Discord bot.

use clap::Parser;
use statsbot::{LoggingConfig, init_logging_with_config};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, run_bot};

    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose { "debug" } else { "info" };
    init_logging_with_config(
        LoggingConfig::new()
            .with_log_level(log_level)
            .with_json_logs(cli.json_logs),
    )?;

    run_bot().await
}
