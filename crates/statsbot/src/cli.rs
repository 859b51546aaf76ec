//! Command-line interface and bot startup.

use clap::Parser;
use statsbot::{HttpStatsTransport, StatsFetcher, StatsbotBot, StatsbotConfig};
use std::sync::Arc;
use tracing::info;

/// Discord bot answering Free Fire stats lookups.
#[derive(Parser, Debug)]
#[command(name = "statsbot", version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

/// Load configuration, wire the fetch pipeline, and run the bot until it stops.
pub async fn run_bot() -> Result<(), Box<dyn std::error::Error>> {
    let config = StatsbotConfig::load()?;
    info!(
        api_base = %config.api_base,
        cache_ttl_secs = config.cache_ttl_secs,
        min_interval_ms = config.min_interval_ms,
        "Configuration loaded"
    );

    let transport = HttpStatsTransport::from_config(&config)?;
    let fetcher = Arc::new(StatsFetcher::from_config(transport, &config));

    let mut bot = StatsbotBot::new(&config.discord, fetcher).await?;
    bot.start().await?;

    Ok(())
}
