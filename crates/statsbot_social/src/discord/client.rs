//! Discord bot client setup and lifecycle management.

use super::{DiscordError, DiscordErrorKind, StatsbotHandler};
use serenity::Client;
use serenity::all::ApplicationId;
use statsbot_api::{StatsFetcher, StatsTransport};
use statsbot_rate_limit::DiscordConfig;
use std::sync::Arc;
use tracing::{info, instrument};

/// Main Discord bot client for statsbot.
///
/// # Example
/// ```no_run
/// use statsbot_api::{HttpStatsTransport, StatsFetcher};
/// use statsbot_rate_limit::StatsbotConfig;
/// use statsbot_social::StatsbotBot;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = StatsbotConfig::load()?;
///     let transport = HttpStatsTransport::from_config(&config)?;
///     let fetcher = Arc::new(StatsFetcher::from_config(transport, &config));
///
///     let mut bot = StatsbotBot::new(&config.discord, fetcher).await?;
///     bot.start().await?;
///     Ok(())
/// }
/// ```
pub struct StatsbotBot {
    /// Serenity client instance
    client: Client,
}

impl StatsbotBot {
    /// Create a new StatsbotBot answering lookups from `fetcher`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - No bot token is configured
    /// - The Serenity client fails to initialize
    #[instrument(skip_all, fields(guild_id = ?config.guild_id))]
    pub async fn new<T>(config: &DiscordConfig, fetcher: Arc<StatsFetcher<T>>) -> Result<Self, DiscordError>
    where
        T: StatsTransport + 'static,
    {
        info!("Initializing statsbot Discord bot");

        let token = config.token.as_deref().filter(|t| !t.is_empty()).ok_or_else(|| {
            DiscordError::new(DiscordErrorKind::ConfigurationError(
                "DISCORD_TOKEN is not set".to_string(),
            ))
        })?;

        let handler = StatsbotHandler::new(fetcher, config.guild_id);
        let intents = StatsbotHandler::<T>::intents();

        info!("Building Serenity client with intents: {:?}", intents);

        let mut builder = Client::builder(token, intents).event_handler(handler);
        if let Some(application_id) = config.application_id.filter(|id| *id != 0) {
            builder = builder.application_id(ApplicationId::new(application_id));
        }

        let client = builder.await.map_err(|e| {
            DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                "Failed to build client: {}",
                e
            )))
        })?;

        info!("Serenity client built successfully");

        Ok(Self { client })
    }

    /// Start the Discord bot.
    ///
    /// This method blocks until the bot is shut down.
    ///
    /// # Errors
    /// Returns an error if the client fails to start or encounters a fatal error.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> Result<(), DiscordError> {
        info!("Starting Discord bot");

        self.client.start().await.map_err(|e| {
            DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                "Client error: {}",
                e
            )))
        })?;

        Ok(())
    }
}
