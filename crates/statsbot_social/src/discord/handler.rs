//! Serenity event handler for the stats bot.

use super::{DiscordError, DiscordErrorKind, DiscordResult, edit_response, ff_command};
use crate::{LOOKUP_COMMAND, LOOKUP_OPTION, answer_lookup};
use serenity::all::{
    Command, CommandDataOptionValue, CommandInteraction, Context, EventHandler, GatewayIntents,
    GuildId, Interaction, Ready,
};
use serenity::async_trait;
use statsbot_api::{StatsFetcher, StatsTransport};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Event handler for the stats bot.
///
/// Registers `/ff` once the gateway is ready and answers each invocation with
/// a stats embed or a failure message.
pub struct StatsbotHandler<T> {
    fetcher: Arc<StatsFetcher<T>>,
    guild_id: Option<GuildId>,
}

impl<T> StatsbotHandler<T> {
    /// Create a handler answering from `fetcher`.
    ///
    /// With a `guild_id` the command is registered in that guild only,
    /// otherwise globally. A zero id counts as unset.
    pub fn new(fetcher: Arc<StatsFetcher<T>>, guild_id: Option<u64>) -> Self {
        Self {
            fetcher,
            guild_id: guild_id.filter(|id| *id != 0).map(GuildId::new),
        }
    }

    /// Required gateway intents for the bot.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS
    }

    /// Read the lookup key option from an invocation.
    fn option_value(command: &CommandInteraction) -> Option<&str> {
        command
            .data
            .options
            .iter()
            .find(|opt| opt.name == LOOKUP_OPTION)
            .and_then(|opt| match &opt.value {
                CommandDataOptionValue::String(value) => Some(value.as_str()),
                _ => None,
            })
    }
}

impl<T: StatsTransport + 'static> StatsbotHandler<T> {
    #[instrument(skip_all, fields(guild_id = ?self.guild_id))]
    async fn register_commands(&self, ctx: &Context) -> DiscordResult<()> {
        let commands = vec![ff_command()];
        let registered = match self.guild_id {
            Some(guild_id) => guild_id.set_commands(&ctx.http, commands).await,
            None => Command::set_global_commands(&ctx.http, commands).await,
        }
        .map_err(|e| DiscordError::new(DiscordErrorKind::CommandRegistrationFailed(e.to_string())))?;

        info!(count = registered.len(), "Slash command registered");
        Ok(())
    }

    #[instrument(skip_all, fields(user = %command.user.name))]
    async fn handle_lookup(&self, ctx: &Context, command: &CommandInteraction) -> DiscordResult<()> {
        let raw_key = Self::option_value(command).unwrap_or_default();
        debug!(raw_key, "Handling lookup command");

        command.defer(&ctx.http).await?;

        let reply = answer_lookup(&self.fetcher, raw_key).await;

        command
            .edit_response(&ctx.http, edit_response(&reply))
            .await
            .map_err(|e| DiscordError::new(DiscordErrorKind::InteractionFailed(e.to_string())))?;
        Ok(())
    }
}

#[async_trait]
impl<T: StatsTransport + 'static> EventHandler for StatsbotHandler<T> {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("Logged in as {}", ready.user.tag());

        if let Err(e) = self.register_commands(&ctx).await {
            error!(error = %e, "Error registering commands");
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };
        if command.data.name != LOOKUP_COMMAND {
            return;
        }

        if let Err(e) = self.handle_lookup(&ctx, &command).await {
            error!(error = %e, "Failed to answer lookup command");
        }
    }
}
