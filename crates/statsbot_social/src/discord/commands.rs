//! `/ff` slash command definition and reply rendering.

use crate::{LOOKUP_COMMAND, LOOKUP_OPTION, StatsReply};
use serenity::all::{
    CommandOptionType, CreateCommand, CreateCommandOption, CreateEmbed, CreateEmbedFooter,
    EditInteractionResponse, Timestamp,
};
use statsbot_core::StatsPanel;

/// Definition of the `/ff` command with its required `id` option.
pub fn ff_command() -> CreateCommand {
    CreateCommand::new(LOOKUP_COMMAND)
        .description("Check Free Fire stats by ID")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                LOOKUP_OPTION,
                "Enter Free Fire Player ID",
            )
            .required(true),
        )
}

/// Render a stats panel as a Discord embed, stamped with the current time.
pub fn render_embed(panel: &StatsPanel) -> CreateEmbed {
    let fields = panel
        .fields()
        .iter()
        .map(|f| (*f.name(), f.value().clone(), *f.inline()));

    CreateEmbed::new()
        .title(panel.title())
        .fields(fields)
        .colour(*panel.colour())
        .footer(CreateEmbedFooter::new(*panel.footer()))
        .timestamp(Timestamp::now())
}

/// Edit for the deferred response carrying `reply`.
pub fn edit_response(reply: &StatsReply) -> EditInteractionResponse {
    match reply {
        StatsReply::Panel(panel) => EditInteractionResponse::new().embed(render_embed(panel)),
        StatsReply::Failure(message) => EditInteractionResponse::new().content(message.as_str()),
    }
}
