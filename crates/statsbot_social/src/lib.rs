//! Chat platform integrations for statsbot.
//!
//! The platform-neutral half lives in [`answer_lookup`]: it takes the raw key
//! from an inbound command, runs the cached, throttled fetch, and turns the
//! outcome into a [`StatsReply`]. Upstream failures become a failure message
//! naming the key; they are never propagated to the platform layer.
//!
//! # Platform Support
//!
//! Each platform is feature-gated and lives in its own submodule:
//! - `discord` - Discord bot integration with the `/ff` slash command (requires `discord` feature)

#![warn(missing_docs)]

mod lookup;

#[cfg(feature = "discord")]
mod discord;

pub use lookup::{LOOKUP_COMMAND, LOOKUP_OPTION, StatsReply, answer_lookup, parse_lookup_key};

#[cfg(feature = "discord")]
pub use discord::{
    DiscordError, DiscordErrorKind, DiscordResult, StatsbotBot, StatsbotHandler, edit_response,
    ff_command, render_embed,
};
