//! Discord integration for statsbot.
//!
//! This module provides the Discord bot built on the Serenity library:
//! - **client**: Serenity client setup and lifecycle management
//! - **handler**: Event handler registering `/ff` and answering it
//! - **commands**: Slash command definition and reply rendering
//! - **error**: Discord-specific error types
//!
//! # Usage
//!
//! Available with the `discord` feature.
//!
//! ```rust,ignore
//! use statsbot_social::StatsbotBot;
//!
//! let mut bot = StatsbotBot::new(&config.discord, fetcher).await?;
//! bot.start().await?;
//! ```

mod client;
mod commands;
mod error;
mod handler;

pub use client::StatsbotBot;
pub use commands::{edit_response, ff_command, render_embed};
pub use error::{DiscordError, DiscordErrorKind, DiscordResult};
pub use handler::StatsbotHandler;
