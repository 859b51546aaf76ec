//! Statsbot - player statistics for chat commands
//!
//! Statsbot answers `/ff <id>` on Discord with a panel of player statistics
//! fetched from a remote HTTP API. The API is shielded by an in-memory TTL
//! cache and a process-wide throttle that spaces outbound calls at least a
//! minimum interval apart.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use statsbot::{HttpStatsTransport, StatsFetcher, StatsbotConfig, answer_lookup};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StatsbotConfig::load()?;
//!     let transport = HttpStatsTransport::from_config(&config)?;
//!     let fetcher = Arc::new(StatsFetcher::from_config(transport, &config));
//!
//!     let reply = answer_lookup(&fetcher, "123").await;
//!     println!("{:?}", reply);
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `discord` - Discord bot integration (default)
//!
//! # Architecture
//!
//! - `statsbot_error` - Error types
//! - `statsbot_core` - Stats record and panel presentation
//! - `statsbot_cache` - TTL cache
//! - `statsbot_rate_limit` - Outbound throttle and configuration
//! - `statsbot_api` - Stats transport and the cached, throttled fetch
//! - `statsbot_social` - Command handling and the Discord bot
//!
//! This crate re-exports everything for convenience.

mod logging;

pub use logging::{LoggingConfig, init_logging, init_logging_with_config};

pub use statsbot_api::*;
pub use statsbot_cache::*;
pub use statsbot_core::*;
pub use statsbot_error::*;
pub use statsbot_rate_limit::*;
pub use statsbot_social::*;
