//! Outbound request throttling and runtime configuration.
//!
//! [`RateGate`] spaces calls to the stats API at least a minimum interval
//! apart, across every lookup key. [`StatsbotConfig`] carries that interval
//! together with the cache TTL, API location and bot credentials.

mod config;
mod gate;

pub use config::{DiscordConfig, StatsbotConfig};
pub use gate::RateGate;
