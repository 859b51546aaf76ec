//! Player statistics fetch: cache, throttle, transport.
//!
//! [`StatsFetcher`] answers a lookup from its [`StatsCache`](statsbot_cache::StatsCache)
//! when it can. On a miss it waits its turn at the shared
//! [`RateGate`](statsbot_rate_limit::RateGate), issues one outbound call through a
//! [`StatsTransport`], and caches the parsed result. Every failure surfaces as
//! an [`UpstreamError`](statsbot_error::UpstreamError); nothing is retried and
//! nothing is cached on failure.
//!
//! # Example
//!
//! ```rust,ignore
//! use statsbot_api::{HttpStatsTransport, StatsFetcher};
//! use statsbot_rate_limit::StatsbotConfig;
//!
//! let config = StatsbotConfig::load()?;
//! let transport = HttpStatsTransport::from_config(&config)?;
//! let fetcher = StatsFetcher::from_config(transport, &config);
//!
//! let stats = fetcher.fetch_stats("123").await?;
//! ```

#![warn(missing_docs)]

mod fetcher;
mod transport;

pub use fetcher::{FetchResult, StatsFetcher};
pub use transport::{HttpStatsTransport, StatsTransport};
