//! Lookup result caching with TTL support.
//!
//! This crate provides the in-memory store consulted before any call to the
//! stats API, so repeated lookups within the TTL never leave the process.

#![warn(missing_docs)]

mod cache;

pub use cache::{CacheEntry, StatsCache, StatsCacheConfig, StatsCacheConfigBuilder};
