//! Cache-then-throttle stats lookup.

use crate::StatsTransport;
use parking_lot::Mutex;
use statsbot_cache::StatsCache;
use statsbot_core::StatsResult;
use statsbot_error::{JsonError, UpstreamError};
use statsbot_rate_limit::{RateGate, StatsbotConfig};
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// Result type for stats lookups.
pub type FetchResult<T> = Result<T, UpstreamError>;

/// Answers stats lookups from cache or, on a miss, from the stats API.
///
/// The gate is shared (`Arc`) so every fetcher in the process can be throttled
/// by the same instance. The cache lock is never held across an await.
///
/// Concurrent misses on the same key are not coalesced: each waits its turn
/// at the gate, each reaches the transport, and the last successful write wins.
pub struct StatsFetcher<T> {
    transport: T,
    cache: Mutex<StatsCache<StatsResult>>,
    gate: Arc<RateGate>,
}

impl<T: StatsTransport> StatsFetcher<T> {
    /// Create a fetcher from its parts.
    pub fn new(transport: T, cache: StatsCache<StatsResult>, gate: Arc<RateGate>) -> Self {
        Self {
            transport,
            cache: Mutex::new(cache),
            gate,
        }
    }

    /// Create a fetcher with a fresh cache and gate sized from configuration.
    pub fn from_config(transport: T, config: &StatsbotConfig) -> Self {
        Self::new(
            transport,
            StatsCache::with_ttl(config.cache_ttl()),
            Arc::new(RateGate::new(config.min_interval())),
        )
    }

    /// The gate throttling this fetcher's outbound calls.
    pub fn gate(&self) -> &Arc<RateGate> {
        &self.gate
    }

    /// Fresh cached stats for `key`, without touching the network.
    pub fn cached(&self, key: &str) -> Option<StatsResult> {
        self.cache.lock().get(key).cloned()
    }

    /// Number of cache entries, including expired ones not yet purged.
    pub fn cache_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Drop expired cache entries, returning how many were removed.
    pub fn purge_expired(&self) -> usize {
        self.cache.lock().purge_expired()
    }

    /// Look up stats for `key`.
    ///
    /// A cache hit returns immediately without consulting the gate. A miss
    /// waits for the gate, makes exactly one outbound call, and caches the
    /// parsed result on success.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] if the call fails, the API answers with a
    /// non-success status, or the body is not a stats object. The cause is
    /// logged here and not returned.
    #[instrument(skip(self))]
    pub async fn fetch_stats(&self, key: &str) -> FetchResult<StatsResult> {
        if let Some(stats) = self.cached(key) {
            debug!("Serving stats from cache");
            return Ok(stats);
        }

        debug!("Cache miss, waiting for rate gate");
        self.gate.await_turn().await;

        let body = self.transport.fetch_raw(key).await.map_err(|e| {
            error!(key, error = %e, "Stats request failed");
            UpstreamError::new(key)
        })?;

        let stats: StatsResult = serde_json::from_str(&body).map_err(|e| {
            let e = JsonError::new(e.to_string());
            error!(key, error = %e, "Malformed stats response");
            UpstreamError::new(key)
        })?;

        self.cache.lock().put(key, stats.clone());
        debug!("Cached fresh stats");
        Ok(stats)
    }
}

impl<T: StatsTransport + 'static> StatsFetcher<T> {
    /// Look up stats for `key` on a detached task.
    ///
    /// Dropping the returned future does not cancel the lookup: the task keeps
    /// running, and a successful result still lands in the cache for the next
    /// request.
    #[instrument(skip(self))]
    pub async fn fetch_stats_detached(self: &Arc<Self>, key: &str) -> FetchResult<StatsResult> {
        let fetcher = Arc::clone(self);
        let owned_key = key.to_string();
        let task = tokio::spawn(async move { fetcher.fetch_stats(&owned_key).await });

        match task.await {
            Ok(result) => result,
            Err(e) => {
                error!(key, error = %e, "Stats fetch task did not complete");
                Err(UpstreamError::new(key))
            }
        }
    }
}
