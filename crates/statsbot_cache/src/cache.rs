//! Stats cache implementation.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;

/// Cache entry with value and expiration.
#[derive(Debug, Clone, Getters)]
pub struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

impl<V> CacheEntry<V> {
    /// Check if this entry is expired.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    /// Get remaining time until expiration.
    pub fn time_remaining(&self) -> Option<Duration> {
        self.expires_at.checked_duration_since(Instant::now())
    }
}

/// Configuration for the stats cache.
#[derive(
    Debug, Clone, Serialize, Deserialize, Getters, derive_setters::Setters, derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct StatsCacheConfig {
    /// TTL for cached entries (seconds)
    #[serde(default = "default_ttl_secs")]
    #[builder(default = "default_ttl_secs()")]
    ttl_secs: u64,
}

fn default_ttl_secs() -> u64 {
    60
}

impl Default for StatsCacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

/// TTL cache for lookup results.
///
/// Every entry lives for the same fixed TTL from the moment it is written.
/// Expiry is lazy: `get` treats an expired entry as a miss but leaves it in
/// place until the next `put` for that key overwrites it, or until
/// [`purge_expired`](Self::purge_expired) is called explicitly.
///
/// There is no capacity bound and no LRU eviction. Key cardinality is bounded
/// by human-driven lookups; a long-running process with many distinct keys
/// should call `purge_expired` periodically.
///
/// # Example
///
/// ```
/// use statsbot_cache::{StatsCache, StatsCacheConfig};
///
/// let mut cache = StatsCache::new(StatsCacheConfig::default());
///
/// cache.put("123", "level 42".to_string());
///
/// if let Some(value) = cache.get("123") {
///     println!("Cached: {}", value);
/// }
/// ```
#[derive(Debug)]
pub struct StatsCache<V> {
    ttl: Duration,
    entries: HashMap<String, CacheEntry<V>>,
}

impl<V> StatsCache<V> {
    /// Create a new stats cache with configuration.
    pub fn new(config: StatsCacheConfig) -> Self {
        Self::with_ttl(Duration::from_secs(config.ttl_secs))
    }

    /// Create a new stats cache with an explicit TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        tracing::debug!(ttl = ?ttl, "Creating new StatsCache");
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// TTL applied to every entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Get the cached value for `key`.
    ///
    /// Returns None if no entry exists or the entry has reached its expiry.
    /// An expired entry is not removed.
    #[tracing::instrument(skip(self), fields(cache_size = self.entries.len()))]
    pub fn get(&self, key: &str) -> Option<&V> {
        let entry = self.entries.get(key)?;
        if entry.is_expired() {
            tracing::debug!("Cache entry expired");
            return None;
        }

        tracing::debug!(time_remaining = ?entry.time_remaining(), "Cache hit");
        Some(&entry.value)
    }

    /// Raw entry for `key`, expired or not.
    pub fn entry(&self, key: &str) -> Option<&CacheEntry<V>> {
        self.entries.get(key)
    }

    /// Store `value` under `key`, replacing any previous entry.
    #[tracing::instrument(skip(self, value), fields(cache_size = self.entries.len()))]
    pub fn put(&mut self, key: &str, value: V) {
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + self.ttl,
        };

        let replaced = self.entries.insert(key.to_string(), entry).is_some();
        tracing::debug!(replaced, ttl = ?self.ttl, "Inserted entry into cache");
    }

    /// Remove expired entries from cache.
    pub fn purge_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());

        let removed = before - self.entries.len();
        if removed > 0 {
            tracing::info!(removed, remaining = self.entries.len(), "Purged expired cache entries");
        }
        removed
    }

    /// Clear all cache entries.
    pub fn clear(&mut self) {
        let count = self.entries.len();
        self.entries.clear();
        tracing::info!(cleared = count, "Cleared cache");
    }

    /// Get number of stored entries, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for StatsCache<V> {
    fn default() -> Self {
        Self::new(StatsCacheConfig::default())
    }
}
