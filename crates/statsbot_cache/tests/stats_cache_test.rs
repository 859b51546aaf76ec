//! Tests for the stats cache.

use statsbot_cache::{StatsCache, StatsCacheConfig, StatsCacheConfigBuilder};
use std::time::Duration;
use tokio::time::advance;

#[tokio::test(start_paused = true)]
async fn test_cache_put_and_get() {
    let mut cache = StatsCache::new(StatsCacheConfig::default());

    cache.put("123", "level 42".to_string());

    assert_eq!(cache.get("123").map(String::as_str), Some("level 42"));
}

#[tokio::test(start_paused = true)]
async fn test_cache_miss() {
    let cache: StatsCache<String> = StatsCache::default();
    assert!(cache.get("123").is_none());
}

#[tokio::test(start_paused = true)]
async fn test_hit_just_before_expiry() {
    let mut cache = StatsCache::with_ttl(Duration::from_secs(60));
    cache.put("123", 1u32);

    advance(Duration::from_millis(59_999)).await;

    assert_eq!(cache.get("123"), Some(&1));
}

#[tokio::test(start_paused = true)]
async fn test_expired_at_exact_expiry() {
    let mut cache = StatsCache::with_ttl(Duration::from_secs(60));
    cache.put("123", 1u32);

    advance(Duration::from_secs(60)).await;

    assert!(cache.get("123").is_none());
}

#[tokio::test(start_paused = true)]
async fn test_get_does_not_remove_expired_entry() {
    let mut cache = StatsCache::with_ttl(Duration::from_secs(60));
    cache.put("123", 1u32);

    advance(Duration::from_secs(61)).await;

    assert!(cache.get("123").is_none());
    assert_eq!(cache.len(), 1);
    assert!(cache.entry("123").unwrap().is_expired());
}

#[tokio::test(start_paused = true)]
async fn test_put_overwrites_and_restarts_ttl() {
    let mut cache = StatsCache::with_ttl(Duration::from_secs(60));
    cache.put("123", "old".to_string());

    advance(Duration::from_secs(61)).await;
    cache.put("123", "new".to_string());

    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get("123").map(String::as_str), Some("new"));

    advance(Duration::from_secs(59)).await;
    assert_eq!(cache.get("123").map(String::as_str), Some("new"));
}

#[tokio::test(start_paused = true)]
async fn test_put_replaces_live_entry() {
    let mut cache = StatsCache::with_ttl(Duration::from_secs(60));
    cache.put("123", 1u32);
    advance(Duration::from_secs(30)).await;
    cache.put("123", 2u32);

    advance(Duration::from_secs(45)).await;

    assert_eq!(cache.get("123"), Some(&2));
    assert_eq!(
        cache.entry("123").unwrap().time_remaining(),
        Some(Duration::from_secs(15))
    );
}

#[tokio::test(start_paused = true)]
async fn test_keys_are_independent() {
    let mut cache = StatsCache::with_ttl(Duration::from_secs(60));
    cache.put("1", 100u32);
    advance(Duration::from_secs(30)).await;
    cache.put("2", 200u32);
    advance(Duration::from_secs(31)).await;

    assert!(cache.get("1").is_none());
    assert_eq!(cache.get("2"), Some(&200));
}

#[tokio::test(start_paused = true)]
async fn test_purge_expired() {
    let mut cache = StatsCache::with_ttl(Duration::from_secs(60));
    cache.put("1", 1u32);
    cache.put("2", 2u32);
    advance(Duration::from_secs(40)).await;
    cache.put("3", 3u32);
    advance(Duration::from_secs(20)).await;

    let removed = cache.purge_expired();

    assert_eq!(removed, 2);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get("3"), Some(&3));
}

#[tokio::test(start_paused = true)]
async fn test_clear() {
    let mut cache = StatsCache::with_ttl(Duration::from_secs(60));
    cache.put("1", 1u32);
    cache.put("2", 2u32);

    cache.clear();

    assert!(cache.is_empty());
    assert!(cache.get("1").is_none());
}

#[test]
fn test_config_builder_and_defaults() {
    let config = StatsCacheConfigBuilder::default().build().unwrap();
    assert_eq!(*config.ttl_secs(), 60);

    let config = StatsCacheConfig::default().with_ttl_secs(5);
    let cache: StatsCache<u32> = StatsCache::new(config);
    assert_eq!(cache.ttl(), Duration::from_secs(5));
}
