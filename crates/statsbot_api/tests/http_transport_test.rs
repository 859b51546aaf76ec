//! Tests for the reqwest-backed stats transport.

use statsbot_api::{HttpStatsTransport, StatsFetcher, StatsTransport};
use statsbot_cache::StatsCache;
use statsbot_core::StatValue;
use statsbot_rate_limit::{RateGate, StatsbotConfig};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_request_url_layout() {
    let transport = HttpStatsTransport::new("https://api.example.com", "ff/stats", "k").unwrap();
    let url = transport.request_url("123").unwrap();
    assert_eq!(url.as_str(), "https://api.example.com/ff/stats/123?key=k");
}

#[test]
fn test_request_url_escapes_key_and_api_key() {
    let transport = HttpStatsTransport::new("https://api.example.com", "ff/stats", "a b&c").unwrap();
    let url = transport.request_url("12/3 4").unwrap();
    assert_eq!(
        url.as_str(),
        "https://api.example.com/ff/stats/12%2F3%204?key=a+b%26c"
    );
}

#[test]
fn test_request_url_keeps_base_path() {
    let transport = HttpStatsTransport::new("https://host.test/v1/", "ff/stats", "").unwrap();
    let url = transport.request_url("9").unwrap();
    assert_eq!(url.as_str(), "https://host.test/v1/ff/stats/9?key=");
}

#[test]
fn test_request_url_rejects_dot_segments() {
    let transport = HttpStatsTransport::new("https://api.example.com", "ff/stats", "k").unwrap();

    assert!(transport.request_url("..").is_err());
    assert!(transport.request_url(".").is_err());
    assert!(transport.request_url("").is_err());
    assert_eq!(
        transport.request_url("...").unwrap().as_str(),
        "https://api.example.com/ff/stats/...?key=k"
    );
    assert_eq!(
        transport.request_url("a.b").unwrap().as_str(),
        "https://api.example.com/ff/stats/a.b?key=k"
    );
}

#[test]
fn test_invalid_base_rejected() {
    assert!(HttpStatsTransport::new("not a url", "ff/stats", "").is_err());
    assert!(HttpStatsTransport::new("mailto:stats@example.com", "ff/stats", "").is_err());
}

#[test]
fn test_from_config() {
    let config = StatsbotConfig::load_with(|name| match name {
        "API_BASE" => Some("https://cfg.test".to_string()),
        "API_KEY" => Some("cfg-key".to_string()),
        _ => None,
    })
    .unwrap();

    let transport = HttpStatsTransport::from_config(&config).unwrap();
    let url = transport.request_url("1").unwrap();
    assert_eq!(url.as_str(), "https://cfg.test/ff/stats/1?key=cfg-key");
}

#[tokio::test]
async fn test_fetch_raw_returns_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ff/stats/123"))
        .and(query_param("key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"level": 42}"#))
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpStatsTransport::new(&server.uri(), "ff/stats", "secret").unwrap();
    let body = transport.fetch_raw("123").await.unwrap();

    assert_eq!(body, r#"{"level": 42}"#);
}

#[tokio::test]
async fn test_fetch_raw_escaped_key_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ff/stats/12%203"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpStatsTransport::new(&server.uri(), "ff/stats", "").unwrap();
    assert!(transport.fetch_raw("12 3").await.is_ok());
}

#[tokio::test]
async fn test_non_success_status_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let transport = HttpStatsTransport::new(&server.uri(), "ff/stats", "").unwrap();
    let err = transport.fetch_raw("123").await.unwrap_err();

    assert_eq!(err.status, Some(404));
}

#[tokio::test]
async fn test_connection_failure_is_error() {
    // Bind and release a port so nothing is listening on it.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let uri = format!("http://127.0.0.1:{}", port);

    let transport = HttpStatsTransport::new(&uri, "ff/stats", "").unwrap();
    let err = transport.fetch_raw("123").await.unwrap_err();

    assert!(err.status.is_none());
}

#[tokio::test]
async fn test_fetcher_over_http_caches_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ff/stats/123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "username": "Nova",
            "level": 42,
            "kd": 1.25
        })))
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpStatsTransport::new(&server.uri(), "ff/stats", "").unwrap();
    let fetcher = StatsFetcher::new(
        transport,
        StatsCache::with_ttl(Duration::from_secs(60)),
        Arc::new(RateGate::new(Duration::from_millis(10))),
    );

    let first = fetcher.fetch_stats("123").await.unwrap();
    let second = fetcher.fetch_stats("123").await.unwrap();

    assert_eq!(first.username.as_deref(), Some("Nova"));
    assert_eq!(first.kd, Some(StatValue::Float(1.25)));
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_fetcher_over_http_server_error_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let transport = HttpStatsTransport::new(&server.uri(), "ff/stats", "").unwrap();
    let fetcher = StatsFetcher::new(
        transport,
        StatsCache::with_ttl(Duration::from_secs(60)),
        Arc::new(RateGate::new(Duration::from_millis(10))),
    );

    assert!(fetcher.fetch_stats("123").await.is_err());
    assert!(fetcher.fetch_stats("123").await.is_err());
    assert!(fetcher.cached("123").is_none());
}

#[tokio::test]
async fn test_dot_key_never_reaches_collection_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"level": 1}"#))
        .expect(0)
        .mount(&server)
        .await;

    let transport = HttpStatsTransport::new(&server.uri(), "ff/stats", "").unwrap();
    let fetcher = StatsFetcher::new(
        transport,
        StatsCache::with_ttl(Duration::from_secs(60)),
        Arc::new(RateGate::new(Duration::from_millis(10))),
    );

    for key in [".", ".."] {
        let err = fetcher.fetch_stats(key).await.unwrap_err();
        assert_eq!(err.key, key);
        assert!(fetcher.cached(key).is_none());
    }
    assert_eq!(fetcher.cache_len(), 0);
}
