//! Outbound HTTP transport for the stats API.

use async_trait::async_trait;
use reqwest::{Client, Url};
use statsbot_error::{ConfigError, HttpError, StatsbotResult};
use statsbot_rate_limit::StatsbotConfig;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Issues the single outbound call behind a stats lookup.
///
/// Implementations return the raw response body and report network errors and
/// non-success statuses as [`HttpError`]. Parsing is left to the caller.
#[async_trait]
pub trait StatsTransport: Send + Sync {
    /// Fetch the raw stats body for `key`.
    async fn fetch_raw(&self, key: &str) -> Result<String, HttpError>;
}

#[async_trait]
impl<T: StatsTransport + ?Sized> StatsTransport for Arc<T> {
    async fn fetch_raw(&self, key: &str) -> Result<String, HttpError> {
        (**self).fetch_raw(key).await
    }
}

/// [`StatsTransport`] over HTTP GET using reqwest.
///
/// Requests go to `{api_base}/{stats_path}/{key}?key={api_key}` with the lookup
/// key escaped as a single path segment and the API key form-encoded in the
/// query. No timeout is set beyond reqwest's defaults.
#[derive(Debug, Clone)]
pub struct HttpStatsTransport {
    client: Client,
    base_url: Url,
    stats_path: String,
    api_key: String,
}

impl HttpStatsTransport {
    /// Create a transport for the API at `api_base`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `api_base` is not an absolute URL that
    /// can carry a path.
    #[instrument(skip(stats_path, api_key))]
    pub fn new(
        api_base: &str,
        stats_path: impl Into<String>,
        api_key: impl Into<String>,
    ) -> StatsbotResult<Self> {
        let base_url = Url::parse(api_base)
            .map_err(|e| ConfigError::new(format!("Invalid api_base '{}': {}", api_base, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::new(format!("api_base '{}' cannot carry a path", api_base)).into());
        }

        Ok(Self {
            client: Client::new(),
            base_url,
            stats_path: stats_path.into(),
            api_key: api_key.into(),
        })
    }

    /// Create a transport from loaded configuration.
    pub fn from_config(config: &StatsbotConfig) -> StatsbotResult<Self> {
        Self::new(&config.api_base, config.stats_path.clone(), config.api_key.clone())
    }

    /// Full request URL for `key`.
    ///
    /// # Errors
    ///
    /// Returns an error for keys that cannot be carried as a path segment:
    /// the empty key, `.` and `..`. URL normalization would drop them and
    /// the request would reach the collection path instead.
    pub fn request_url(&self, key: &str) -> Result<Url, HttpError> {
        if matches!(key, "" | "." | "..") {
            return Err(HttpError::new(format!(
                "Lookup key '{}' is not a valid path segment",
                key
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| HttpError::new(format!("Base URL cannot carry a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(self.stats_path.split('/').filter(|s| !s.is_empty()))
            .push(key);
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }
}

#[async_trait]
impl StatsTransport for HttpStatsTransport {
    #[instrument(skip(self))]
    async fn fetch_raw(&self, key: &str) -> Result<String, HttpError> {
        let url = self.request_url(key)?;
        // Log without the query string, it carries the API key
        debug!(path = url.path(), "Sending stats API request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HttpError::new(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::with_status(
                status.as_u16(),
                format!("Stats API returned {}", status),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| HttpError::new(format!("Failed to read response body: {}", e)))?;

        debug!(status = status.as_u16(), body_len = body.len(), "Stats API responded");
        Ok(body)
    }
}
