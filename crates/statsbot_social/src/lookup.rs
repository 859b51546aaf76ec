//! Platform-neutral handling of a stats lookup command.

use statsbot_api::{StatsFetcher, StatsTransport};
use statsbot_core::{StatsPanel, failure_message};
use std::sync::Arc;
use tracing::{instrument, warn};

/// Name of the lookup command.
pub const LOOKUP_COMMAND: &str = "ff";

/// Name of the command's single string option carrying the lookup key.
pub const LOOKUP_OPTION: &str = "id";

/// Reply to a lookup command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsReply {
    /// Stats panel for a successful lookup
    Panel(StatsPanel),
    /// Plain-text message for a lookup that could not be answered
    Failure(String),
}

/// Validate the raw option value into a lookup key.
///
/// Surrounding whitespace is dropped. Blank values and the dot segments `.`
/// and `..` are not keys.
///
/// # Examples
///
/// ```
/// use statsbot_social::parse_lookup_key;
///
/// assert_eq!(parse_lookup_key(" 123 "), Some("123"));
/// assert_eq!(parse_lookup_key("   "), None);
/// assert_eq!(parse_lookup_key(".."), None);
/// ```
pub fn parse_lookup_key(raw: &str) -> Option<&str> {
    let key = raw.trim();
    (!matches!(key, "" | "." | "..")).then_some(key)
}

/// Answer a lookup for `raw_key`.
///
/// The fetch runs detached, so abandoning this future still lets the result
/// reach the cache.
#[instrument(skip(fetcher))]
pub async fn answer_lookup<T>(fetcher: &Arc<StatsFetcher<T>>, raw_key: &str) -> StatsReply
where
    T: StatsTransport + 'static,
{
    let Some(key) = parse_lookup_key(raw_key) else {
        warn!("Rejected invalid lookup key");
        return StatsReply::Failure(failure_message(raw_key));
    };

    match fetcher.fetch_stats_detached(key).await {
        Ok(stats) => StatsReply::Panel(StatsPanel::from_result(key, &stats)),
        Err(e) => {
            warn!(error = %e, "Lookup failed");
            StatsReply::Failure(failure_message(key))
        }
    }
}
