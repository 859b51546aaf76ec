//! Runtime configuration.
//!
//! Configuration sources in order of precedence (later sources override earlier):
//! 1. Bundled defaults (include_str! from statsbot.toml)
//! 2. User config in home directory (~/.config/statsbot/statsbot.toml)
//! 3. User config in current directory (./statsbot.toml)
//! 4. Environment variables

use config::{Config, ConfigBuilder, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use statsbot_error::{ConfigError, StatsbotError, StatsbotResult};
use std::time::Duration;
use tracing::{debug, instrument};

// Bundled default configuration
const DEFAULT_CONFIG: &str = include_str!("../../../statsbot.toml");

/// Environment variables recognised for each configuration key, first match wins.
const ENV_OVERRIDES: &[(&str, &[&str])] = &[
    ("api_base", &["API_BASE", "FF_API_BASE"]),
    ("api_key", &["API_KEY", "FF_API_KEY"]),
    ("stats_path", &["STATSBOT_STATS_PATH"]),
    ("cache_ttl_secs", &["STATSBOT_CACHE_TTL_SECS"]),
    ("min_interval_ms", &["STATSBOT_MIN_INTERVAL_MS"]),
    ("discord.token", &["DISCORD_TOKEN"]),
    ("discord.application_id", &["CLIENT_ID"]),
    ("discord.guild_id", &["GUILD_ID"]),
];

/// Discord bot credentials. Opaque to the fetch core.
#[derive(Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DiscordConfig {
    /// Bot token from the Discord Developer Portal
    #[serde(default)]
    pub token: Option<String>,

    /// Application (client) id used when building the client
    #[serde(default)]
    pub application_id: Option<u64>,

    /// Guild to register the slash command in; global registration when unset
    #[serde(default)]
    pub guild_id: Option<u64>,
}

impl std::fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("application_id", &self.application_id)
            .field("guild_id", &self.guild_id)
            .finish()
    }
}

/// Top-level statsbot configuration.
///
/// # Example
///
/// ```no_run
/// use statsbot_rate_limit::StatsbotConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StatsbotConfig::load()?;
/// println!("Stats API: {}", config.api_base);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StatsbotConfig {
    /// Base URL of the stats API
    pub api_base: String,

    /// API key sent in the query string
    #[serde(default)]
    pub api_key: String,

    /// Fixed path segment between the base URL and the lookup key
    pub stats_path: String,

    /// Cache TTL in seconds
    pub cache_ttl_secs: u64,

    /// Minimum spacing between outbound calls in milliseconds
    pub min_interval_ms: u64,

    /// Discord credentials
    #[serde(default)]
    pub discord: DiscordConfig,
}

impl std::fmt::Debug for StatsbotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatsbotConfig")
            .field("api_base", &self.api_base)
            .field("api_key", &if self.api_key.is_empty() { "" } else { "<redacted>" })
            .field("stats_path", &self.stats_path)
            .field("cache_ttl_secs", &self.cache_ttl_secs)
            .field("min_interval_ms", &self.min_interval_ms)
            .field("discord", &self.discord)
            .finish()
    }
}

impl StatsbotConfig {
    /// Load configuration from every source, reading the process environment.
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> StatsbotResult<Self> {
        debug!("Loading configuration: env > current dir > home dir > bundled defaults");

        let mut builder = Self::defaults();

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/statsbot/statsbot.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional)
        builder = builder.add_source(File::with_name("statsbot").required(false));

        let builder = Self::apply_env(builder, |name| std::env::var(name).ok())?;
        Self::finish(builder)
    }

    /// Load bundled defaults overridden by variables from `lookup`.
    ///
    /// `lookup` stands in for the process environment, which keeps tests
    /// hermetic.
    #[instrument(skip(lookup))]
    pub fn load_with<F>(lookup: F) -> StatsbotResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let builder = Self::apply_env(Self::defaults(), lookup)?;
        Self::finish(builder)
    }

    /// Load bundled defaults overridden by a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> StatsbotResult<Self> {
        debug!("Loading configuration from file");
        let builder = Self::defaults().add_source(File::from(path.as_ref()));
        Self::finish(builder)
    }

    /// Cache TTL as a duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Minimum outbound call spacing as a duration.
    pub fn min_interval(&self) -> Duration {
        Duration::from_millis(self.min_interval_ms)
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn apply_env<F>(
        mut builder: ConfigBuilder<DefaultState>,
        lookup: F,
    ) -> StatsbotResult<ConfigBuilder<DefaultState>>
    where
        F: Fn(&str) -> Option<String>,
    {
        for (key, names) in ENV_OVERRIDES {
            let found = names
                .iter()
                .find_map(|name| lookup(*name).filter(|v| !v.is_empty()).map(|v| (*name, v)));

            if let Some((name, value)) = found {
                debug!(key, var = name, "Applying environment override");
                builder = builder.set_override(*key, value).map_err(|e| {
                    StatsbotError::from(ConfigError::new(format!(
                        "Failed to apply {}: {}",
                        name, e
                    )))
                })?;
            }
        }
        Ok(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> StatsbotResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                StatsbotError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StatsbotError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        if config.api_base.trim().is_empty() {
            return Err(ConfigError::new("api_base must not be empty").into());
        }
        Ok(config)
    }
}
