//! Player statistics record.

use serde::{Deserialize, Serialize};

/// A single statistic as the API reports it.
///
/// The API is loose about types (a rank may be a number, a tier name, or an
/// object), so any JSON value is accepted and rendered back the way it arrived.
/// Arrays and objects render as compact JSON.
///
/// # Examples
///
/// ```
/// use statsbot_core::StatValue;
///
/// assert_eq!(StatValue::Integer(42).to_string(), "42");
/// assert_eq!(StatValue::Float(1.5).to_string(), "1.5");
/// assert_eq!(StatValue::Text("Heroic".into()).to_string(), "Heroic");
/// assert_eq!(
///     StatValue::Other(serde_json::json!({"tier": "Heroic"})).to_string(),
///     r#"{"tier":"Heroic"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_more::Display)]
#[serde(untagged)]
pub enum StatValue {
    /// Whole number
    #[display("{_0}")]
    Integer(i64),
    /// Fractional number, e.g. a kill/death ratio
    #[display("{_0}")]
    Float(f64),
    /// Free text, e.g. a rank tier name
    #[display("{_0}")]
    Text(String),
    /// Boolean flag
    #[display("{_0}")]
    Bool(bool),
    /// Any other JSON value, e.g. a nested rank object
    #[display("{_0}")]
    Other(serde_json::Value),
}

/// Player statistics returned by the stats API.
///
/// Every field is optional. Missing and `null` fields deserialize to `None`
/// and unknown fields are ignored.
///
/// # Examples
///
/// ```
/// use statsbot_core::{StatValue, StatsResult};
///
/// let stats: StatsResult = serde_json::from_str(r#"{"level": 42, "kills": 10}"#).unwrap();
/// assert_eq!(stats.level, Some(StatValue::Integer(42)));
/// assert_eq!(stats.kills, Some(StatValue::Integer(10)));
/// assert!(stats.rank.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsResult {
    /// In-game display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Account level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<StatValue>,
    /// Ranked tier or position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<StatValue>,
    /// Total kills
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kills: Option<StatValue>,
    /// Total matches played
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<StatValue>,
    /// Kill/death ratio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kd: Option<StatValue>,
}

impl StatsResult {
    /// Display name to show for this player, if the API supplied a non-empty one.
    pub fn display_name(&self) -> Option<&str> {
        self.username.as_deref().filter(|name| !name.is_empty())
    }
}
