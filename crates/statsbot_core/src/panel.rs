//! Presentation of stats results.
//!
//! This is the only place absent statistics become the `"N/A"` marker.

use crate::{StatValue, StatsResult};
use derive_getters::Getters;

/// Marker shown for a statistic the API did not report.
pub const NOT_AVAILABLE: &str = "N/A";

const PANEL_COLOUR: u32 = 0xFF0000;
const PANEL_FOOTER: &str = "Data from Free Fire API";

/// One labelled value on a stats panel.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PanelField {
    #[getter(skip)]
    name: &'static str,
    value: String,
    inline: bool,
}

impl PanelField {
    /// Get field `name` from instance of `PanelField`.
    pub fn name(&self) -> &&'static str {
        &self.name
    }
}

/// Platform-neutral stats reply: a titled panel of labelled fields.
///
/// # Examples
///
/// ```
/// use statsbot_core::{StatValue, StatsPanel, StatsResult};
///
/// let stats = StatsResult {
///     level: Some(StatValue::Integer(42)),
///     ..Default::default()
/// };
/// let panel = StatsPanel::from_result("123", &stats);
///
/// assert_eq!(panel.title(), "🎮 Free Fire Stats — 123");
/// assert_eq!(panel.fields()[0].value(), "42");
/// assert_eq!(panel.fields()[1].value(), "N/A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct StatsPanel {
    title: String,
    fields: Vec<PanelField>,
    colour: u32,
    #[getter(skip)]
    footer: &'static str,
}

impl StatsPanel {
    /// Build the panel for `key` from its stats, defaulting absent fields.
    pub fn from_result(key: &str, stats: &StatsResult) -> Self {
        let name = stats.display_name().unwrap_or(key);
        let field = |label: &'static str, value: &Option<StatValue>| PanelField {
            name: label,
            value: value
                .as_ref()
                .map_or_else(|| NOT_AVAILABLE.to_string(), ToString::to_string),
            inline: true,
        };

        Self {
            title: format!("🎮 Free Fire Stats — {}", name),
            fields: vec![
                field("⭐ Level", &stats.level),
                field("🏆 Rank", &stats.rank),
                field("🔫 Kills", &stats.kills),
                field("⚔️ Matches", &stats.matches),
                field("🔥 K/D", &stats.kd),
            ],
            colour: PANEL_COLOUR,
            footer: PANEL_FOOTER,
        }
    }

    /// Get field `footer` from instance of `StatsPanel`.
    pub fn footer(&self) -> &&'static str {
        &self.footer
    }
}

/// Plain-text reply for a lookup that could not be answered.
///
/// # Examples
///
/// ```
/// assert_eq!(
///     statsbot_core::failure_message("123"),
///     "❌ Could not get stats for ID: 123"
/// );
/// ```
pub fn failure_message(key: &str) -> String {
    format!("❌ Could not get stats for ID: {}", key)
}
