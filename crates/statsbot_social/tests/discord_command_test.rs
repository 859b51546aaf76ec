//! Tests for the `/ff` command definition and reply rendering.

#![cfg(feature = "discord")]

use serde_json::Value;
use statsbot_core::{StatValue, StatsPanel, StatsResult};
use statsbot_social::{
    DiscordError, DiscordErrorKind, StatsReply, edit_response, ff_command, render_embed,
};

fn json<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).expect("builder serializes")
}

#[test]
fn test_command_shape() {
    let command = json(&ff_command());

    assert_eq!(command["name"], "ff");
    assert_eq!(command["description"], "Check Free Fire stats by ID");

    let options = command["options"].as_array().expect("options array");
    assert_eq!(options.len(), 1);
    assert_eq!(options[0]["name"], "id");
    assert_eq!(options[0]["description"], "Enter Free Fire Player ID");
    assert_eq!(options[0]["required"], true);
    // String option type
    assert_eq!(options[0]["type"], 3);
}

#[test]
fn test_embed_carries_panel() {
    let stats = StatsResult {
        username: Some("Nova".to_string()),
        kills: Some(StatValue::Integer(1200)),
        ..Default::default()
    };
    let embed = json(&render_embed(&StatsPanel::from_result("123", &stats)));

    assert_eq!(embed["title"], "🎮 Free Fire Stats — Nova");
    assert_eq!(embed["footer"]["text"], "Data from Free Fire API");
    assert!(embed["timestamp"].is_string());

    let fields = embed["fields"].as_array().expect("fields array");
    assert_eq!(fields.len(), 5);
    assert_eq!(fields[2]["name"], "🔫 Kills");
    assert_eq!(fields[2]["value"], "1200");
    assert_eq!(fields[0]["value"], "N/A");
    assert!(fields.iter().all(|f| f["inline"] == true));
}

#[test]
fn test_failure_reply_is_plain_content() {
    let reply = StatsReply::Failure("❌ Could not get stats for ID: 9".to_string());
    let edit = json(&edit_response(&reply));

    assert_eq!(edit["content"], "❌ Could not get stats for ID: 9");
}

#[test]
fn test_discord_error_tracks_location() {
    let err = DiscordError::new(DiscordErrorKind::ConfigurationError("missing".to_string()));

    assert!(err.file().ends_with("discord_command_test.rs"));
    assert!(err.to_string().contains("Configuration error: missing"));
}
