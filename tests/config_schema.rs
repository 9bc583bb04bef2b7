//! Config Schema Boundary Tests
//!
//! Validates: config defaults, unknown-key tolerance, invalid input rejection,
//! and replaying a message log through a tracker built from config.

use msgtracker::config::{Config, ReplayConfig};
use msgtracker::replay::{replay, ReplaySummary};
use std::io::BufReader;

// ─────────────────────────────────────────────────────────────────────────────
// Invalid value fail-fast
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn config_unknown_keys_parse_without_error() {
    let toml_str = r#"
totally_unknown_key = "should be ignored"

[tracker]
capacity = 32
another_fake = 42
"#;
    let parsed: Config = toml::from_str(toml_str).expect("unknown keys should be ignored");
    assert_eq!(parsed.tracker.capacity, 32);
}

#[test]
fn config_wrong_type_for_capacity_fails() {
    let toml_str = r#"
[tracker]
capacity = "lots"
"#;
    let result: Result<Config, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "string for usize capacity should fail to parse");
}

#[test]
fn config_negative_capacity_fails() {
    let toml_str = r#"
[tracker]
capacity = -1
"#;
    let result: Result<Config, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "negative capacity should fail for usize");
}

#[test]
fn config_zero_capacity_parses_but_fails_validation() {
    let toml_str = r#"
[tracker]
capacity = 0
"#;
    let parsed: Config = toml::from_str(toml_str).unwrap();
    assert!(parsed.validate().is_err());
}

// ─────────────────────────────────────────────────────────────────────────────
// Defaults
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn config_default_round_trips_through_toml() {
    let config = Config::default();
    let rendered = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&rendered).unwrap();

    assert_eq!(parsed, config);
    assert!(parsed.validate().is_ok());
}

// ─────────────────────────────────────────────────────────────────────────────
// Config-driven replay
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn replay_file_through_configured_tracker() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("gossip.jsonl");
    let mut log = String::new();
    for i in 0..10 {
        log.push_str(&format!(
            "{{\"id\":\"someID{i}\",\"peer_id\":\"somePeerID{i}\",\"data\":\"AAEB\"}}\n"
        ));
    }
    log.push_str("{\"id\":\"someID9\"}\n");
    std::fs::write(&log_path, log).unwrap();

    let mut config = Config::default();
    config.tracker.capacity = 5;
    let tracker = config.build_tracker().unwrap();

    let file = std::fs::File::open(&log_path).unwrap();
    let summary = replay(
        BufReader::new(file),
        &tracker,
        &ReplayConfig::default(),
    )
    .unwrap();

    assert_eq!(
        summary,
        ReplaySummary {
            lines: 11,
            accepted: 10,
            duplicates: 1,
            rejected: 0,
            evicted: 5,
        }
    );
    let ids: Vec<String> = tracker.messages().iter().map(|m| m.id.clone()).collect();
    assert_eq!(ids, vec!["someID5", "someID6", "someID7", "someID8", "someID9"]);
    assert_eq!(tracker.message("someID9").unwrap().data, vec![0u8, 1, 1]);
}
