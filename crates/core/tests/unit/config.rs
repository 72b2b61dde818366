//! # Configuration Tests
//!
//! Tests for configuration defaults, JSON deserialization, file loading, and
//! duration arithmetic.

use std::io::Write;
use std::time::Duration;

use pipevis_core::config::{Config, ConfigError};
use pipevis_core::predictor::PredictorKind;
use tempfile::NamedTempFile;

// ══════════════════════════════════════════════════════════
// 1. Defaults
// ══════════════════════════════════════════════════════════

#[test]
fn config_defaults() {
    let config = Config::default();
    assert_eq!(config.tick_period_ms, 500);
    assert_eq!(config.first_tick_delay_ms, 1000);
    assert_eq!(config.hold_margin_ms, 100);
    assert_eq!(config.initial_variant, PredictorKind::NoPredictor);
}

/// An empty JSON object deserializes to the same values as `default()`.
#[test]
fn empty_json_matches_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    let defaults = Config::default();
    assert_eq!(config.tick_period_ms, defaults.tick_period_ms);
    assert_eq!(config.first_tick_delay_ms, defaults.first_tick_delay_ms);
    assert_eq!(config.hold_margin_ms, defaults.hold_margin_ms);
    assert_eq!(config.initial_variant, defaults.initial_variant);
}

// ══════════════════════════════════════════════════════════
// 2. Deserialization
// ══════════════════════════════════════════════════════════

/// Fields not present in the JSON fall back to their defaults.
#[test]
fn partial_json_overrides_only_named_fields() {
    let config: Config = serde_json::from_str(r#"{ "tick_period_ms": 250 }"#).unwrap();
    assert_eq!(config.tick_period_ms, 250);
    assert_eq!(config.first_tick_delay_ms, 1000);
    assert_eq!(config.hold_margin_ms, 100);
}

#[test]
fn full_json_round() {
    let json = r#"{
        "tick_period_ms": 200,
        "first_tick_delay_ms": 400,
        "hold_margin_ms": 50,
        "initial_variant": "PredictNotTaken"
    }"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.tick_period_ms, 200);
    assert_eq!(config.first_tick_delay_ms, 400);
    assert_eq!(config.hold_margin_ms, 50);
    assert_eq!(config.initial_variant, PredictorKind::PredictNotTaken);
}

/// Every strategy name parses in PascalCase.
#[test]
fn variant_names_parse() {
    for (name, kind) in [
        ("NoPredictor", PredictorKind::NoPredictor),
        ("PredictNotTaken", PredictorKind::PredictNotTaken),
        ("PredictTaken", PredictorKind::PredictTaken),
    ] {
        let json = format!(r#"{{ "initial_variant": "{name}" }}"#);
        let config: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config.initial_variant, kind, "variant {name} should parse");
    }
}

#[test]
fn unknown_variant_is_rejected() {
    let result: Result<Config, _> = serde_json::from_str(r#"{ "initial_variant": "Oracle" }"#);
    assert!(result.is_err(), "unknown variant names must not parse");
}

// ══════════════════════════════════════════════════════════
// 3. File loading
// ══════════════════════════════════════════════════════════

#[test]
fn from_file_loads_json() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{ "tick_period_ms": 125 }"#).unwrap();
    file.flush().unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.tick_period_ms, 125);
}

/// A missing file surfaces as the I/O variant.
#[test]
fn from_file_missing_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");
    let err = Config::from_file(path).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)), "got {err:?}");
}

/// Malformed JSON surfaces as the parse variant.
#[test]
fn from_file_bad_json_is_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{ tick_period_ms: }").unwrap();
    file.flush().unwrap();

    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
}

// ══════════════════════════════════════════════════════════
// 4. Durations
// ══════════════════════════════════════════════════════════

#[test]
fn duration_accessors() {
    let config = Config::default();
    assert_eq!(config.tick_period(), Duration::from_millis(500));
    assert_eq!(config.first_tick_delay(), Duration::from_millis(1000));
    assert_eq!(config.hold(), Duration::from_millis(400));
}

/// The hold time saturates instead of underflowing when the margin exceeds
/// the period.
#[test]
fn hold_saturates_at_zero() {
    let config: Config =
        serde_json::from_str(r#"{ "tick_period_ms": 50, "hold_margin_ms": 100 }"#).unwrap();
    assert_eq!(config.hold(), Duration::ZERO);
}
