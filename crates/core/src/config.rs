//! Configuration system for the pipeline animation.
//!
//! This module defines the timing knobs shared by the simulation core and the
//! terminal front end. It provides:
//! 1. **Defaults:** Baseline tick period, first-tick delay, and hold margin.
//! 2. **Structure:** A flat [`Config`] deserialized from JSON, every field optional.
//! 3. **Loading:** `Config::from_file` with a typed [`ConfigError`].
//!
//! Configuration is supplied via a JSON file (`pipevis --config timing.json`)
//! or falls back to `Config::default()` for flag-less runs.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::predictor::PredictorKind;

/// Default configuration constants for the animation.
///
/// These values define the baseline pacing when not explicitly overridden in
/// a JSON configuration file.
mod defaults {
    /// Animation tick period in milliseconds.
    ///
    /// Every armed timer fires once per period; each firing advances the
    /// simulation by one clock cycle.
    pub const TICK_PERIOD_MS: u64 = 500;

    /// Delay before the first tick after a timer is armed (milliseconds).
    ///
    /// Gives the viewer a beat to see the initial instruction positions
    /// before the animation starts moving.
    pub const FIRST_TICK_DELAY_MS: u64 = 1_000;

    /// Margin subtracted from the period to get the hold time (milliseconds).
    ///
    /// After a tick the instruction blocks stay painted for
    /// `period - margin`, then clear until the next tick. The margin is the
    /// blank gap that makes consecutive steps readable.
    pub const HOLD_MARGIN_MS: u64 = 100;
}

/// Root configuration structure for the animation.
///
/// Every field is optional in JSON; missing fields fall back to the defaults.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use pipevis_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.tick_period_ms, 500);
/// assert_eq!(config.first_tick_delay_ms, 1000);
/// ```
///
/// Deserializing a partial override from JSON:
///
/// ```
/// use pipevis_core::config::Config;
/// use pipevis_core::predictor::PredictorKind;
///
/// let json = r#"{
///     "tick_period_ms": 250,
///     "initial_variant": "PredictTaken"
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.tick_period_ms, 250);
/// assert_eq!(config.hold_margin_ms, 100);
/// assert_eq!(config.initial_variant, PredictorKind::PredictTaken);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Animation tick period in milliseconds
    #[serde(default = "Config::default_tick_period_ms")]
    pub tick_period_ms: u64,

    /// Delay before the first tick after a timer is armed, in milliseconds
    #[serde(default = "Config::default_first_tick_delay_ms")]
    pub first_tick_delay_ms: u64,

    /// Blank gap between held frames, in milliseconds (subtracted from the period)
    #[serde(default = "Config::default_hold_margin_ms")]
    pub hold_margin_ms: u64,

    /// Variant tab selected at startup
    #[serde(default)]
    pub initial_variant: PredictorKind,
}

impl Config {
    /// Returns the default tick period in milliseconds.
    const fn default_tick_period_ms() -> u64 {
        defaults::TICK_PERIOD_MS
    }

    /// Returns the default first-tick delay in milliseconds.
    const fn default_first_tick_delay_ms() -> u64 {
        defaults::FIRST_TICK_DELAY_MS
    }

    /// Returns the default hold margin in milliseconds.
    const fn default_hold_margin_ms() -> u64 {
        defaults::HOLD_MARGIN_MS
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are not valid configuration
    /// JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Tick period as a [`Duration`].
    pub const fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    /// Delay before the first tick of a newly armed timer.
    pub const fn first_tick_delay(&self) -> Duration {
        Duration::from_millis(self.first_tick_delay_ms)
    }

    /// How long a ticked frame stays painted before it clears.
    ///
    /// Saturates to zero when the margin meets or exceeds the period, so no
    /// combination of overrides can underflow.
    pub const fn hold(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms.saturating_sub(self.hold_margin_ms))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_period_ms: defaults::TICK_PERIOD_MS,
            first_tick_delay_ms: defaults::FIRST_TICK_DELAY_MS,
            hold_margin_ms: defaults::HOLD_MARGIN_MS,
            initial_variant: PredictorKind::default(),
        }
    }
}

/// Errors produced while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON for [`Config`].
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
