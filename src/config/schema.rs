use crate::tracker::MessageTracker;
use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding `tracker.capacity`.
pub const CAPACITY_ENV: &str = "MSGTRACKER_CAPACITY";

/// Top-level configuration, loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Message tracker sizing
    #[serde(default)]
    pub tracker: TrackerConfig,

    /// Replay driver behaviour
    #[serde(default)]
    pub replay: ReplayConfig,
}

/// Message tracker configuration (`[tracker]` section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TrackerConfig {
    /// Maximum number of messages remembered before the oldest is evicted (default: 4096)
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    4096
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

/// Replay driver configuration (`[replay]` section).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReplayConfig {
    /// Abort at the first malformed or invalid line instead of skipping it (default: false)
    #[serde(default)]
    pub stop_on_error: bool,
}

impl Config {
    /// Read, parse and validate a config file, applying environment overrides.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Config =
            toml::from_str(&contents).context("Failed to parse config file")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Defaults plus environment overrides, for runs without a config file.
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(raw) = std::env::var(CAPACITY_ENV) {
            let raw = raw.trim();
            if raw.is_empty() {
                return;
            }
            match raw.parse::<usize>() {
                Ok(capacity) => self.tracker.capacity = capacity,
                Err(e) => {
                    tracing::warn!("Ignoring {CAPACITY_ENV}='{raw}': {e}");
                }
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.tracker.capacity == 0 {
            anyhow::bail!("tracker.capacity must be greater than zero");
        }
        Ok(())
    }

    /// Build a tracker sized from `[tracker]`.
    pub fn build_tracker(&self) -> Result<MessageTracker> {
        MessageTracker::with_capacity(self.tracker.capacity)
            .context("Failed to construct message tracker")
    }
}
