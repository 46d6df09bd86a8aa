//! Configuration system for the mini leaderboard.
//!
//! Load leaderboard configuration from TOML or YAML files to control the
//! boost bound, the random seed, the change policy, display text and the
//! simulated loading delays without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use leaderboard_config::LeaderboardConfig;
//! use leaderboard_core::ChangePolicy;
//! use std::time::Duration;
//!
//! let config = LeaderboardConfig::from_toml_str(r#"
//!     [ranking]
//!     random_seed = 7
//!     change_policy = "tracked"
//!
//!     [timing]
//!     refresh_ms = 250
//! "#).unwrap();
//!
//! assert_eq!(config.ranking.random_seed, Some(7));
//! assert_eq!(config.ranking.change_policy, ChangePolicy::Tracked);
//! assert_eq!(config.timing.refresh_delay(), Duration::from_millis(250));
//! assert_eq!(config.ranking.boost_bound, 500);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use leaderboard_config::LeaderboardConfig;
//!
//! let config = LeaderboardConfig::load("leaderboard.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use leaderboard_core::ChangePolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Exclusive upper bound of a single boost when none is configured.
pub const DEFAULT_BOOST_BOUND: u64 = 500;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main leaderboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LeaderboardConfig {
    /// Recompute settings.
    #[serde(default)]
    pub ranking: RankingConfig,

    /// Rendering settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Simulated loading delays.
    #[serde(default)]
    pub timing: TimingConfig,
}

impl LeaderboardConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, picking the format by extension.
    ///
    /// `.yaml` and `.yml` are read as YAML, everything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, fails to parse, or holds
    /// invalid values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that parse but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ranking.boost_bound == 0 {
            return Err(ConfigError::Invalid(
                "ranking.boost_bound must be greater than 0".to_string(),
            ));
        }
        if self.display.skeleton_rows == 0 {
            return Err(ConfigError::Invalid(
                "display.skeleton_rows must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.ranking.random_seed = Some(seed);
        self
    }

    /// Sets the exclusive upper bound of a single boost.
    pub fn with_boost_bound(mut self, bound: u64) -> Self {
        self.ranking.boost_bound = bound;
        self
    }

    /// Sets how the change indicator evolves.
    pub fn with_change_policy(mut self, policy: ChangePolicy) -> Self {
        self.ranking.change_policy = policy;
        self
    }

    /// Sets both simulated delays in milliseconds.
    pub fn with_delays_ms(mut self, initial_load_ms: u64, refresh_ms: u64) -> Self {
        self.timing = TimingConfig {
            initial_load_ms,
            refresh_ms,
        };
        self
    }
}

/// Recompute configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct RankingConfig {
    /// Random seed for reproducible boosts. OS entropy when absent.
    pub random_seed: Option<u64>,

    /// Exclusive upper bound of a single boost.
    pub boost_bound: u64,

    /// How the change indicator evolves across refreshes.
    pub change_policy: ChangePolicy,
}

impl Default for RankingConfig {
    fn default() -> Self {
        RankingConfig {
            random_seed: None,
            boost_bound: DEFAULT_BOOST_BOUND,
            change_policy: ChangePolicy::Cosmetic,
        }
    }
}

/// Display configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct DisplayConfig {
    /// Header title.
    pub title: String,

    /// Handle printed under every name.
    pub handle: String,

    /// Number of top ranks highlighted with a star.
    pub highlight_top: u32,

    /// Placeholder rows shown while loading.
    pub skeleton_rows: usize,

    /// Note printed under the ranking.
    pub footer: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            title: "Farcaster Ranking (Mini)".to_string(),
            handle: "@farcaster_user".to_string(),
            highlight_top: 3,
            skeleton_rows: 6,
            footer: "Data is simulated. Connect to the Farcaster API for real data!".to_string(),
        }
    }
}

/// Simulated loading delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct TimingConfig {
    /// Delay before the seed ranking first appears.
    pub initial_load_ms: u64,

    /// Delay before a refreshed ranking appears.
    pub refresh_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            initial_load_ms: 1500,
            refresh_ms: 1000,
        }
    }
}

impl TimingConfig {
    pub fn initial_load_delay(&self) -> Duration {
        Duration::from_millis(self.initial_load_ms)
    }

    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_ms)
    }
}

#[cfg(test)]
mod tests;
