//! # Configuration Management Module
//!
//! Optional TOML configuration for the game. Every field has a default, so a
//! missing file (or a file with missing sections) still yields a playable
//! session.
//!
//! ## Configuration Structure
//!
//! - [`GameConfig`] - art, RNG seed, and the Green Room opponent
//! - [`LoggingConfig`] - log level and optional log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use colordoors::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load_or_default("colordoors.toml").await?;
//!     println!("Opponent: {:?}", config.game.opponent_strategy());
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [game]
//! show_art = true
//! opponent = "weighted"
//! weights = [0.3, 0.4, 0.3]
//! # seed = 42
//!
//! [logging]
//! level = "warn"
//! # file = "colordoors.log"
//! ```

use anyhow::{anyhow, Result};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::game::rps::Strategy;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How the Green Room magician chooses a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OpponentKind {
    /// Draw from `weights` (Rock, Paper, Scissors).
    #[default]
    Weighted,
    /// Each move equally likely.
    Uniform,
    /// The player wins every round.
    AlwaysLose,
    /// The player loses every round.
    AlwaysWin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Render the ASCII art banners.
    #[serde(default = "default_show_art")]
    pub show_art: bool,
    /// Fixed seed for the opponent's random draws. Unset means a fresh seed per run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default)]
    pub opponent: OpponentKind,
    /// Rock, Paper, Scissors probabilities for the weighted opponent. Must sum to 1.0.
    /// Non-numeric entries load as NaN and are rejected when the opponent is built.
    #[serde(default = "default_weights", deserialize_with = "lenient_weights")]
    pub weights: Vec<f64>,
}

fn lenient_weights<'de, D>(deserializer: D) -> std::result::Result<Vec<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Entry {
        Number(f64),
        Other(IgnoredAny),
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Weights {
        List(Vec<Entry>),
        Other(IgnoredAny),
    }

    Ok(match Weights::deserialize(deserializer)? {
        Weights::List(entries) => entries
            .into_iter()
            .map(|entry| match entry {
                Entry::Number(w) => w,
                Entry::Other(IgnoredAny) => f64::NAN,
            })
            .collect(),
        Weights::Other(IgnoredAny) => vec![f64::NAN],
    })
}

fn default_show_art() -> bool {
    true
}

fn default_weights() -> Vec<f64> {
    vec![0.3, 0.4, 0.3]
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            show_art: default_show_art(),
            seed: None,
            opponent: OpponentKind::default(),
            weights: default_weights(),
        }
    }
}

impl GameConfig {
    /// Resolve the configured opponent into a [`Strategy`].
    ///
    /// Malformed weights do not fail the load; [`Strategy::weighted`] logs a
    /// warning and picks a deterministic fallback instead.
    pub fn opponent_strategy(&self) -> Strategy {
        match self.opponent {
            OpponentKind::Weighted => Strategy::weighted(&self.weights),
            OpponentKind::Uniform => Strategy::Uniform,
            OpponentKind::AlwaysLose => Strategy::AlwaysLose,
            OpponentKind::AlwaysWin => Strategy::AlwaysWin,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// When set, log lines go to this file instead of stderr.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parse `level`; unknown names fall back to `warn`.
    pub fn level_filter(&self) -> log::LevelFilter {
        match self.level.parse() {
            Ok(level) => level,
            Err(_) => {
                eprintln!("Invalid log level '{}', defaulting to warn", self.level);
                log::LevelFilter::Warn
            }
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Load `path` if it exists, otherwise use the defaults.
    pub async fn load_or_default(path: &str) -> Result<Self> {
        if fs::try_exists(path).await.unwrap_or(false) {
            Config::load(path).await
        } else {
            Ok(Config::default())
        }
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}
