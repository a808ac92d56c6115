//! Simulation config files (TOML)

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::elo::DEFAULT_SEED_SPREAD;
use crate::format::Format;
use crate::options::FormatOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A simulated tournament: which format, how many teams and how to pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub name: String,
    pub format: Format,
    pub teams: u32,
    /// Rounds to play; the format's complete (or minimum) length when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounds: Option<usize>,
    /// Seed for simulated outcomes
    pub seed: u64,
    /// Elo gap between consecutive seeds
    pub rating_spread: f64,
    /// Print every round as it is played
    pub verbose: bool,
    #[serde(flatten)]
    pub options: FormatOptions,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            name: "Simulated tournament".to_string(),
            format: Format::default(),
            teams: 8,
            rounds: None,
            seed: 0,
            rating_spread: DEFAULT_SEED_SPREAD,
            verbose: false,
            options: FormatOptions::default(),
        }
    }
}

impl TournamentConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
