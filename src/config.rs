//! Configuration loading from TOML.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs.
//! Every field has a built-in default matching the classic setup
//! (10 rounds, 8 players, `./player` as the bid generator), so the
//! simulator runs standalone when no config file is present.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::types::PlayerId;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub tournament: TournamentConfig,
    pub bidder: BidderConfig,
}

/// Shape of the tournament: how many rounds, how many players.
///
/// Player ids are enumerated `1..=players`; the set is fixed for the
/// whole run.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TournamentConfig {
    pub rounds: usize,
    pub players: u32,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            rounds: 10,
            players: 8,
        }
    }
}

impl TournamentConfig {
    /// The fixed player set, in enumeration order.
    pub fn player_ids(&self) -> Vec<PlayerId> {
        (1..=self.players).map(PlayerId).collect()
    }
}

/// Where the external bid generator lives.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BidderConfig {
    /// Executable invoked as `<command> <player id>`, once per player.
    pub command: PathBuf,
}

impl Default for BidderConfig {
    fn default() -> Self {
        Self {
            command: PathBuf::from("./player"),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))?;
        Ok(config)
    }

    /// Load configuration, falling back to built-in defaults when the
    /// file does not exist. A file that exists but cannot be read or
    /// parsed is still an error.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            info!(path, "No config file found, using built-in defaults");
            Ok(Self::default())
        }
    }
}
