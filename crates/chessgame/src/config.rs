//! Game configuration loaded from TOML

use anyhow::{bail, Context, Result};
use chess_core::Position;
use classical_engine::{Algorithm, SearchConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Who plays one side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves typed on stdin in UCI notation
    Human,
    /// Full-width search
    Minimax,
    /// Pruned search
    Alphabeta,
}

impl PlayerKind {
    /// Search settings for an engine player, `None` for a human.
    pub fn search_config(self, depth: u8) -> Option<SearchConfig> {
        let algorithm = match self {
            PlayerKind::Human => return None,
            PlayerKind::Minimax => Algorithm::Minimax,
            PlayerKind::Alphabeta => Algorithm::AlphaBeta,
        };
        Some(SearchConfig { depth, algorithm })
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayerKind::Human => "human",
            PlayerKind::Minimax => "minimax",
            PlayerKind::Alphabeta => "alphabeta",
        };
        f.write_str(name)
    }
}

/// Settings for one game
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    pub white: PlayerKind,
    pub black: PlayerKind,
    /// Search depth of the engine players
    pub depth: u8,
    /// Start position, standard start when absent
    pub fen: Option<String>,
    /// Stop after this many plies (0 = unlimited)
    pub max_plies: u32,
    /// Where to write the game record
    pub record: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            white: PlayerKind::Human,
            black: PlayerKind::Alphabeta,
            depth: 3,
            fen: None,
            max_plies: 0,
            record: None,
        }
    }
}

impl GameConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid game config")
    }

    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Rejects settings no game can be played with.
    pub fn validate(&self) -> Result<()> {
        let has_engine = [self.white, self.black]
            .iter()
            .any(|kind| *kind != PlayerKind::Human);
        if has_engine && self.depth == 0 {
            bail!("engine players need a search depth of at least 1");
        }
        Ok(())
    }

    pub fn start_position(&self) -> Result<Position> {
        match &self.fen {
            Some(fen) => Ok(Position::from_fen(fen)?),
            None => Ok(Position::startpos()),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
