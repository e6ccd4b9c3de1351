//! Game loop and game records

use anyhow::{Context, Result};
use chess_core::{move_to_uci, parse_uci_move, render_board, Position, Rules, Side};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::config::PlayerKind;
use crate::player::Player;

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "1-0")]
    WhiteWins,
    #[serde(rename = "0-1")]
    BlackWins,
    #[serde(rename = "1/2-1/2")]
    Draw,
    /// Stopped by the ply limit
    #[serde(rename = "*")]
    Unfinished,
}

impl Outcome {
    /// Result of `pos` as it stands.
    pub fn of(pos: &Position) -> Self {
        if !pos.is_game_over() {
            return Outcome::Unfinished;
        }
        match pos.winner() {
            Some(Side::White) => Outcome::WhiteWins,
            Some(Side::Black) => Outcome::BlackWins,
            None => Outcome::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::WhiteWins => "1-0",
            Outcome::BlackWins => "0-1",
            Outcome::Draw => "1/2-1/2",
            Outcome::Unfinished => "*",
        };
        f.write_str(text)
    }
}

/// Complete record of a played game
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    pub start_fen: String,
    pub white: PlayerKind,
    pub black: PlayerKind,
    pub depth: u8,
    /// Moves in UCI notation
    pub moves: Vec<String>,
    pub result: Outcome,
}

impl GameRecord {
    /// Save the record as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize game record")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write game record {}", path.display()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read game record {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse game record {}", path.display()))
    }

    /// Replays the moves from the start position.
    pub fn replay(&self) -> Result<Position> {
        let mut pos = Position::from_fen(&self.start_fen)?;
        for text in &self.moves {
            let mv = parse_uci_move(&pos, text)
                .with_context(|| format!("bad move in record after {} plies", pos.plies()))?;
            pos.make_move(mv);
        }
        Ok(pos)
    }
}

/// Plays one game between two players
pub struct Game<'a> {
    white: &'a mut dyn Player,
    black: &'a mut dyn Player,
    /// Stop after this many plies (0 = unlimited)
    pub max_plies: u32,
}

impl<'a> Game<'a> {
    pub fn new(white: &'a mut dyn Player, black: &'a mut dyn Player) -> Self {
        Self {
            white,
            black,
            max_plies: 0,
        }
    }

    /// Plays from `pos` until the game is over or the ply limit is hit,
    /// printing the board before every move to `out`.
    ///
    /// Returns the outcome and the moves played in UCI notation; `pos` is
    /// left at the final position.
    pub fn play<W: Write>(
        &mut self,
        pos: &mut Position,
        out: &mut W,
    ) -> Result<(Outcome, Vec<String>)> {
        self.white.new_game();
        self.black.new_game();
        info!(
            white = self.white.name(),
            black = self.black.name(),
            fen = %pos.fen(),
            "game started"
        );

        let mut moves = Vec::new();
        while !pos.is_game_over() && (self.max_plies == 0 || moves.len() < self.max_plies as usize)
        {
            writeln!(out, "{}\n", render_board(pos))?;

            let side = pos.side_to_move();
            let player = match side {
                Side::White => &mut *self.white,
                Side::Black => &mut *self.black,
            };
            let mv = player.choose_move(pos)?;
            let text = move_to_uci(pos, mv);

            debug!(ply = moves.len() + 1, %side, player = player.name(), mv = %text, "move");
            writeln!(out, "{} ({side}) plays {text}\n", player.name())?;

            pos.make_move(mv);
            moves.push(text);
        }

        let outcome = Outcome::of(pos);
        writeln!(out, "{}\n", render_board(pos))?;
        writeln!(out, "Game over: {outcome}")?;
        info!(result = %outcome, plies = moves.len(), "game finished");

        Ok((outcome, moves))
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
