//! Move sources for the game loop

use anyhow::{anyhow, bail, Result};
use chess_core::{parse_uci_move, Engine, Move, Position, Rules};
use classical_engine::ClassicalEngine;
use std::io::{self, BufRead, Cursor, Write};

use crate::config::PlayerKind;

/// Something that picks a move for the side to move.
pub trait Player {
    fn name(&self) -> &str;

    /// Picks a legal move in `pos`, which must not be a finished game.
    ///
    /// `pos` may be used as scratch space but is returned unchanged.
    fn choose_move(&mut self, pos: &mut Position) -> Result<Move>;

    fn new_game(&mut self) {}
}

/// Any [`Engine`] playing at its configured depth.
pub struct EnginePlayer<E: Engine> {
    engine: E,
}

impl<E: Engine> EnginePlayer<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }
}

impl<E: Engine> Player for EnginePlayer<E> {
    fn name(&self) -> &str {
        self.engine.name()
    }

    fn choose_move(&mut self, pos: &mut Position) -> Result<Move> {
        self.engine
            .search(pos)
            .best_move
            .ok_or_else(|| anyhow!("{} found no move in {}", self.engine.name(), pos.fen()))
    }

    fn new_game(&mut self) {
        self.engine.new_game();
    }
}

/// Where a human's move text comes from.
pub trait LineSource {
    /// Appends the next line to `buf`, returning 0 at end of input.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

// Stdin takes its lock per line, so two human players can share it.
impl LineSource for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Reads UCI move text line by line, asking again until the move is legal.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
}

impl<R: LineSource, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: LineSource, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        "Human"
    }

    fn choose_move(&mut self, pos: &mut Position) -> Result<Move> {
        loop {
            write!(self.output, "{} to move (e.g. e2e4): ", pos.side_to_move())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("input closed before a move was entered");
            }
            if line.trim().is_empty() {
                continue;
            }

            match parse_uci_move(pos, &line) {
                Ok(mv) => return Ok(mv),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }
}

/// Builds the player for `kind`. Humans use the process's stdin and stdout.
pub fn create_player(kind: PlayerKind, depth: u8) -> Box<dyn Player> {
    match kind.search_config(depth) {
        Some(config) => Box::new(EnginePlayer::new(ClassicalEngine::new(config))),
        None => Box::new(HumanPlayer::new(io::stdin(), io::stdout())),
    }
}

#[cfg(test)]
#[path = "player_tests.rs"]
mod player_tests;
