//! Classical Chess Engine
//!
//! Fixed-depth minimax search with alpha-beta pruning over a material plus
//! mobility evaluation. The search and evaluation are generic over
//! [`chess_core::Rules`]; [`ClassicalEngine`] binds them to
//! [`chess_core::Position`].

pub mod eval;
pub mod ordering;
pub mod search;

use chess_core::{move_to_uci, Engine, Position, Rules, SearchResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use eval::{evaluate, material, mobility, piece_value, INFINITY, MATE_SCORE};
pub use ordering::{move_priority, order_moves, ordered_moves};
pub use search::{alphabeta, minimax, SearchStats};

/// Tree search variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Pruned, ordered search
    #[default]
    AlphaBeta,
    /// Full-width search, same result as `AlphaBeta` at a higher cost
    Minimax,
}

/// Search configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies to search below the root
    pub depth: u8,
    pub algorithm: Algorithm,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            algorithm: Algorithm::AlphaBeta,
        }
    }
}

/// Classical chess engine: searches for the side to move.
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    config: SearchConfig,
    /// Counters from the last search
    stats: SearchStats,
}

impl ClassicalEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, pos: &mut Position) -> SearchResult {
        let perspective = pos.side_to_move();
        let depth = self.config.depth;
        self.stats = SearchStats::default();

        let result = match self.config.algorithm {
            Algorithm::AlphaBeta => {
                alphabeta(pos, depth, perspective, -INFINITY, INFINITY, &mut self.stats)
            }
            Algorithm::Minimax => minimax(pos, depth, perspective, &mut self.stats),
        };

        debug!(
            engine = self.name(),
            depth,
            score = result.score,
            best = ?result.best_move.map(|mv| move_to_uci(pos, mv)),
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "search finished"
        );
        result
    }

    fn name(&self) -> &str {
        match self.config.algorithm {
            Algorithm::AlphaBeta => "Alpha-beta",
            Algorithm::Minimax => "Minimax",
        }
    }

    fn new_game(&mut self) {
        self.stats = SearchStats::default();
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
