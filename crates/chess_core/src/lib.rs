pub mod display;
pub mod error;
pub mod position;
pub mod rules;
pub mod types;
pub mod uci;

// Re-export the rules-engine surface
pub use cozy_chess::Move;
pub use display::render_board;
pub use error::ChessError;
pub use position::Position;
pub use rules::{MoveGuard, Rules};
pub use types::*;
pub use uci::*;

// =============================================================================
// Engine trait: implemented by every move chooser
// =============================================================================

/// Result of a search: the score from the searching side's perspective and
/// the move recommended to reach it.
///
/// `best_move` is `None` only at depth 0 or on a terminal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult<M = Move> {
    pub score: Score,
    pub best_move: Option<M>,
}

impl<M> SearchResult<M> {
    pub fn leaf(score: Score) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Trait that all chess engines must implement.
pub trait Engine {
    /// Search `pos` for the side to move.
    ///
    /// `pos` is borrowed mutably for the duration of the search and is
    /// returned unchanged.
    fn search(&mut self, pos: &mut Position) -> SearchResult;

    /// Returns the engine's name for display
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
