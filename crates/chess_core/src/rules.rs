//! The capability interface a search consumes from a rules engine.
//!
//! Search and evaluation never look inside a position. Everything they know
//! about the board comes through [`Rules`], and every mutation goes through a
//! paired `make_move`/`unmake_move` call, normally via [`MoveGuard`].

use std::fmt::Debug;
use std::ops::{Deref, DerefMut};

use crate::types::{PieceKind, Side};

/// A mutable game position that can enumerate, apply and retract moves.
///
/// Squares are indices `0..64` with a1 = 0 and h8 = 63. Ranks are `0..8`
/// with rank 1 = 0.
///
/// Implementations must be reversible: any sequence of `make_move` calls
/// followed by the same number of `unmake_move` calls leaves the position
/// exactly as it was.
pub trait Rules {
    type Move: Copy + Eq + Debug;

    fn side_to_move(&self) -> Side;

    /// All legal moves for the side to move. Empty iff none exist.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Number of legal moves `side` would have if it were that side's turn.
    ///
    /// `None` when handing `side` the move would be illegal, i.e. `side` is
    /// not to move and the side to move is in check.
    fn legal_move_count(&self, side: Side) -> Option<usize>;

    fn is_capture(&self, mv: Self::Move) -> bool;
    fn gives_check(&self, mv: Self::Move) -> bool;
    fn origin(&self, mv: Self::Move) -> u8;
    fn destination_rank(&self, mv: Self::Move) -> u8;
    fn piece_type_at(&self, sq: u8) -> Option<PieceKind>;
    fn piece_at(&self, sq: u8) -> Option<(PieceKind, Side)>;

    /// Squares holding a piece of either side.
    fn occupied(&self) -> Vec<u8>;

    /// Plays a legal move. Panics if `mv` is not legal here.
    fn make_move(&mut self, mv: Self::Move);

    /// Retracts the most recent `make_move`. Panics if there is none.
    fn unmake_move(&mut self);

    fn is_checkmate(&self) -> bool;
    fn is_stalemate(&self) -> bool;
    fn is_insufficient_material(&self) -> bool;

    /// Any terminal condition, including draws the engine tracks on top of
    /// stalemate and insufficient material.
    fn is_game_over(&self) -> bool;
}

/// A move held on a position for the lifetime of the guard.
///
/// Creating the guard plays the move; dropping it retracts the move, on
/// every exit path including early `break`s and unwinding.
pub struct MoveGuard<'a, R: Rules> {
    pos: &'a mut R,
}

impl<'a, R: Rules> MoveGuard<'a, R> {
    pub fn new(pos: &'a mut R, mv: R::Move) -> Self {
        pos.make_move(mv);
        Self { pos }
    }
}

impl<R: Rules> Deref for MoveGuard<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.pos
    }
}

impl<R: Rules> DerefMut for MoveGuard<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.pos
    }
}

impl<R: Rules> Drop for MoveGuard<'_, R> {
    fn drop(&mut self) {
        self.pos.unmake_move();
    }
}
