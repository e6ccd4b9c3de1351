//! Static move ordering
//!
//! Moves are ranked by a cheap priority so that the moves most likely to
//! cause cutoffs are searched first:
//! - captures: 4
//! - checks: 3
//! - pawn promotions: 2
//! - everything else: 1

use chess_core::{PieceKind, Rules};

pub const CAPTURE: u8 = 4;
pub const CHECK: u8 = 3;
pub const PROMOTION: u8 = 2;
pub const QUIET: u8 = 1;

/// Priority of `mv` in `pos`. A move matching several tiers takes the highest.
pub fn move_priority<R: Rules>(pos: &R, mv: R::Move) -> u8 {
    if pos.is_capture(mv) {
        CAPTURE
    } else if pos.gives_check(mv) {
        CHECK
    } else if is_promotion(pos, mv) {
        PROMOTION
    } else {
        QUIET
    }
}

fn is_promotion<R: Rules>(pos: &R, mv: R::Move) -> bool {
    pos.piece_type_at(pos.origin(mv)) == Some(PieceKind::Pawn)
        && pos.destination_rank(mv) == pos.side_to_move().last_rank()
}

/// Sorts `moves` by descending priority.
///
/// The sort is stable, so moves of equal priority keep the order the rules
/// engine generated them in and the result is deterministic.
pub fn order_moves<R: Rules>(pos: &R, moves: Vec<R::Move>) -> Vec<R::Move> {
    let mut keyed: Vec<(u8, R::Move)> = moves
        .into_iter()
        .map(|mv| (move_priority(pos, mv), mv))
        .collect();
    keyed.sort_by(|a, b| b.0.cmp(&a.0));
    keyed.into_iter().map(|(_, mv)| mv).collect()
}

/// Legal moves of `pos`, best candidates first.
pub fn ordered_moves<R: Rules>(pos: &R) -> Vec<R::Move> {
    order_moves(pos, pos.legal_moves())
}
