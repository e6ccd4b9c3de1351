//! Material and mobility evaluation

use chess_core::{PieceKind, Rules, Score, Side};

/// Score of a position where the perspective side has delivered mate.
/// Its negation means the perspective side has been mated.
pub const MATE_SCORE: Score = 1_000_000;

/// Bound strictly outside every score `evaluate` can return.
pub const INFINITY: Score = MATE_SCORE + 1;

/// Material of one side in the starting position, in pawns.
pub const MAX_MATERIAL: Score = 39;

/// Most legal moves any chess position admits.
pub const MAX_LEGAL_MOVES: Score = 218;

/// Scores `pos` from `perspective`'s point of view.
///
/// Terminal positions come first: checkmate returns `±MATE_SCORE`, any
/// other finished game is a draw and returns 0. Otherwise the result is the
/// normalised sum `material / 39 + mobility / 218`, kept exact by scaling
/// both terms by `39 * 218`. A position where the side to move is in check
/// has no mobility term and is scored on material alone.
pub fn evaluate<R: Rules>(pos: &R, perspective: Side) -> Score {
    if pos.is_checkmate() {
        // The side to move is the one that has been mated.
        return if pos.side_to_move() == perspective {
            -MATE_SCORE
        } else {
            MATE_SCORE
        };
    }
    if pos.is_game_over() {
        return 0;
    }

    material(pos, perspective) * MAX_LEGAL_MOVES + mobility(pos, perspective) * MAX_MATERIAL
}

/// Piece values in pawns. The king is never traded and counts 0.
#[inline]
pub fn piece_value(kind: PieceKind) -> Score {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

/// Material balance in pawns: own pieces minus the opponent's.
pub fn material<R: Rules>(pos: &R, perspective: Side) -> Score {
    pos.occupied()
        .into_iter()
        .filter_map(|sq| pos.piece_at(sq))
        .map(|(kind, side)| {
            let v = piece_value(kind);
            if side == perspective {
                v
            } else {
                -v
            }
        })
        .sum()
}

/// Legal moves `perspective` would have on its turn minus those the
/// opponent would have on theirs.
///
/// When the side to move is in check the other side cannot be handed the
/// move, so its count does not exist and the balance is 0.
pub fn mobility<R: Rules>(pos: &R, perspective: Side) -> Score {
    let ours = pos.legal_move_count(perspective);
    let theirs = pos.legal_move_count(perspective.other());
    match (ours, theirs) {
        (Some(ours), Some(theirs)) => ours as Score - theirs as Score,
        _ => 0,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
