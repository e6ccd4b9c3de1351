//! Fixed-depth minimax with alpha-beta pruning

use chess_core::{MoveGuard, Rules, Score, SearchResult, Side};
use tracing::trace;

use crate::eval::{evaluate, INFINITY};
use crate::ordering::ordered_moves;

/// Work counters for one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, leaves included
    pub nodes: u64,
    /// Nodes where the remaining siblings were pruned
    pub cutoffs: u64,
}

/// Searches `depth` plies below `pos` and scores the result from
/// `perspective`'s point of view.
///
/// A node is maximising when `perspective` is to move in it and minimising
/// otherwise; the side to move is read from `pos` at every node. Children are
/// visited in [`ordered_moves`] order and the remaining siblings are skipped
/// once `alpha >= beta`.
///
/// `pos` is mutated while the search runs and is back in its original state
/// when this returns. Call with `-INFINITY, INFINITY` for an exact score.
///
/// # Panics
///
/// If the rules engine reports a position as ongoing but offers no legal
/// move for it.
pub fn alphabeta<R: Rules>(
    pos: &mut R,
    depth: u8,
    perspective: Side,
    mut alpha: Score,
    mut beta: Score,
    stats: &mut SearchStats,
) -> SearchResult<R::Move> {
    debug_assert!(alpha <= beta, "inverted window [{alpha}, {beta}]");
    stats.nodes += 1;

    if depth == 0 || pos.is_game_over() {
        return SearchResult::leaf(evaluate(pos, perspective));
    }

    let maximizing = pos.side_to_move() == perspective;
    let moves = ordered_moves(pos);
    assert!(
        !moves.is_empty(),
        "rules engine reports an ongoing game with no legal moves"
    );

    let mut best = SearchResult::leaf(if maximizing { -INFINITY } else { INFINITY });
    for mv in moves {
        let score = {
            let mut child = MoveGuard::new(pos, mv);
            alphabeta(&mut *child, depth - 1, perspective, alpha, beta, stats).score
        };

        if maximizing {
            if score > best.score {
                best = SearchResult {
                    score,
                    best_move: Some(mv),
                };
            }
            alpha = alpha.max(score);
        } else {
            if score < best.score {
                best = SearchResult {
                    score,
                    best_move: Some(mv),
                };
            }
            beta = beta.min(score);
        }

        if alpha >= beta {
            stats.cutoffs += 1;
            trace!(depth, alpha, beta, "cutoff");
            break;
        }
    }

    best
}

/// Full-width minimax over the same tree as [`alphabeta`], without pruning
/// or move ordering. Exponentially slower; kept as the reference result.
pub fn minimax<R: Rules>(
    pos: &mut R,
    depth: u8,
    perspective: Side,
    stats: &mut SearchStats,
) -> SearchResult<R::Move> {
    stats.nodes += 1;

    if depth == 0 || pos.is_game_over() {
        return SearchResult::leaf(evaluate(pos, perspective));
    }

    let maximizing = pos.side_to_move() == perspective;
    let moves = pos.legal_moves();
    assert!(
        !moves.is_empty(),
        "rules engine reports an ongoing game with no legal moves"
    );

    let mut best = SearchResult::leaf(if maximizing { -INFINITY } else { INFINITY });
    for mv in moves {
        let score = {
            let mut child = MoveGuard::new(pos, mv);
            minimax(&mut *child, depth - 1, perspective, stats).score
        };

        let better = if maximizing {
            score > best.score
        } else {
            score < best.score
        };
        if better {
            best = SearchResult {
                score,
                best_move: Some(mv),
            };
        }
    }

    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
