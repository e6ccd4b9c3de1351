use super::*;

// Qxf7 is mate.
const SCHOLAR: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4";

#[test]
fn default_config_is_three_ply_alphabeta() {
    let engine = ClassicalEngine::default();
    assert_eq!(engine.config().depth, 3);
    assert_eq!(engine.config().algorithm, Algorithm::AlphaBeta);
    assert_eq!(engine.name(), "Alpha-beta");
}

#[test]
fn engine_plays_a_legal_move_from_the_start() {
    let mut engine = ClassicalEngine::default();
    let mut pos = Position::startpos();
    let fen = pos.fen();

    let result = engine.search(&mut pos);

    assert!(pos.legal_moves().contains(&result.best_move.unwrap()));
    assert_eq!(pos.fen(), fen);
    assert!(engine.stats().nodes > 0);

    engine.new_game();
    assert_eq!(engine.stats(), SearchStats::default());
}

#[test]
fn both_algorithms_agree() {
    let mut pos = Position::from_fen(SCHOLAR).unwrap();
    let mut pruned = ClassicalEngine::new(SearchConfig {
        depth: 2,
        algorithm: Algorithm::AlphaBeta,
    });
    let mut full = ClassicalEngine::new(SearchConfig {
        depth: 2,
        algorithm: Algorithm::Minimax,
    });

    let a = pruned.search(&mut pos);
    let m = full.search(&mut pos);

    assert_eq!(full.name(), "Minimax");
    assert_eq!(a.score, m.score);
    assert!(pruned.stats().nodes < full.stats().nodes);
}

#[test]
fn engine_finds_scholars_mate() {
    let mut pos = Position::from_fen(SCHOLAR).unwrap();
    let mut engine = ClassicalEngine::new(SearchConfig {
        depth: 1,
        ..Default::default()
    });

    let result = engine.search(&mut pos);

    assert_eq!(result.score, MATE_SCORE);
    assert_eq!(move_to_uci(&pos, result.best_move.unwrap()), "h5f7");
}
