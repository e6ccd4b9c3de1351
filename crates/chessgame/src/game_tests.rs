use super::*;
use crate::player::{EnginePlayer, HumanPlayer};
use classical_engine::{ClassicalEngine, SearchConfig};
use std::io::{self, Cursor};

fn scripted(moves: &[&str]) -> HumanPlayer<Cursor<Vec<u8>>, io::Sink> {
    let script: String = moves.iter().map(|mv| format!("{mv}\n")).collect();
    HumanPlayer::new(Cursor::new(script.into_bytes()), io::sink())
}

fn engine(depth: u8) -> EnginePlayer<ClassicalEngine> {
    EnginePlayer::new(ClassicalEngine::new(SearchConfig {
        depth,
        ..Default::default()
    }))
}

#[test]
fn ply_limit_stops_an_engine_game() {
    let mut white = engine(1);
    let mut black = engine(1);
    let mut game = Game::new(&mut white, &mut black);
    game.max_plies = 4;

    let mut pos = Position::startpos();
    let mut out = Vec::new();
    let (outcome, moves) = game.play(&mut pos, &mut out).unwrap();

    assert_eq!(outcome, Outcome::Unfinished);
    assert_eq!(moves.len(), 4);
    assert_eq!(pos.plies(), 4);
    let shown = String::from_utf8(out).unwrap();
    assert!(shown.ends_with("Game over: *\n"));
    assert_eq!(shown.matches("    a b c d e f g h").count(), 5);
}

#[test]
fn engine_delivers_mate() {
    let mut white = engine(1);
    let mut black = scripted(&[]);
    let mut pos = Position::from_fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1").unwrap();
    let mut out = Vec::new();

    let (outcome, moves) = Game::new(&mut white, &mut black)
        .play(&mut pos, &mut out)
        .unwrap();

    assert_eq!(outcome, Outcome::WhiteWins);
    assert_eq!(moves, vec!["e1e8".to_string()]);
    assert!(String::from_utf8(out).unwrap().ends_with("Game over: 1-0\n"));
}

#[test]
fn humans_play_fools_mate_and_the_record_replays() {
    let mut white = scripted(&["f2f3", "g2g4"]);
    let mut black = scripted(&["e7e5", "d8h4"]);
    let mut pos = Position::startpos();

    let (result, moves) = Game::new(&mut white, &mut black)
        .play(&mut pos, &mut io::sink())
        .unwrap();
    assert_eq!(result, Outcome::BlackWins);

    let record = GameRecord {
        start_fen: Position::startpos().fen(),
        white: PlayerKind::Human,
        black: PlayerKind::Human,
        depth: 3,
        moves,
        result,
    };
    let path = std::env::temp_dir().join(format!("chessgame-record-{}.json", std::process::id()));
    record.save(&path).unwrap();
    let loaded = GameRecord::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, record);
    assert_eq!(loaded.replay().unwrap().fen(), pos.fen());
}

#[test]
fn finished_position_plays_no_moves() {
    let mut white = engine(2);
    let mut black = engine(2);
    let mut pos = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();

    let (outcome, moves) = Game::new(&mut white, &mut black)
        .play(&mut pos, &mut io::sink())
        .unwrap();

    assert_eq!(outcome, Outcome::Draw);
    assert!(moves.is_empty());
}

#[test]
fn exhausted_human_input_aborts_the_game() {
    let mut white = scripted(&["e2e4"]);
    let mut black = scripted(&["e7e5"]);
    let mut pos = Position::startpos();

    let result = Game::new(&mut white, &mut black).play(&mut pos, &mut io::sink());

    assert!(result.is_err());
    assert_eq!(pos.plies(), 2);
}

#[test]
fn results_use_pgn_notation() {
    assert_eq!(serde_json::to_string(&Outcome::Draw).unwrap(), "\"1/2-1/2\"");
    assert_eq!(serde_json::from_str::<Outcome>("\"*\"").unwrap(), Outcome::Unfinished);
    assert_eq!(Outcome::BlackWins.to_string(), "0-1");
    assert_eq!(Outcome::of(&Position::startpos()), Outcome::Unfinished);
}

#[test]
fn corrupt_record_fails_to_replay() {
    let record = GameRecord {
        start_fen: Position::startpos().fen(),
        white: PlayerKind::Alphabeta,
        black: PlayerKind::Minimax,
        depth: 2,
        moves: vec!["e2e4".to_string(), "e2e4".to_string()],
        result: Outcome::Unfinished,
    };
    assert!(record.replay().is_err());
}
