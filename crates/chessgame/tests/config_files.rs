use chessgame::{create_player, Game, GameConfig, Outcome, PlayerKind};
use std::io;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("chessgame-{}-{name}", std::process::id()))
}

#[test]
fn game_runs_from_a_config_file() {
    let path = temp_path("minimax-vs-alphabeta.toml");
    std::fs::write(
        &path,
        r#"
white = "minimax"
black = "alphabeta"
depth = 1
max_plies = 6
"#,
    )
    .unwrap();

    let config = GameConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    config.validate().unwrap();
    assert_eq!(config.white, PlayerKind::Minimax);

    let mut white = create_player(config.white, config.depth);
    let mut black = create_player(config.black, config.depth);
    assert_eq!(white.name(), "Minimax");
    assert_eq!(black.name(), "Alpha-beta");

    let mut game = Game::new(white.as_mut(), black.as_mut());
    game.max_plies = config.max_plies;
    let mut pos = config.start_position().unwrap();
    let (outcome, moves) = game.play(&mut pos, &mut io::sink()).unwrap();

    assert_eq!(outcome, Outcome::Unfinished);
    assert_eq!(moves.len(), 6);
}

#[test]
fn missing_file_names_the_path() {
    let path = temp_path("does-not-exist.toml");
    let err = GameConfig::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("does-not-exist.toml"));
}

#[test]
fn malformed_file_is_rejected() {
    let path = temp_path("malformed.toml");
    std::fs::write(&path, "depth = \"deep\"\n").unwrap();
    let result = GameConfig::load(&path);
    std::fs::remove_file(&path).ok();
    assert!(result.is_err());
}
