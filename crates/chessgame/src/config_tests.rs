use super::*;

#[test]
fn empty_file_gives_defaults() {
    let config = GameConfig::from_toml("").unwrap();
    assert_eq!(config, GameConfig::default());
    assert_eq!(config.depth, 3);
    assert_eq!(config.max_plies, 0);
}

#[test]
fn parses_every_field() {
    let config = GameConfig::from_toml(
        r#"
        white = "minimax"
        black = "human"
        depth = 2
        fen = "6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1"
        max_plies = 40
        record = "game.json"
        "#,
    )
    .unwrap();

    assert_eq!(config.white, PlayerKind::Minimax);
    assert_eq!(config.black, PlayerKind::Human);
    assert_eq!(config.depth, 2);
    assert_eq!(config.max_plies, 40);
    assert_eq!(config.record, Some(PathBuf::from("game.json")));
    assert_eq!(
        config.start_position().unwrap().fen(),
        "6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1"
    );
}

#[test]
fn unknown_player_is_rejected() {
    assert!(GameConfig::from_toml(r#"white = "stockfish""#).is_err());
}

#[test]
fn bad_fen_surfaces_on_start() {
    let config = GameConfig {
        fen: Some("not a fen".to_string()),
        ..Default::default()
    };
    assert!(config.start_position().is_err());
}

#[test]
fn engines_need_depth() {
    let mut config = GameConfig {
        depth: 0,
        ..Default::default()
    };
    assert!(config.validate().is_err());

    config.white = PlayerKind::Human;
    config.black = PlayerKind::Human;
    assert!(config.validate().is_ok());
}

#[test]
fn player_kinds_map_to_algorithms() {
    assert_eq!(PlayerKind::Human.search_config(3), None);
    assert_eq!(
        PlayerKind::Minimax.search_config(2),
        Some(SearchConfig {
            depth: 2,
            algorithm: Algorithm::Minimax
        })
    );
    assert_eq!(
        PlayerKind::Alphabeta.search_config(4).unwrap().algorithm,
        Algorithm::AlphaBeta
    );
    assert_eq!(PlayerKind::Alphabeta.to_string(), "alphabeta");
}
