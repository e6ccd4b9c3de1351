//! Console chess game CLI

use anyhow::{Context, Result};
use chessgame::{create_player, Game, GameConfig, GameRecord, PlayerKind};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "chessgame", about = "Play chess on the console against the alpha-beta engine")]
struct Args {
    /// Player for white
    #[arg(value_enum)]
    white: Option<PlayerKind>,

    /// Player for black
    #[arg(value_enum)]
    black: Option<PlayerKind>,

    /// Search depth for engine players [default: 3]
    #[arg(long)]
    depth: Option<u8>,

    /// Start position in FEN
    #[arg(long)]
    fen: Option<String>,

    /// Stop after this many plies, 0 for no limit
    #[arg(long)]
    max_plies: Option<u32>,

    /// TOML file with game settings; other flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the finished game to this JSON file
    #[arg(long)]
    record: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(white) = self.white {
            config.white = white;
        }
        if let Some(black) = self.black {
            config.black = black;
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(max_plies) = self.max_plies {
            config.max_plies = max_plies;
        }
        config.fen = self.fen.or(config.fen);
        config.record = self.record.or(config.record);

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Args::parse().into_config()?;
    let mut pos = config.start_position().context("invalid start position")?;
    let start_fen = pos.fen();

    let mut white = create_player(config.white, config.depth);
    let mut black = create_player(config.black, config.depth);
    let mut game = Game::new(white.as_mut(), black.as_mut());
    game.max_plies = config.max_plies;

    let (result, moves) = game.play(&mut pos, &mut io::stdout())?;

    if let Some(path) = &config.record {
        let record = GameRecord {
            start_fen,
            white: config.white,
            black: config.black,
            depth: config.depth,
            moves,
            result,
        };
        record.save(path)?;
        info!(path = %path.display(), "game record saved");
    }

    Ok(())
}
