//! Console chess game
//!
//! Two players, each a human typing UCI moves or the classical engine,
//! play from a start position until the game ends or a ply limit is hit.
//!
//! # Usage
//!
//! ```bash
//! # Play white against the engine at depth 4
//! cargo run -p chessgame -- human alphabeta --depth 4
//!
//! # Watch the engine play itself and keep the game
//! cargo run -p chessgame -- alphabeta minimax --max-plies 40 --record game.json
//! ```

mod config;
mod game;
mod player;

pub use config::*;
pub use game::*;
pub use player::*;
