use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("invalid FEN {fen:?}: {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("cannot parse move {0:?}, expected UCI text such as e2e4 or e7e8q")]
    InvalidMove(String),

    #[error("move {0} is not legal in this position")]
    IllegalMove(String),
}
