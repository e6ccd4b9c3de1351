use std::fmt;

/// Evaluation score. Positive is good for the perspective side.
pub type Score = i32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Rank a pawn of this side promotes on (0 = rank 1).
    pub fn last_rank(self) -> u8 {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => f.write_str("white"),
            Side::Black => f.write_str("black"),
        }
    }
}

impl From<cozy_chess::Color> for Side {
    fn from(color: cozy_chess::Color) -> Self {
        match color {
            cozy_chess::Color::White => Side::White,
            cozy_chess::Color::Black => Side::Black,
        }
    }
}

impl From<Side> for cozy_chess::Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => cozy_chess::Color::White,
            Side::Black => cozy_chess::Color::Black,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl From<cozy_chess::Piece> for PieceKind {
    fn from(piece: cozy_chess::Piece) -> Self {
        match piece {
            cozy_chess::Piece::Pawn => PieceKind::Pawn,
            cozy_chess::Piece::Knight => PieceKind::Knight,
            cozy_chess::Piece::Bishop => PieceKind::Bishop,
            cozy_chess::Piece::Rook => PieceKind::Rook,
            cozy_chess::Piece::Queen => PieceKind::Queen,
            cozy_chess::Piece::King => PieceKind::King,
        }
    }
}

// Helpers
pub fn file_of(sq: u8) -> u8 {
    sq % 8
}
pub fn rank_of(sq: u8) -> u8 {
    sq / 8
}

pub fn sq_to_coord(sq: u8) -> String {
    let f = (b'a' + file_of(sq)) as char;
    let r = (b'1' + rank_of(sq)) as char;
    format!("{f}{r}")
}

pub fn coord_to_sq(c: &str) -> Option<u8> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0];
    let r = b[1];
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    Some((r - b'1') * 8 + (f - b'a'))
}
