use crate::{
    position::Position,
    rules::Rules,
    types::{PieceKind, Side},
};

fn glyph(kind: PieceKind, side: Side) -> char {
    match (side, kind) {
        (Side::White, PieceKind::King) => '♔',
        (Side::White, PieceKind::Queen) => '♕',
        (Side::White, PieceKind::Rook) => '♖',
        (Side::White, PieceKind::Bishop) => '♗',
        (Side::White, PieceKind::Knight) => '♘',
        (Side::White, PieceKind::Pawn) => '♙',
        (Side::Black, PieceKind::King) => '♚',
        (Side::Black, PieceKind::Queen) => '♛',
        (Side::Black, PieceKind::Rook) => '♜',
        (Side::Black, PieceKind::Bishop) => '♝',
        (Side::Black, PieceKind::Knight) => '♞',
        (Side::Black, PieceKind::Pawn) => '♟',
    }
}

/// Framed diagram of the board, rank 8 at the top, `.` for empty squares.
pub fn render_board(pos: &Position) -> String {
    let mut out = String::from("  +-----------------+\n");
    for rank in (0..8u8).rev() {
        let row: Vec<String> = (0..8u8)
            .map(|file| match pos.piece_at(rank * 8 + file) {
                Some((kind, side)) => glyph(kind, side).to_string(),
                None => ".".to_string(),
            })
            .collect();
        out.push_str(&format!("{} | {} |\n", rank + 1, row.join(" ")));
    }
    out.push_str("  +-----------------+\n");
    out.push_str("    a b c d e f g h");
    out
}
