use cozy_chess::{File, Move, Piece, Square};

use crate::{
    error::ChessError,
    position::Position,
    rules::Rules,
    types::{coord_to_sq, sq_to_coord},
};

/// Standard UCI text for a legal move in `pos`.
///
/// The board encodes castling as the king capturing its own rook; UCI wants
/// the king's two-square step instead.
pub fn move_to_uci(pos: &Position, mv: Move) -> String {
    let board = pos.board();
    let mut to = mv.to;
    let castles = board.piece_on(mv.from) == Some(Piece::King)
        && board.colors(board.side_to_move()).has(mv.to);
    if castles {
        let file = if (mv.to.file() as u8) > (mv.from.file() as u8) {
            File::G
        } else {
            File::C
        };
        to = Square::new(file, mv.from.rank());
    }

    let mut s = String::with_capacity(5);
    s.push_str(&sq_to_coord(mv.from as u8));
    s.push_str(&sq_to_coord(to as u8));
    if let Some(p) = mv.promotion {
        let ch = match p {
            Piece::Queen => 'q',
            Piece::Rook => 'r',
            Piece::Bishop => 'b',
            Piece::Knight => 'n',
            _ => 'q',
        };
        s.push(ch);
    }
    s
}

/// Resolves UCI text against the legal moves of `pos`.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Result<Move, ChessError> {
    let txt = txt.trim().to_ascii_lowercase();
    let well_formed = matches!(txt.len(), 4 | 5)
        && txt.is_ascii()
        && coord_to_sq(&txt[0..2]).is_some()
        && coord_to_sq(&txt[2..4]).is_some()
        && txt[4..].chars().all(|c| matches!(c, 'q' | 'r' | 'b' | 'n'));
    if !well_formed {
        return Err(ChessError::InvalidMove(txt));
    }

    pos.legal_moves()
        .into_iter()
        .find(|&mv| move_to_uci(pos, mv) == txt)
        .ok_or(ChessError::IllegalMove(txt))
}
