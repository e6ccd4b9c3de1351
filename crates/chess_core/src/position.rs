use cozy_chess::{Board, Move, Piece, Square};

use crate::{
    error::ChessError,
    rules::Rules,
    types::{PieceKind, Side},
};

/// A game position backed by a `cozy_chess::Board`.
///
/// `cozy_chess` is copy-make, so retraction keeps the boards preceding each
/// played move on an undo stack. The stack doubles as the game history used
/// for repetition detection.
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    undo: Vec<Board>,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    pub fn startpos() -> Self {
        Self::from_board(Board::default())
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            undo: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        Board::from_fen(fen.trim(), false)
            .map(Self::from_board)
            .map_err(|e| ChessError::InvalidFen {
                fen: fen.to_string(),
                reason: format!("{e:?}"),
            })
    }

    pub fn fen(&self) -> String {
        format!("{}", self.board)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves played on this position and not yet retracted.
    pub fn plies(&self) -> usize {
        self.undo.len()
    }

    pub fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.board.halfmove_clock() >= 100
    }

    /// True once the current position has occurred twice before.
    ///
    /// Positions match by the FIDE definition: an en passant file only counts
    /// when the capture is actually legal. Only boards since the last capture
    /// or pawn move can repeat.
    pub fn is_threefold_repetition(&self) -> bool {
        let reversible = self.board.halfmove_clock() as usize;
        self.undo
            .iter()
            .rev()
            .take(reversible)
            .filter(|b| b.same_position(&self.board))
            .count()
            >= 2
    }

    fn has_legal_moves(&self) -> bool {
        self.board.generate_moves(|moves| !moves.is_empty())
    }

    fn is_en_passant(&self, mv: Move) -> bool {
        self.board.piece_on(mv.from) == Some(Piece::Pawn)
            && mv.from.file() != mv.to.file()
            && self.board.piece_on(mv.to).is_none()
    }
}

fn count_moves(board: &Board) -> usize {
    let mut count = 0;
    board.generate_moves(|moves| {
        count += moves.len();
        false
    });
    count
}

fn square(sq: u8) -> Square {
    Square::index(sq as usize)
}

fn is_light(sq: Square) -> bool {
    (sq.file() as u8 + sq.rank() as u8) % 2 == 1
}

impl Rules for Position {
    type Move = Move;

    fn side_to_move(&self) -> Side {
        self.board.side_to_move().into()
    }

    fn legal_moves(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        self.board.generate_moves(|moves| {
            out.extend(moves);
            false
        });
        out
    }

    fn legal_move_count(&self, side: Side) -> Option<usize> {
        if side == self.side_to_move() {
            Some(count_moves(&self.board))
        } else {
            self.board.null_move().map(|passed| count_moves(&passed))
        }
    }

    fn is_capture(&self, mv: Move) -> bool {
        let them = !self.board.side_to_move();
        self.board.colors(them).has(mv.to) || self.is_en_passant(mv)
    }

    fn gives_check(&self, mv: Move) -> bool {
        let mut next = self.board.clone();
        next.play(mv);
        !next.checkers().is_empty()
    }

    fn origin(&self, mv: Move) -> u8 {
        mv.from as u8
    }

    fn destination_rank(&self, mv: Move) -> u8 {
        mv.to.rank() as u8
    }

    fn piece_type_at(&self, sq: u8) -> Option<PieceKind> {
        self.board.piece_on(square(sq)).map(PieceKind::from)
    }

    fn piece_at(&self, sq: u8) -> Option<(PieceKind, Side)> {
        let sq = square(sq);
        let piece = self.board.piece_on(sq)?;
        let color = self.board.color_on(sq)?;
        Some((piece.into(), color.into()))
    }

    fn occupied(&self) -> Vec<u8> {
        self.board.occupied().into_iter().map(|sq| sq as u8).collect()
    }

    fn make_move(&mut self, mv: Move) {
        let before = self.board.clone();
        if self.board.try_play(mv).is_err() {
            panic!("illegal move {mv} in position {}", self.fen());
        }
        self.undo.push(before);
    }

    fn unmake_move(&mut self) {
        match self.undo.pop() {
            Some(before) => self.board = before,
            None => panic!("unmake_move without a matching make_move"),
        }
    }

    fn is_checkmate(&self) -> bool {
        self.in_check() && !self.has_legal_moves()
    }

    fn is_stalemate(&self) -> bool {
        !self.in_check() && !self.has_legal_moves()
    }

    fn is_insufficient_material(&self) -> bool {
        let b = &self.board;
        let heavy = b.pieces(Piece::Pawn) | b.pieces(Piece::Rook) | b.pieces(Piece::Queen);
        if !heavy.is_empty() {
            return false;
        }
        let knights = b.pieces(Piece::Knight);
        let bishops = b.pieces(Piece::Bishop);
        if knights.len() + bishops.len() <= 1 {
            return true;
        }
        // Bishops only, all on one square colour: no mate is possible.
        if knights.is_empty() {
            let light = bishops.into_iter().filter(|&sq| is_light(sq)).count();
            return light == 0 || light == bishops.len() as usize;
        }
        false
    }

    fn is_game_over(&self) -> bool {
        !self.has_legal_moves()
            || self.is_insufficient_material()
            || self.is_fifty_move_draw()
            || self.is_threefold_repetition()
    }
}

impl Position {
    /// Side that delivered mate, if the position is checkmate.
    pub fn winner(&self) -> Option<Side> {
        self.is_checkmate()
            .then(|| Side::from(self.board.side_to_move()).other())
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
