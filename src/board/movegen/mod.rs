//! Pseudo-legal move generation and the legality filter.
//!
//! Generators return destination squares for the piece on a square. The
//! legality filter plays each candidate on a scratch copy of the grid and
//! keeps it only if the mover's king is not attacked afterwards; the real
//! grid, the caches and the history are never touched.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{BISHOP_DIRECTIONS, KNIGHT_OFFSETS, ROOK_DIRECTIONS};
use super::state::Position;
use super::{BoardState, Color, PieceType, Square};

const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Position {
    /// Destinations for the piece on `from`, ignoring own-king safety.
    pub(crate) fn pseudo_moves(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.grid.get(from) else {
            return Vec::new();
        };
        let color = piece.color;
        match piece.kind {
            PieceType::Pawn => self.pawn_moves(from, color),
            PieceType::Knight => self.leaper_moves(from, color, &KNIGHT_OFFSETS),
            PieceType::Bishop => self.slider_moves(from, color, &BISHOP_DIRECTIONS),
            PieceType::Rook => self.slider_moves(from, color, &ROOK_DIRECTIONS),
            PieceType::Queen => self.slider_moves(from, color, &QUEEN_DIRECTIONS),
            PieceType::King => self.king_moves(from, color),
        }
    }

    /// Pseudo-legal destinations that do not leave the mover's king attacked.
    pub(crate) fn legal_moves(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.grid.get(from) else {
            return Vec::new();
        };
        self.pseudo_moves(from)
            .into_iter()
            .filter(|&to| self.leaves_king_safe(from, to, piece.color))
            .collect()
    }

    fn leaves_king_safe(&self, from: Square, to: Square, color: Color) -> bool {
        let mut trial = self.grid;
        if self.is_en_passant_move(from, to) {
            trial.set(Square::at(from.row(), to.col()), None);
        }
        trial.relocate(from, to);
        !trial.is_king_attacked(color)
    }

    /// A pawn moving diagonally onto an empty square.
    pub(crate) fn is_en_passant_move(&self, from: Square, to: Square) -> bool {
        self.grid
            .get(from)
            .is_some_and(|p| p.kind == PieceType::Pawn)
            && from.col() != to.col()
            && self.grid.is_empty(to)
    }

    pub(crate) fn has_legal_move(&self, color: Color) -> bool {
        self.grid
            .pieces_of(color)
            .any(|(from, _)| !self.legal_moves(from).is_empty())
    }

    /// Every legal (from, to) pair for `color`, origins row-major.
    pub(crate) fn all_legal_moves(&self, color: Color) -> Vec<(Square, Square)> {
        self.grid
            .pieces_of(color)
            .flat_map(|(from, _)| self.legal_moves(from).into_iter().map(move |to| (from, to)))
            .collect()
    }
}

impl BoardState {
    /// Legal destinations for the piece on `square`; empty for an empty
    /// square. Works for either color regardless of whose turn it is.
    #[must_use]
    pub fn get_possible_moves(&self, square: Square) -> Vec<Square> {
        self.position.legal_moves(square)
    }

    /// Same as [`BoardState::get_possible_moves`].
    #[must_use]
    pub fn legal_moves(&self, square: Square) -> Vec<Square> {
        self.position.legal_moves(square)
    }

    /// Every legal move of the side to move as (from, to) pairs.
    #[must_use]
    pub fn all_legal_moves(&self) -> Vec<(Square, Square)> {
        self.position.all_legal_moves(self.position.current_turn)
    }

    #[must_use]
    pub fn can_castle(&self, color: Color, kingside: bool) -> bool {
        self.position.can_castle(color, kingside)
    }

    /// Does any piece of `by_color` attack `square`?
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by_color: Color) -> bool {
        self.position.grid.is_attacked(square, by_color)
    }
}
