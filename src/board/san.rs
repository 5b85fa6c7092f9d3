//! Standard Algebraic Notation for committed moves.
//!
//! The body of the notation ("Nbd2", "exd6", "O-O", "e8=Q") depends on the
//! position before the move; the check suffix is appended once the move has
//! been applied and the status flags refreshed.

use super::state::Position;
use super::{PieceType, Square};

impl Position {
    /// Notation for `from -> to` without a check suffix. `from` must hold a
    /// piece and `to` must be one of its legal destinations.
    pub(crate) fn san_body(&self, from: Square, to: Square, promotion: Option<PieceType>) -> String {
        let Some(piece) = self.grid.get(from) else {
            return String::new();
        };

        if self.is_castling_move(from, to) {
            let san = if to.col() > from.col() { "O-O" } else { "O-O-O" };
            return san.to_string();
        }

        let is_capture = !self.grid.is_empty(to) || self.is_en_passant_move(from, to);
        let mut san = String::new();

        if piece.kind == PieceType::Pawn {
            if is_capture {
                san.push(from.file_char());
            }
        } else {
            san.push(piece.kind.to_char());
            let (needs_file, needs_rank) = self.needs_disambiguation(from, to, piece.kind);
            if needs_file {
                san.push(from.file_char());
            }
            if needs_rank {
                san.push(from.rank_char());
            }
        }

        if is_capture {
            san.push('x');
        }
        san.push_str(&to.to_string());

        if let Some(kind) = promotion {
            san.push('=');
            san.push(kind.to_char());
        }
        san
    }

    /// Suffix for the side now to move: `#` when mated, `+` when in check.
    pub(crate) fn check_suffix(&self) -> &'static str {
        if self.is_in_checkmate {
            "#"
        } else if self.is_check {
            "+"
        } else {
            ""
        }
    }

    /// Returns (`needs_file`, `needs_rank`).
    fn needs_disambiguation(&self, from: Square, to: Square, kind: PieceType) -> (bool, bool) {
        let Some(color) = self.grid.get(from).map(|p| p.color) else {
            return (false, false);
        };
        let rivals: Vec<Square> = self
            .grid
            .pieces_of(color)
            .filter(|&(sq, p)| sq != from && p.kind == kind)
            .map(|(sq, _)| sq)
            .filter(|&sq| self.legal_moves(sq).contains(&to))
            .collect();

        if rivals.is_empty() {
            return (false, false);
        }

        let same_file = rivals.iter().any(|sq| sq.col() == from.col());
        let same_rank = rivals.iter().any(|sq| sq.row() == from.row());
        match (same_file, same_rank) {
            (false, _) => (true, false),
            (true, false) => (false, true),
            (true, true) => (true, true),
        }
    }
}
