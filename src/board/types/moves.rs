//! Committed move records.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceType};
use super::square::Square;

/// A move as it was played, appended to the game's move history.
///
/// `piece` is the piece as it stands on `to` after the move (so a promoted
/// pawn is recorded as the promoted piece) and `captured` is the piece that
/// left the board, including a pawn taken en passant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promotion: Option<PieceType>,
    pub is_castle: bool,
    pub castle_kingside: bool,
    pub is_en_passant: bool,
    pub is_double_pawn_push: bool,
    pub move_number: u32,
    pub notation: String,
}

impl Move {
    #[inline]
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Long algebraic form, e.g. `e2e4` or `e7e8q`
    #[must_use]
    pub fn to_uci(&self) -> String {
        match self.promotion {
            Some(kind) => format!(
                "{}{}{}",
                self.from,
                self.to,
                kind.to_char().to_ascii_lowercase()
            ),
            None => format!("{}{}", self.from, self.to),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.notation.is_empty() {
            write!(f, "{} -> {}", self.from, self.to)
        } else {
            write!(f, "{}", self.notation)
        }
    }
}
