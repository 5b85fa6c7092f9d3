//! Hanging pieces: attacked by the opponent and defended by nobody.
//!
//! A plain attacked/defended test; material values play no part.

use super::ByColor;
use crate::board::state::Grid;

impl Grid {
    pub(crate) fn hanging_pieces(&self) -> ByColor {
        let mut hanging = ByColor::default();
        for (square, piece) in self.pieces() {
            let attacked = self.is_attacked(square, piece.color.opponent());
            if attacked && !self.is_attacked(square, piece.color) {
                hanging[piece.color.index()].push(square);
            }
        }
        hanging
    }
}
