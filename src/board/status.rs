//! Check, checkmate and stalemate.
//!
//! Both verdicts scan every square for pieces of the color in question and
//! ask the legality filter about each one. No incremental state is kept.

use super::state::Position;
use super::{BoardState, Color};

impl Position {
    pub(crate) fn is_king_in_check(&self, color: Color) -> bool {
        self.grid.is_king_attacked(color)
    }

    pub(crate) fn is_checkmate(&self, color: Color) -> bool {
        self.is_king_in_check(color) && !self.has_legal_move(color)
    }

    pub(crate) fn is_stalemate(&self, color: Color) -> bool {
        !self.is_king_in_check(color) && !self.has_legal_move(color)
    }

    /// Recompute the check/checkmate/stalemate flags for the side to move.
    pub(crate) fn refresh_status(&mut self) {
        let color = self.current_turn;
        if self.grid.find_king(color).is_none() {
            log::warn!("no {color} king on the board; treating it as not in check");
        }
        self.is_check = self.is_king_in_check(color);
        if self.is_check {
            self.is_in_checkmate = self.is_checkmate(color);
            self.is_in_stalemate = false;
        } else {
            self.is_in_checkmate = false;
            self.is_in_stalemate = self.is_stalemate(color);
        }
    }
}

impl BoardState {
    /// Is `color`'s king attacked right now?
    #[must_use]
    pub fn is_king_in_check(&self, color: Color) -> bool {
        self.position.is_king_in_check(color)
    }

    /// `color` is in check and has no legal move. Evaluated afresh on each
    /// call, for either color.
    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.position.is_checkmate(color)
    }

    /// `color` is not in check and has no legal move.
    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        self.position.is_stalemate(color)
    }
}
