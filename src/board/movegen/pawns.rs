use super::super::state::Position;
use super::super::{Color, PieceType, Square};

impl Position {
    pub(crate) fn pawn_moves(&self, from: Square, color: Color) -> Vec<Square> {
        let mut moves = Vec::new();
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.grid.is_empty(one) {
                moves.push(one);
                if from.row() == color.pawn_start_rank() {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if self.grid.is_empty(two) {
                            moves.push(two);
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(target) = from.offset(dir, dc) else {
                continue;
            };
            match self.grid.get(target) {
                Some(piece) if piece.color != color => moves.push(target),
                None if self.is_en_passant_capture(from, target, color) => moves.push(target),
                _ => {}
            }
        }
        moves
    }

    /// `target` is the en passant square and the pawn that just passed it
    /// sits beside `from`.
    fn is_en_passant_capture(&self, from: Square, target: Square, color: Color) -> bool {
        if self.en_passant_target != Some(target) {
            return false;
        }
        Square::new(from.row(), target.col())
            .and_then(|beside| self.grid.get(beside))
            .is_some_and(|p| p.is(color.opponent(), PieceType::Pawn))
    }
}
