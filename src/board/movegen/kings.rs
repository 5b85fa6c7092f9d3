use super::super::attack_tables::KING_OFFSETS;
use super::super::state::Position;
use super::super::{Color, PieceType, Square};

const KING_HOME_COL: usize = 4;

impl Position {
    pub(crate) fn king_moves(&self, from: Square, color: Color) -> Vec<Square> {
        let mut moves = self.leaper_moves(from, color, &KING_OFFSETS);
        if self.can_castle(color, true) {
            moves.push(Square::at(from.row(), 6));
        }
        if self.can_castle(color, false) {
            moves.push(Square::at(from.row(), 2));
        }
        moves
    }

    /// Castling needs the right, king and rook on their home squares, the
    /// king out of check, an empty path to the rook and no attacked square on
    /// the king's way (destination included).
    pub(crate) fn can_castle(&self, color: Color, kingside: bool) -> bool {
        if !self.castling_rights.has(color, kingside) {
            return false;
        }

        let row = color.back_rank();
        let king_home = Square::at(row, KING_HOME_COL);
        let rook_home = Square::at(row, if kingside { 7 } else { 0 });
        let pieces_home = self
            .grid
            .get(king_home)
            .is_some_and(|p| p.is(color, PieceType::King))
            && self
                .grid
                .get(rook_home)
                .is_some_and(|p| p.is(color, PieceType::Rook));
        if !pieces_home {
            return false;
        }

        let enemy = color.opponent();
        if self.grid.is_attacked(king_home, enemy) {
            return false;
        }

        let (between, king_path): (&[usize], &[usize]) = if kingside {
            (&[5, 6], &[5, 6])
        } else {
            (&[1, 2, 3], &[3, 2])
        };
        if between
            .iter()
            .any(|&col| !self.grid.is_empty(Square::at(row, col)))
        {
            return false;
        }
        !king_path
            .iter()
            .any(|&col| self.grid.is_attacked(Square::at(row, col), enemy))
    }

    /// A king moving exactly two files along its own rank.
    pub(crate) fn is_castling_move(&self, from: Square, to: Square) -> bool {
        self.grid
            .get(from)
            .is_some_and(|p| p.kind == PieceType::King)
            && from.row() == to.row()
            && from.col().abs_diff(to.col()) == 2
    }
}
