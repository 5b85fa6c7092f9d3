use super::super::attack_tables::ray;
use super::super::state::Position;
use super::super::{Color, Square};

impl Position {
    /// Ray-cast moves: empty squares up to the first occupied one, which is
    /// included only if it holds an enemy piece.
    pub(crate) fn slider_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
    ) -> Vec<Square> {
        let mut moves = Vec::new();
        for &dir in directions {
            for to in ray(from, dir) {
                match self.grid.get(to) {
                    None => moves.push(to),
                    Some(piece) => {
                        if piece.color != color {
                            moves.push(to);
                        }
                        break;
                    }
                }
            }
        }
        moves
    }
}
