//! Knight-fork squares.

use super::ByColor;
use crate::board::attack_tables::{leaper_targets, KNIGHT_OFFSETS};
use crate::board::state::Grid;
use crate::board::{Color, PieceType, Square};

/// Pieces worth forking.
const FORK_TARGETS: [PieceType; 3] = [PieceType::King, PieceType::Queen, PieceType::Rook];

impl Grid {
    pub(crate) fn knight_fork_squares(&self) -> ByColor {
        let mut forks = ByColor::default();
        for color in Color::BOTH {
            forks[color.index()] = self.fork_squares_for(color);
        }
        forks
    }

    fn fork_squares_for(&self, color: Color) -> Vec<Square> {
        if !self.has_piece(color, PieceType::Knight) {
            return Vec::new();
        }
        let enemy = color.opponent();
        Square::all()
            .filter(|&sq| self.get(sq).map_or(true, |p| p.color == enemy))
            .filter(|&sq| {
                leaper_targets(sq, &KNIGHT_OFFSETS)
                    .filter_map(|t| self.get(t))
                    .filter(|p| p.color == enemy && FORK_TARGETS.contains(&p.kind))
                    .count()
                    >= 2
            })
            .collect()
    }
}
