//! Attack detection by offset tables and ray casts.
//!
//! Nothing here mutates the grid. Sliding attacks stop at the first occupied
//! square in each direction, whatever its color.

use super::state::Grid;
use super::{Color, PieceType, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Squares reached by stepping `(dr, dc)` from `from` until the edge.
pub(crate) fn ray(from: Square, (dr, dc): (isize, isize)) -> impl Iterator<Item = Square> {
    std::iter::successors(from.offset(dr, dc), move |sq| sq.offset(dr, dc))
}

/// Squares reached by each offset in `offsets`, skipping those off the board.
pub(crate) fn leaper_targets(
    from: Square,
    offsets: &'static [(isize, isize)],
) -> impl Iterator<Item = Square> {
    offsets
        .iter()
        .filter_map(move |&(dr, dc)| from.offset(dr, dc))
}

impl Grid {
    /// Does `by` attack `square`?
    pub(crate) fn is_attacked(&self, square: Square, by: Color) -> bool {
        self.attacker_squares(square, by).next().is_some()
    }

    /// Every piece of color `by` that attacks `square`, row-major.
    pub(crate) fn attackers(&self, square: Square, by: Color) -> Vec<Square> {
        let mut found: Vec<Square> = self.attacker_squares(square, by).collect();
        found.sort_unstable();
        found
    }

    /// Lazily yields attackers in detection order: pawns, king, knights,
    /// then orthogonal and diagonal sliders.
    fn attacker_squares(&self, square: Square, by: Color) -> impl Iterator<Item = Square> + '_ {
        // White pawns attack from the row below (row + 1), Black from above.
        let pawn_row = -by.pawn_direction();
        let pawns = [-1, 1]
            .into_iter()
            .filter_map(move |dc| square.offset(pawn_row, dc))
            .filter(move |&sq| self.holds(sq, by, &[PieceType::Pawn]));

        let kings = leaper_targets(square, &KING_OFFSETS)
            .filter(move |&sq| self.holds(sq, by, &[PieceType::King]));

        let knights = leaper_targets(square, &KNIGHT_OFFSETS)
            .filter(move |&sq| self.holds(sq, by, &[PieceType::Knight]));

        let straight = ROOK_DIRECTIONS
            .into_iter()
            .filter_map(move |dir| self.first_occupied(square, dir))
            .filter(move |&sq| self.holds(sq, by, &[PieceType::Rook, PieceType::Queen]));

        let diagonal = BISHOP_DIRECTIONS
            .into_iter()
            .filter_map(move |dir| self.first_occupied(square, dir))
            .filter(move |&sq| self.holds(sq, by, &[PieceType::Bishop, PieceType::Queen]));

        pawns.chain(kings).chain(knights).chain(straight).chain(diagonal)
    }

    /// First occupied square along a ray, if any.
    pub(crate) fn first_occupied(&self, from: Square, dir: (isize, isize)) -> Option<Square> {
        ray(from, dir).find(|&sq| !self.is_empty(sq))
    }

    fn holds(&self, square: Square, color: Color, kinds: &[PieceType]) -> bool {
        self.get(square)
            .is_some_and(|p| p.color == color && kinds.contains(&p.kind))
    }

    /// Is `color`'s king attacked? A missing king is never in check.
    pub(crate) fn is_king_attacked(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king| self.is_attacked(king, color.opponent()))
    }
}
