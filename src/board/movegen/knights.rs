use super::super::attack_tables::leaper_targets;
use super::super::state::Position;
use super::super::{Color, Square};

impl Position {
    /// Knight and king steps: every offset target that is empty or holds an
    /// enemy piece.
    pub(crate) fn leaper_moves(
        &self,
        from: Square,
        color: Color,
        offsets: &'static [(isize, isize)],
    ) -> Vec<Square> {
        leaper_targets(from, offsets)
            .filter(|&to| self.grid.get(to).map_or(true, |p| p.color != color))
            .collect()
    }
}
