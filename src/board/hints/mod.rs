//! Tactical hint caches.
//!
//! Three independent caches feed the optional player hints: hanging pieces,
//! attacker/defender sets and knight-fork squares. Each one is either empty
//! (stale) or holds a complete answer for the current grid; a read on a stale
//! cache rebuilds it in full before answering. Committed moves, undo/redo,
//! `set_piece` and reset clear all three. The legality filter never does.

mod exchange;
mod forks;
mod hanging;

use once_cell::unsync::OnceCell;

pub(crate) use exchange::ExchangeTable;

use super::{BoardState, Color, Square};

/// A lazily built value with an explicit stale state.
#[derive(Clone, Debug)]
pub(crate) struct Cached<T>(OnceCell<T>);

impl<T> Default for Cached<T> {
    fn default() -> Self {
        Cached(OnceCell::new())
    }
}

impl<T> Cached<T> {
    pub(crate) fn get_or_build(&self, build: impl FnOnce() -> T) -> &T {
        self.0.get_or_init(build)
    }

    pub(crate) fn invalidate(&mut self) {
        self.0.take();
    }

    #[cfg(test)]
    pub(crate) fn is_fresh(&self) -> bool {
        self.0.get().is_some()
    }
}

/// Per-color square lists, indexed by `Color::index`.
pub(crate) type ByColor = [Vec<Square>; 2];

#[derive(Clone, Debug, Default)]
pub(crate) struct HintCaches {
    pub(crate) hanging: Cached<ByColor>,
    pub(crate) exchange: Cached<ExchangeTable>,
    pub(crate) forks: Cached<ByColor>,
}

impl HintCaches {
    pub(crate) fn invalidate(&mut self) {
        self.hanging.invalidate();
        self.exchange.invalidate();
        self.forks.invalidate();
    }

    #[cfg(test)]
    pub(crate) fn any_fresh(&self) -> bool {
        self.hanging.is_fresh() || self.exchange.is_fresh() || self.forks.is_fresh()
    }
}

impl BoardState {
    /// Pieces of `color` attacked by the opponent and not defended by any
    /// piece of their own color, row-major.
    #[must_use]
    pub fn get_hanging_pieces(&self, color: Color) -> &[Square] {
        let hanging = self.hints.hanging.get_or_build(|| {
            log::trace!("rebuilding hanging-piece cache");
            self.position.grid.hanging_pieces()
        });
        &hanging[color.index()]
    }

    /// Summed material value of `color`'s hanging pieces.
    #[must_use]
    pub fn get_hanging_material(&self, color: Color) -> u32 {
        self.get_hanging_pieces(color)
            .iter()
            .filter_map(|&sq| self.get_piece(sq))
            .map(|p| p.kind.value())
            .sum()
    }

    /// Occupied squares attacked by at least one enemy piece, row-major.
    #[must_use]
    pub fn get_tactically_interesting_squares(&self) -> &[Square] {
        &self.exchange_table().interesting
    }

    /// Attackers and defenders of the piece on `square`. Both lists are empty
    /// for an empty square.
    #[must_use]
    pub fn get_all_attackers_and_defenders(&self, square: Square) -> (&[Square], &[Square]) {
        match self.exchange_table().by_square.get(&square) {
            Some(exchange) => (exchange.attackers.as_slice(), exchange.defenders.as_slice()),
            None => (&[], &[]),
        }
    }

    /// Squares a knight of `color` could stand on (empty or enemy-held) to
    /// attack two or more of the opponent's king, queen and rooks. Always
    /// empty when `color` has no knight.
    #[must_use]
    pub fn get_knight_fork_squares(&self, color: Color) -> &[Square] {
        let forks = self.hints.forks.get_or_build(|| {
            log::trace!("rebuilding knight-fork cache");
            self.position.grid.knight_fork_squares()
        });
        &forks[color.index()]
    }

    fn exchange_table(&self) -> &ExchangeTable {
        self.hints.exchange.get_or_build(|| {
            log::trace!("rebuilding exchange cache");
            self.position.grid.exchange_table()
        })
    }
}
