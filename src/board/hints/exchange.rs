//! Attacker and defender sets for every occupied square.

use std::collections::BTreeMap;

use crate::board::state::Grid;
use crate::board::Square;

/// Who can capture onto a square, and who could recapture.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Exchange {
    /// Opponent pieces attacking the occupant, row-major.
    pub(crate) attackers: Vec<Square>,
    /// Friendly pieces that would attack the square once it is vacated,
    /// row-major. The occupant itself is never listed.
    pub(crate) defenders: Vec<Square>,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct ExchangeTable {
    pub(crate) by_square: BTreeMap<Square, Exchange>,
    /// Occupied squares with at least one attacker, row-major.
    pub(crate) interesting: Vec<Square>,
}

impl Grid {
    pub(crate) fn exchange_table(&self) -> ExchangeTable {
        let mut table = ExchangeTable::default();
        for (square, piece) in self.pieces() {
            let attackers = self.attackers(square, piece.color.opponent());
            let mut vacated = *self;
            vacated.set(square, None);
            let defenders = vacated.attackers(square, piece.color);
            if !attackers.is_empty() {
                table.interesting.push(square);
            }
            table.by_square.insert(square, Exchange { attackers, defenders });
        }
        table
    }
}
