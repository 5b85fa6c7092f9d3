//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

const CASTLE_WHITE_K: u8 = 1 << 0;
const CASTLE_WHITE_Q: u8 = 1 << 1;
const CASTLE_BLACK_K: u8 = 1 << 2;
const CASTLE_BLACK_Q: u8 = 1 << 3;

const ALL_CASTLING_RIGHTS: u8 = CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Castling rights represented as a bitmask.
///
/// Within a game rights are only ever removed; the one way to get them back
/// is a full reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All four castling rights
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is held
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit_for(color, kingside) != 0
    }

    #[must_use]
    pub const fn white_kingside(self) -> bool {
        self.has(Color::White, true)
    }

    #[must_use]
    pub const fn white_queenside(self) -> bool {
        self.has(Color::White, false)
    }

    #[must_use]
    pub const fn black_kingside(self) -> bool {
        self.has(Color::Black, true)
    }

    #[must_use]
    pub const fn black_queenside(self) -> bool {
        self.has(Color::Black, false)
    }

    /// Grant a right. Only position setup (FEN, builder) does this.
    #[inline]
    pub(crate) fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit_for(color, kingside);
    }

    /// Remove a specific castling right
    #[inline]
    pub(crate) fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit_for(color, kingside);
    }

    /// Remove both rights of a color (king moved or castled)
    #[inline]
    pub(crate) fn remove_all(&mut self, color: Color) {
        self.remove(color, true);
        self.remove(color, false);
    }

    /// True if `self` holds no right that `earlier` did not
    #[must_use]
    pub const fn is_subset_of(self, earlier: CastlingRights) -> bool {
        self.0 & !earlier.0 == 0
    }

    /// FEN castling field in fixed `KQkq` order, `-` when empty
    #[must_use]
    pub fn to_fen(self) -> String {
        let mut castling = String::new();
        for (color, kingside, letter) in [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ] {
            if self.has(color, kingside) {
                castling.push(letter);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        castling
    }

    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }
}
