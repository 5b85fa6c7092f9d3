//! Board configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of undo snapshots kept before the oldest is dropped.
pub const DEFAULT_UNDO_LIMIT: usize = 50;

/// Tunables for a `BoardState`. They survive `reset_to_initial_position`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardOptions {
    pub undo_limit: usize,
}

impl BoardOptions {
    #[must_use]
    pub const fn new() -> Self {
        BoardOptions {
            undo_limit: DEFAULT_UNDO_LIMIT,
        }
    }

    /// Set how many moves can be taken back. Zero disables undo.
    #[must_use]
    pub const fn undo_limit(mut self, limit: usize) -> Self {
        self.undo_limit = limit;
        self
    }
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self::new()
    }
}
