//! Sharing a board between threads.
//!
//! `BoardState` itself is single-owner. Hosts that drive one game from
//! several threads go through `SharedBoard`, which serializes every access
//! behind one lock.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::BoardState;

/// A cloneable handle to one board behind a mutex.
#[derive(Clone, Debug, Default)]
pub struct SharedBoard(Arc<Mutex<BoardState>>);

impl SharedBoard {
    #[must_use]
    pub fn new(board: BoardState) -> Self {
        SharedBoard(Arc::new(Mutex::new(board)))
    }

    /// Run `f` with shared access to the board.
    pub fn with<R>(&self, f: impl FnOnce(&BoardState) -> R) -> R {
        f(&self.0.lock())
    }

    /// Run `f` with exclusive access to the board.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> R {
        f(&mut self.0.lock())
    }

    /// An independent copy of the board as it is now.
    #[must_use]
    pub fn snapshot(&self) -> BoardState {
        self.0.lock().clone()
    }
}

impl From<BoardState> for SharedBoard {
    fn from(board: BoardState) -> Self {
        SharedBoard::new(board)
    }
}
