//! Bounded undo/redo history.
//!
//! Snapshots are whole `Position` values. A `Position` has no stack fields,
//! so a snapshot can never nest further snapshots inside it.

use std::collections::VecDeque;

use super::state::Position;
use super::BoardState;

#[derive(Clone, Debug)]
pub(crate) struct UndoHistory {
    undo: VecDeque<Position>,
    redo: Vec<Position>,
    limit: usize,
}

impl UndoHistory {
    pub(crate) fn new(limit: usize) -> Self {
        UndoHistory {
            undo: VecDeque::with_capacity(limit.min(64)),
            redo: Vec::new(),
            limit,
        }
    }

    /// Record the position before a new move. Clears the redo stack.
    pub(crate) fn record(&mut self, snapshot: Position) {
        self.push_undo(snapshot);
        self.redo.clear();
    }

    fn push_undo(&mut self, snapshot: Position) {
        if self.limit == 0 {
            return;
        }
        self.undo.push_back(snapshot);
        while self.undo.len() > self.limit {
            self.undo.pop_front();
            log::debug!("undo history full; dropped oldest snapshot");
        }
    }

    pub(crate) fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub(crate) fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub(crate) fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

impl BoardState {
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.undo_len() > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.redo_len() > 0
    }

    /// Number of moves that can currently be taken back.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history.undo_len()
    }

    /// Number of undone moves that can be replayed.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.history.redo_len()
    }

    /// Take back the last move. Returns false (and does nothing) when there
    /// is nothing to undo.
    pub fn undo_move(&mut self) -> bool {
        let Some(previous) = self.history.undo.pop_back() else {
            return false;
        };
        let current = std::mem::replace(&mut self.position, previous);
        self.history.redo.push(current);
        self.hints.invalidate();
        log::debug!("undo: restored {}", self.get_fen_position());
        true
    }

    /// Replay the last undone move. Returns false when there is nothing to
    /// redo.
    pub fn redo_move(&mut self) -> bool {
        let Some(next) = self.history.redo.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.position, next);
        self.history.push_undo(current);
        self.hints.invalidate();
        log::debug!("redo: restored {}", self.get_fen_position());
        true
    }
}
