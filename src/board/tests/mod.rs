//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `make_move.rs` - Move execution, special moves and bookkeeping
//! - `edge_cases.rs` - Special positions and edge cases
//! - `history.rs` - Undo/redo, reset and copies
//! - `hints.rs` - Tactical hint caches
//! - `proptest.rs` - Property-based tests

mod hints;
mod make_move;

use crate::board::Square;

pub(super) fn sq(name: &str) -> Square {
    name.parse().unwrap()
}
