//! Chess board state and rules.
//!
//! A mailbox grid (row 0 is rank 8, column 0 is file a) with full rules:
//! castling, en passant and promotion, check/checkmate/stalemate detection,
//! bounded undo/redo and three lazily built tactical hint caches.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardState, Color};
//!
//! let mut board = BoardState::new();
//! assert_eq!(board.all_legal_moves().len(), 20);
//! assert!(board.make_move("e2".parse().unwrap(), "e4".parse().unwrap()));
//! assert_eq!(board.current_turn(), Color::Black);
//! ```

mod attack_tables;
mod builder;
mod error;
mod fen;
mod hints;
mod history;
mod make_move;
mod movegen;
mod options;
pub mod prelude;
mod san;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, MoveParseError, SquareError};
pub use make_move::parse_move;
pub use options::{BoardOptions, DEFAULT_UNDO_LIMIT};
pub use state::{BoardState, GameStatus};
pub use types::{CastlingRights, Color, Move, Piece, PieceType, Square};
