//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let board = BoardState::new();
//! assert_eq!(board.status(), GameStatus::Ongoing);
//! ```

pub use super::{
    BoardBuilder, BoardOptions, BoardState, CastlingRights, Color, FenError, GameStatus, Move,
    MoveError, MoveParseError, Piece, PieceType, Square, SquareError,
};
