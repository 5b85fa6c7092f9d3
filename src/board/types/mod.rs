//! Core chess types.
//!
//! This module contains the value types shared by every part of the board:
//! - `Piece`, `PieceType` and `Color`
//! - `Square` - validated (row, col) coordinates
//! - `Move` - committed move record
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::Move;
pub use piece::{Color, Piece, PieceType};
pub use square::Square;
