//! Fluent builder for setting up positions piece by piece.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceType};
//!
//! let board = BoardBuilder::new()
//!     .piece("e1".parse().unwrap(), Color::White, PieceType::King)
//!     .piece("e8".parse().unwrap(), Color::Black, PieceType::King)
//!     .piece("a2".parse().unwrap(), Color::White, PieceType::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(board.get_fen_position(), "4k3/8/8/8/8/8/P7/4K3 w - - 0 1");
//! ```

use super::state::{Grid, Position};
use super::{BoardOptions, BoardState, CastlingRights, Color, Piece, PieceType, Square};

/// A fluent builder for `BoardState` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    grid: Grid,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
    options: BoardOptions,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// An empty board, White to move, no castling rights.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            grid: Grid::empty(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            options: BoardOptions::default(),
        }
    }

    /// Start from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            grid: Grid::starting(),
            castling_rights: CastlingRights::all(),
            ..Self::new()
        }
    }

    /// Place an unmoved piece, replacing whatever stood on `square`.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceType) -> Self {
        self.grid.set(square, Some(Piece::new(kind, color)));
        self
    }

    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.grid.set(square, None);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, false);
        self
    }

    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    #[must_use]
    pub const fn options(mut self, options: BoardOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the board. Check, checkmate and stalemate are computed for the
    /// side to move.
    #[must_use]
    pub fn build(self) -> BoardState {
        let mut position = Position {
            grid: self.grid,
            current_turn: self.side_to_move,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            ..Position::empty()
        };
        position.refresh_status();
        BoardState::from_position(position, self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build();
        assert_eq!(built.get_fen_position(), BoardState::new().get_fen_position());
    }

    #[test]
    fn test_empty_board() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), Color::White, PieceType::King)
            .piece(sq("e8"), Color::Black, PieceType::King)
            .build();

        assert!(board.get_piece(sq("e1")).is_some());
        assert!(board.get_piece(sq("e8")).is_some());
        assert!(board.get_piece(sq("a1")).is_none());
    }

    #[test]
    fn test_castling_rights() {
        let board = BoardBuilder::starting_position()
            .no_castling_rights()
            .castle_kingside(Color::White)
            .build();

        let rights = board.castling_rights();
        assert!(rights.has(Color::White, true));
        assert!(!rights.has(Color::White, false));
        assert!(!rights.has(Color::Black, true));
        assert!(!rights.has(Color::Black, false));
    }

    #[test]
    fn test_side_to_move_and_status() {
        let board = BoardBuilder::new()
            .piece(sq("h8"), Color::Black, PieceType::King)
            .piece(sq("f7"), Color::White, PieceType::Queen)
            .piece(sq("g6"), Color::White, PieceType::King)
            .side_to_move(Color::Black)
            .build();

        assert_eq!(board.current_turn(), Color::Black);
        assert!(board.is_in_stalemate());
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position().clear(sq("a1")).build();
        assert!(board.get_piece(sq("a1")).is_none());
        assert!(board.get_piece(sq("b1")).is_some());
    }

    #[test]
    fn test_options_are_applied() {
        let board = BoardBuilder::starting_position()
            .options(BoardOptions::new().undo_limit(3))
            .build();
        assert_eq!(board.options().undo_limit, 3);
    }
}
