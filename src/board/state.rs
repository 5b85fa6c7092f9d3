use std::fmt;

use once_cell::sync::Lazy;

use super::hints::HintCaches;
use super::history::UndoHistory;
use super::{BoardOptions, CastlingRights, Color, Move, Piece, PieceType, Square};

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

static STARTING_GRID: Lazy<Grid> = Lazy::new(|| {
    let mut grid = Grid::empty();
    for (col, &kind) in BACK_RANK.iter().enumerate() {
        grid.set(Square::at(0, col), Some(Piece::new(kind, Color::Black)));
        grid.set(Square::at(1, col), Some(Piece::new(PieceType::Pawn, Color::Black)));
        grid.set(Square::at(6, col), Some(Piece::new(PieceType::Pawn, Color::White)));
        grid.set(Square::at(7, col), Some(Piece::new(kind, Color::White)));
    }
    grid
});

/// The 8x8 grid of optional pieces, indexed `[row][col]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Grid([[Option<Piece>; 8]; 8]);

impl Grid {
    pub(crate) const fn empty() -> Self {
        Grid([[None; 8]; 8])
    }

    pub(crate) fn starting() -> Self {
        *STARTING_GRID
    }

    #[inline]
    pub(crate) fn get(&self, square: Square) -> Option<Piece> {
        self.0[square.row()][square.col()]
    }

    #[inline]
    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.0[square.row()][square.col()] = piece;
    }

    #[inline]
    pub(crate) fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Move whatever is on `from` to `to`, leaving `from` empty.
    #[inline]
    pub(crate) fn relocate(&mut self, from: Square, to: Square) {
        let piece = self.get(from);
        self.set(to, piece);
        self.set(from, None);
    }

    pub(crate) fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| {
            self.get(sq)
                .is_some_and(|p| p.is(color, PieceType::King))
        })
    }

    /// Occupied squares with their pieces, row-major
    pub(crate) fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|p| (sq, p)))
    }

    pub(crate) fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    pub(crate) fn has_piece(&self, color: Color, kind: PieceType) -> bool {
        self.pieces().any(|(_, p)| p.is(color, kind))
    }
}

/// Everything that describes a game in progress, minus the undo/redo stacks
/// and hint caches. Undo snapshots are values of this type, so a snapshot
/// can never carry stacks of its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Position {
    pub(crate) grid: Grid,
    pub(crate) current_turn: Color,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) is_check: bool,
    pub(crate) is_in_checkmate: bool,
    pub(crate) is_in_stalemate: bool,
    pub(crate) move_history: Vec<Move>,
    pub(crate) last_move: Option<(Square, Square)>,
    pub(crate) position_history: Vec<String>,
}

impl Position {
    pub(crate) fn starting() -> Self {
        Position {
            grid: Grid::starting(),
            castling_rights: CastlingRights::all(),
            ..Position::empty()
        }
    }

    pub(crate) fn empty() -> Self {
        Position {
            grid: Grid::empty(),
            current_turn: Color::White,
            halfmove_clock: 0,
            fullmove_number: 1,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            is_check: false,
            is_in_checkmate: false,
            is_in_stalemate: false,
            move_history: Vec::new(),
            last_move: None,
            position_history: Vec::new(),
        }
    }
}

/// Game status derived from the check/checkmate/stalemate flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

/// A chess game: position, bounded undo/redo history and lazily built
/// tactical hint caches.
///
/// All mutation goes through `make_move`, `make_move_with_promotion`,
/// `undo_move`, `redo_move`, `set_piece` and `reset_to_initial_position`.
/// Each of them either fully succeeds or leaves the board untouched.
#[derive(Clone, Debug)]
pub struct BoardState {
    pub(crate) position: Position,
    pub(crate) history: UndoHistory,
    pub(crate) hints: HintCaches,
    pub(crate) options: BoardOptions,
}

impl BoardState {
    /// A board in the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(BoardOptions::default())
    }

    #[must_use]
    pub fn with_options(options: BoardOptions) -> Self {
        Self::from_position(Position::starting(), options)
    }

    pub(crate) fn from_position(position: Position, options: BoardOptions) -> Self {
        BoardState {
            position,
            history: UndoHistory::new(options.undo_limit),
            hints: HintCaches::default(),
            options,
        }
    }

    /// Reinitialize everything: pieces, rights, clocks, history, undo/redo
    /// and caches. Options are kept.
    pub fn reset_to_initial_position(&mut self) {
        log::debug!("resetting board to the initial position");
        self.position = Position::starting();
        self.history.clear();
        self.hints.invalidate();
    }

    /// A fully independent deep copy, stacks and caches included.
    #[must_use]
    pub fn copy(&self) -> BoardState {
        self.clone()
    }

    #[must_use]
    pub fn options(&self) -> BoardOptions {
        self.options
    }

    #[must_use]
    pub fn get_piece(&self, square: Square) -> Option<Piece> {
        self.position.grid.get(square)
    }

    /// Raw-coordinate lookup; off-board coordinates yield `None`.
    #[must_use]
    pub fn get_piece_at(&self, row: i32, col: i32) -> Option<Piece> {
        Square::from_coords(row, col).and_then(|sq| self.get_piece(sq))
    }

    /// Place or clear a piece. This is a setup operation: it is not recorded
    /// in the undo history, but it does invalidate the hint caches.
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.position.grid.set(square, piece);
        self.hints.invalidate();
    }

    /// Raw-coordinate `set_piece`; off-board coordinates are ignored.
    pub fn set_piece_at(&mut self, row: i32, col: i32, piece: Option<Piece>) {
        if let Some(square) = Square::from_coords(row, col) {
            self.set_piece(square, piece);
        }
    }

    #[must_use]
    pub fn get_king_position(&self, color: Color) -> Option<Square> {
        self.position.grid.find_king(color)
    }

    #[must_use]
    pub fn current_turn(&self) -> Color {
        self.position.current_turn
    }

    #[must_use]
    pub fn is_check(&self) -> bool {
        self.position.is_check
    }

    #[must_use]
    pub fn is_in_checkmate(&self) -> bool {
        self.position.is_in_checkmate
    }

    #[must_use]
    pub fn is_in_stalemate(&self) -> bool {
        self.position.is_in_stalemate
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.position.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.position.fullmove_number
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.position.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.position.en_passant_target
    }

    #[must_use]
    pub fn move_history(&self) -> &[Move] {
        &self.position.move_history
    }

    /// Origin and destination of the most recent move, for highlighting
    #[must_use]
    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.position.last_move
    }

    /// FEN of every position reached by a committed move, oldest first
    #[must_use]
    pub fn position_history(&self) -> &[String] {
        &self.position.position_history
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        let p = &self.position;
        if p.is_in_checkmate {
            GameStatus::Checkmate
        } else if p.is_in_stalemate {
            GameStatus::Stalemate
        } else if p.is_check {
            GameStatus::Check
        } else {
            GameStatus::Ongoing
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self.status(), GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        BoardState::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                match self.position.grid.get(Square::at(row, col)) {
                    Some(piece) => write!(f, "{piece} ")?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f, "{}", 8 - row)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
