//! Committing moves.
//!
//! Every entry point funnels into `try_make_move_with_promotion`: validate
//! completely, then snapshot, invalidate the hint caches and apply. A request
//! that fails validation leaves every field untouched.

use super::error::{MoveError, MoveParseError};
use super::state::Position;
use super::{BoardState, Color, Move, Piece, PieceType, Square};

/// Corner a castling rook leaves and the column it lands on.
const fn castle_rook_cols(kingside: bool) -> (usize, usize) {
    if kingside {
        (7, 5)
    } else {
        (0, 3)
    }
}

/// Parse long algebraic move text: `e2e4`, `e7e8q`.
pub fn parse_move(text: &str) -> Result<(Square, Square, Option<PieceType>), MoveParseError> {
    let len = text.chars().count();
    if !(4..=5).contains(&len) {
        return Err(MoveParseError::InvalidLength { len });
    }
    if !text.is_ascii() {
        return Err(MoveParseError::InvalidSquare {
            notation: text.to_string(),
        });
    }

    let square = |s: &str| {
        s.parse::<Square>()
            .map_err(|_| MoveParseError::InvalidSquare {
                notation: text.to_string(),
            })
    };
    let from = square(&text[0..2])?;
    let to = square(&text[2..4])?;

    let promotion = match text[4..].chars().next() {
        None => None,
        Some(c) => {
            let kind = PieceType::from_char(c).ok_or(MoveParseError::InvalidPromotion { char: c })?;
            if !kind.is_valid_promotion() {
                return Err(MoveParseError::InvalidPromotion { char: c });
            }
            Some(kind)
        }
    };
    Ok((from, to, promotion))
}

impl Position {
    /// Check a move request against the current position. Returns the moving
    /// piece on success.
    fn validate(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceType>,
    ) -> Result<Piece, MoveError> {
        let piece = self.grid.get(from).ok_or_else(|| MoveError::NoPiece {
            from: from.to_string(),
        })?;
        if piece.color != self.current_turn {
            return Err(MoveError::WrongTurn {
                from: from.to_string(),
            });
        }
        if !self.legal_moves(from).contains(&to) {
            return Err(MoveError::IllegalDestination {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        // The promotion piece only matters when a pawn reaches the last rank.
        if let Some(kind) = promotion.filter(|_| Self::is_promotion(piece, to)) {
            if !kind.is_valid_promotion() {
                return Err(MoveError::InvalidPromotion {
                    piece: kind.to_char(),
                });
            }
        }
        Ok(piece)
    }

    fn is_promotion(piece: Piece, to: Square) -> bool {
        piece.kind == PieceType::Pawn && to.row() == piece.color.pawn_promotion_rank()
    }

    /// Apply a validated move and append its record.
    fn apply(&mut self, from: Square, to: Square, piece: Piece, promotion: Option<PieceType>) {
        let color = piece.color;
        let promotion = Self::is_promotion(piece, to).then(|| promotion.unwrap_or(PieceType::Queen));
        let body = self.san_body(from, to, promotion);

        let is_castle = self.is_castling_move(from, to);
        let castle_kingside = is_castle && to.col() > from.col();
        let is_en_passant = self.is_en_passant_move(from, to);
        let is_double_pawn_push =
            piece.kind == PieceType::Pawn && from.row().abs_diff(to.row()) == 2;
        let mut captured = self.grid.get(to);

        if is_castle {
            let (rook_from_col, rook_to_col) = castle_rook_cols(castle_kingside);
            let rook_from = Square::at(from.row(), rook_from_col);
            let rook_to = Square::at(from.row(), rook_to_col);
            let rook = self.grid.get(rook_from).map(Piece::moved);
            self.grid.set(from, None);
            self.grid.set(to, Some(piece.moved()));
            self.grid.set(rook_from, None);
            self.grid.set(rook_to, rook);
            self.castling_rights.remove_all(color);
        } else {
            if is_en_passant {
                let victim = Square::at(from.row(), to.col());
                captured = self.grid.get(victim);
                self.grid.set(victim, None);
            }
            let placed = match promotion {
                Some(kind) => Piece::new(kind, color).moved(),
                None => piece.moved(),
            };
            self.grid.set(from, None);
            self.grid.set(to, Some(placed));

            match piece.kind {
                PieceType::King => self.castling_rights.remove_all(color),
                PieceType::Rook => self.clear_corner_right(from, color),
                _ => {}
            }
            if let Some(victim) = captured.filter(|p| p.kind == PieceType::Rook) {
                self.clear_corner_right(to, victim.color);
            }
        }

        self.en_passant_target = if is_double_pawn_push {
            Some(Square::at((from.row() + to.row()) / 2, from.col()))
        } else {
            None
        };

        if captured.is_some() || piece.kind == PieceType::Pawn {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        self.current_turn = self.current_turn.opponent();
        if self.current_turn == Color::White {
            self.fullmove_number += 1;
        }
        self.refresh_status();

        let record = Move {
            from,
            to,
            piece: self.grid.get(to).unwrap_or(piece),
            captured,
            promotion,
            is_castle,
            castle_kingside,
            is_en_passant,
            is_double_pawn_push,
            move_number: self.fullmove_number,
            notation: format!("{body}{}", self.check_suffix()),
        };
        self.last_move = Some((from, to));
        let fen = self.to_fen();
        self.position_history.push(fen);
        self.move_history.push(record);
    }

    /// A rook leaving or being taken on its home corner ends that side's
    /// castling right.
    fn clear_corner_right(&mut self, square: Square, color: Color) {
        if square.row() == color.back_rank() && (square.col() == 0 || square.col() == 7) {
            self.castling_rights.remove(color, square.col() == 7);
        }
    }
}

impl BoardState {
    /// Move the piece on `from` to `to` if that is a legal move for the side
    /// to move. A pawn reaching the last rank becomes a queen.
    pub fn make_move(&mut self, from: Square, to: Square) -> bool {
        self.try_make_move(from, to).is_ok()
    }

    /// Like [`BoardState::make_move`], promoting to `promotion` when a pawn
    /// reaches the last rank. The promotion piece is ignored otherwise.
    pub fn make_move_with_promotion(&mut self, from: Square, to: Square, promotion: PieceType) -> bool {
        self.try_make_move_with_promotion(from, to, Some(promotion)).is_ok()
    }

    pub fn try_make_move(&mut self, from: Square, to: Square) -> Result<&Move, MoveError> {
        self.try_make_move_with_promotion(from, to, None)
    }

    /// Validate and commit a move, returning its record.
    pub fn try_make_move_with_promotion(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceType>,
    ) -> Result<&Move, MoveError> {
        let piece = match self.position.validate(from, to, promotion) {
            Ok(piece) => piece,
            Err(err) => {
                log::trace!("rejected move {from}{to}: {err}");
                return Err(err);
            }
        };

        self.history.record(self.position.clone());
        self.hints.invalidate();
        self.position.apply(from, to, piece, promotion);

        let position = &self.position;
        let record = &position.move_history[position.move_history.len() - 1];
        log::debug!(
            "{}. {} -> {}",
            record.move_number,
            record.notation,
            position.position_history.last().map_or("", String::as_str)
        );
        Ok(record)
    }

    /// Would moving the piece on `from` to `to` promote a pawn? Only the
    /// piece and the destination rank are consulted.
    #[must_use]
    pub fn is_pawn_promotion(&self, from: Square, to: Square) -> bool {
        self.get_piece(from)
            .is_some_and(|piece| Position::is_promotion(piece, to))
    }

    /// Parse long algebraic move text. See [`parse_move`].
    pub fn parse_move(&self, text: &str) -> Result<(Square, Square, Option<PieceType>), MoveParseError> {
        parse_move(text)
    }

    /// Parse and commit a move given as `e2e4` or `e7e8q`.
    pub fn play(&mut self, text: &str) -> Result<&Move, MoveError> {
        let (from, to, promotion) = parse_move(text)?;
        self.try_make_move_with_promotion(from, to, promotion)
    }

    /// The board as it would be after the move, or `None` if the move is
    /// refused. `self` is not modified.
    #[must_use]
    pub fn preview(&self, from: Square, to: Square, promotion: Option<PieceType>) -> Option<BoardState> {
        let mut copy = self.clone();
        copy.try_make_move_with_promotion(from, to, promotion).ok()?;
        Some(copy)
    }
}
