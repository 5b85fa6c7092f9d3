use std::str::FromStr;

use super::error::FenError;
use super::state::{Grid, Position};
use super::{BoardOptions, BoardState, CastlingRights, Color, Piece, PieceType, Square};

impl Grid {
    /// Piece placement field: rank 8 first, empty runs as digits.
    fn placement(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut text = String::new();
            let mut empty = 0;
            for col in 0..8 {
                match self.get(Square::at(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            text.push_str(&empty.to_string());
                            empty = 0;
                        }
                        text.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }
        rows.join("/")
    }

    fn parse_placement(field: &str) -> Result<Grid, FenError> {
        let ranks: Vec<&str> = field.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut grid = Grid::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0;
            for c in rank.chars() {
                if let Some(run) = c.to_digit(10) {
                    col += run as usize;
                } else {
                    let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if col >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: 8 - row,
                            files: col + 1,
                        });
                    }
                    // A pawn off its start rank has evidently moved.
                    let piece = if piece.kind == PieceType::Pawn
                        && row != piece.color.pawn_start_rank()
                    {
                        piece.moved()
                    } else {
                        piece
                    };
                    grid.set(Square::at(row, col), Some(piece));
                    col += 1;
                }
            }
            if col > 8 {
                return Err(FenError::TooManyFiles {
                    rank: 8 - row,
                    files: col,
                });
            }
            if col < 8 {
                return Err(FenError::TooFewFiles {
                    rank: 8 - row,
                    files: col,
                });
            }
        }
        Ok(grid)
    }
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }
    for c in field.chars() {
        match c {
            'K' => rights.set(Color::White, true),
            'Q' => rights.set(Color::White, false),
            'k' => rights.set(Color::Black, true),
            'q' => rights.set(Color::Black, false),
            _ => return Err(FenError::InvalidCastling { char: c }),
        }
    }
    Ok(rights)
}

fn parse_clock(field: Option<&&str>, default: u32) -> Result<u32, FenError> {
    match field {
        None => Ok(default),
        Some(text) => text.parse().map_err(|_| FenError::InvalidClock {
            found: (*text).to_string(),
        }),
    }
}

impl Position {
    pub(crate) fn to_fen(&self) -> String {
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());
        format!(
            "{} {} {} {} {} {}",
            self.grid.placement(),
            self.current_turn.fen_char(),
            self.castling_rights.to_fen(),
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    pub(crate) fn from_fen(fen: &str) -> Result<Position, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let grid = Grid::parse_placement(parts[0])?;

        let current_turn = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let castling_rights = parse_castling(parts[2])?;

        let en_passant_target = if parts[3] == "-" {
            None
        } else {
            let square: Square = parts[3].parse().map_err(|_| FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            })?;
            Some(square)
        };

        let mut position = Position {
            grid,
            current_turn,
            halfmove_clock: parse_clock(parts.get(4), 0)?,
            fullmove_number: parse_clock(parts.get(5), 1)?,
            castling_rights,
            en_passant_target,
            ..Position::empty()
        };
        position.refresh_status();
        Ok(position)
    }
}

impl BoardState {
    /// Six-field FEN of the current position.
    #[must_use]
    pub fn get_fen_position(&self) -> String {
        self.position.to_fen()
    }

    /// Same as [`BoardState::get_fen_position`].
    #[must_use]
    pub fn to_fen(&self) -> String {
        self.position.to_fen()
    }

    /// Parse a position from FEN. The halfmove clock and fullmove number may
    /// be omitted (they default to 0 and 1). Status flags are computed from
    /// the parsed position; history starts empty.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Self::from_fen_with_options(fen, BoardOptions::default())
    }

    pub fn from_fen_with_options(fen: &str, options: BoardOptions) -> Result<Self, FenError> {
        let position = Position::from_fen(fen)?;
        Ok(BoardState::from_position(position, options))
    }
}

impl FromStr for BoardState {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoardState::from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_initial_fen() {
        assert_eq!(BoardState::new().get_fen_position(), START);
    }

    #[test]
    fn test_fen_round_trip() {
        let fen = "r3k2r/pp1n1ppp/2p5/3pP3/8/8/PPP2PPP/R3K2R w Kq d6 0 12";
        let board = BoardState::from_fen(fen).unwrap();
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn test_fen_black_to_move() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let board = BoardState::from_fen(fen).unwrap();
        assert_eq!(board.current_turn(), Color::Black);
        assert_eq!(board.en_passant_target(), Some("e3".parse().unwrap()));
    }

    #[test]
    fn test_clocks_are_optional() {
        let board = BoardState::from_fen("4k3/8/8/8/8/8/8/4K3 w - -").unwrap();
        assert_eq!(board.halfmove_clock(), 0);
        assert_eq!(board.fullmove_number(), 1);
    }

    #[test]
    fn test_pawn_off_start_rank_is_marked_moved() {
        let board = BoardState::from_fen("4k3/8/8/8/4P3/8/3P4/4K3 w - - 0 1").unwrap();
        assert!(board.get_piece("e4".parse().unwrap()).unwrap().has_moved);
        assert!(!board.get_piece("d2".parse().unwrap()).unwrap().has_moved);
    }

    #[test]
    fn test_fen_error_too_few_parts() {
        let result = BoardState::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");
        assert!(matches!(result, Err(FenError::TooFewParts { .. })));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let result = BoardState::from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidPiece { char: 'x' })));
    }

    #[test]
    fn test_fen_error_rank_shape() {
        let result = BoardState::from_fen("rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::WrongRankCount { found: 7 })));
        let result = BoardState::from_fen("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::TooFewFiles { rank: 7, files: 7 })));
        let result = BoardState::from_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::TooManyFiles { .. })));
    }

    #[test]
    fn test_fen_error_invalid_side_to_move() {
        let result = BoardState::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidSideToMove { .. })));
    }

    #[test]
    fn test_fen_error_invalid_castling() {
        let result = BoardState::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidCastling { char: 'X' })));
    }

    #[test]
    fn test_fen_error_invalid_en_passant() {
        let result = BoardState::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1");
        assert!(matches!(result, Err(FenError::InvalidEnPassant { .. })));
    }

    #[test]
    fn test_fen_error_invalid_clock() {
        let result = BoardState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - x 1");
        assert!(matches!(result, Err(FenError::InvalidClock { .. })));
    }

    #[test]
    fn test_partial_castling() {
        let board =
            BoardState::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1").unwrap();
        let rights = board.castling_rights();
        assert!(rights.white_kingside());
        assert!(!rights.white_queenside());
        assert!(!rights.black_kingside());
        assert!(rights.black_queenside());
    }

    #[test]
    fn test_from_str_trait() {
        let board: BoardState = START.parse().unwrap();
        assert_eq!(board.current_turn(), Color::White);
    }

    #[test]
    fn test_status_computed_on_load() {
        let board = BoardState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 1 1").unwrap();
        assert!(board.is_in_checkmate());
    }
}
