pub mod board;
pub mod sync;

pub use board::{
    BoardBuilder, BoardOptions, BoardState, CastlingRights, Color, FenError, GameStatus, Move,
    MoveError, MoveParseError, Piece, PieceType, Square, SquareError,
};
pub use sync::SharedBoard;
