//! Move execution tests.

use super::sq;
use crate::board::{BoardState, Color, Piece, PieceType};

#[test]
fn test_kingside_castling() {
    let mut board = BoardState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    assert!(board.make_move(sq("e1"), sq("g1")));
    assert_eq!(board.get_fen_position(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 1 1");

    let king = board.get_piece(sq("g1")).unwrap();
    let rook = board.get_piece(sq("f1")).unwrap();
    assert!(king.is(Color::White, PieceType::King) && king.has_moved);
    assert!(rook.is(Color::White, PieceType::Rook) && rook.has_moved);

    let record = &board.move_history()[0];
    assert!(record.is_castle);
    assert!(record.castle_kingside);
}

#[test]
fn test_queenside_castling() {
    let mut board = BoardState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    assert!(board.make_move(sq("e1"), sq("c1")));
    assert_eq!(board.get_fen_position(), "r3k2r/8/8/8/8/8/8/2KR3R b kq - 1 1");

    // The rook now on d1 covers d8, so Black may only castle kingside.
    assert!(!board.can_castle(Color::Black, false));
    assert!(board.make_move(sq("e8"), sq("g8")));
    assert_eq!(board.get_fen_position(), "r4rk1/8/8/8/8/8/8/2KR3R w - - 2 2");
}

#[test]
fn test_no_castling_through_attacked_square() {
    let board = BoardState::from_fen("r3k2r/8/8/8/8/8/5r2/R3K2R w KQkq - 0 1").unwrap();
    assert!(!board.can_castle(Color::White, true));
    assert!(board.can_castle(Color::White, false));
    assert!(!board.get_possible_moves(sq("e1")).contains(&sq("g1")));
}

#[test]
fn test_no_castling_out_of_check() {
    let board = BoardState::from_fen("4k3/8/8/8/8/8/4r3/R3K2R w KQ - 0 1").unwrap();
    assert!(!board.can_castle(Color::White, true));
    assert!(!board.can_castle(Color::White, false));
    let moves = board.get_possible_moves(sq("e1"));
    assert!(!moves.contains(&sq("g1")));
    assert!(!moves.contains(&sq("c1")));
    assert!(moves.contains(&sq("e2")));
}

#[test]
fn test_queenside_castling_ignores_attack_on_b_file() {
    let board = BoardState::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1").unwrap();
    assert!(board.is_square_attacked(sq("b1"), Color::Black));
    assert!(board.can_castle(Color::White, false));
}

#[test]
fn test_castling_needs_empty_path() {
    let board = BoardState::from_fen("4k3/8/8/8/8/8/8/RN2K1NR w KQ - 0 1").unwrap();
    assert!(!board.can_castle(Color::White, true));
    assert!(!board.can_castle(Color::White, false));
}

#[test]
fn test_rook_move_clears_only_its_side() {
    let mut board = BoardState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    assert!(board.make_move(sq("a1"), sq("a2")));
    assert_eq!(board.castling_rights().to_fen(), "Kkq");
}

#[test]
fn test_king_move_clears_both_sides() {
    let mut board = BoardState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    assert!(board.make_move(sq("e1"), sq("e2")));
    assert_eq!(board.castling_rights().to_fen(), "kq");
}

#[test]
fn test_capturing_corner_rook_clears_victims_right() {
    let mut board = BoardState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    assert!(board.make_move(sq("a1"), sq("a8")));
    assert_eq!(board.castling_rights().to_fen(), "Kk");
    assert!(board.is_check());
    let record = board.last_move();
    assert_eq!(record, Some((sq("a1"), sq("a8"))));
    assert_eq!(
        board.move_history()[0].captured.map(|p| p.kind),
        Some(PieceType::Rook)
    );
}

#[test]
fn test_en_passant_capture() {
    let mut board = BoardState::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1").unwrap();
    assert!(board.make_move(sq("d7"), sq("d5")));
    assert_eq!(board.en_passant_target(), Some(sq("d6")));
    assert!(board.move_history()[0].is_double_pawn_push);

    assert!(board.make_move(sq("e5"), sq("d6")));
    assert!(board.get_piece(sq("d5")).is_none());
    assert!(board
        .get_piece(sq("d6"))
        .is_some_and(|p| p.is(Color::White, PieceType::Pawn)));
    assert_eq!(board.en_passant_target(), None);
    assert_eq!(board.halfmove_clock(), 0);

    let record = &board.move_history()[1];
    assert!(record.is_en_passant);
    assert_eq!(
        record.captured.map(|p| (p.color, p.kind)),
        Some((Color::Black, PieceType::Pawn))
    );
}

#[test]
fn test_en_passant_right_expires() {
    let mut board = BoardState::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1").unwrap();
    assert!(board.make_move(sq("d7"), sq("d5")));
    assert!(board.make_move(sq("e1"), sq("e2")));
    assert_eq!(board.en_passant_target(), None);
    assert!(board.make_move(sq("e8"), sq("e7")));
    assert!(!board.get_possible_moves(sq("e5")).contains(&sq("d6")));
    assert!(!board.make_move(sq("e5"), sq("d6")));
}

#[test]
fn test_halfmove_clock_and_fullmove_number() {
    let mut board = BoardState::new();
    assert!(board.make_move(sq("g1"), sq("f3")));
    assert_eq!(board.halfmove_clock(), 1);
    assert_eq!(board.fullmove_number(), 1);

    assert!(board.make_move(sq("b8"), sq("c6")));
    assert_eq!(board.halfmove_clock(), 2);
    assert_eq!(board.fullmove_number(), 2);

    assert!(board.make_move(sq("e2"), sq("e4")));
    assert_eq!(board.halfmove_clock(), 0);
    assert_eq!(board.fullmove_number(), 2);
}

#[test]
fn test_capture_resets_halfmove_clock() {
    let mut board = BoardState::from_fen("4k3/8/8/3n4/8/4N3/8/4K3 w - - 7 20").unwrap();
    assert!(board.make_move(sq("e3"), sq("d5")));
    assert_eq!(board.halfmove_clock(), 0);
}

#[test]
fn test_make_move_promotes_to_queen() {
    let mut board = BoardState::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    assert!(board.is_pawn_promotion(sq("a7"), sq("a8")));
    assert!(board.make_move(sq("a7"), sq("a8")));

    let promoted = board.get_piece(sq("a8")).unwrap();
    assert!(promoted.is(Color::White, PieceType::Queen));
    assert!(promoted.has_moved);
    let record = &board.move_history()[0];
    assert_eq!(record.promotion, Some(PieceType::Queen));
    assert!(!record.is_double_pawn_push);
}

#[test]
fn test_underpromotion() {
    for kind in [PieceType::Knight, PieceType::Rook, PieceType::Bishop] {
        let mut board = BoardState::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        assert!(board.make_move_with_promotion(sq("a7"), sq("a8"), kind));
        assert_eq!(board.get_piece(sq("a8")).map(|p| p.kind), Some(kind));
    }
}

#[test]
fn test_black_promotion_gives_check() {
    let mut board = BoardState::from_fen("k7/8/8/8/8/8/7p/K7 b - - 0 1").unwrap();
    assert!(board.make_move_with_promotion(sq("h2"), sq("h1"), PieceType::Rook));
    assert!(board
        .get_piece(sq("h1"))
        .is_some_and(|p| p.is(Color::Black, PieceType::Rook)));
    assert!(board.is_check());
}

#[test]
fn test_promotion_piece_ignored_for_ordinary_move() {
    let mut board = BoardState::new();
    assert!(board.make_move_with_promotion(sq("e2"), sq("e4"), PieceType::Queen));
    assert!(board
        .get_piece(sq("e4"))
        .is_some_and(|p| p.kind == PieceType::Pawn));
    assert_eq!(board.move_history()[0].promotion, None);
}

#[test]
fn test_rejected_move_changes_nothing() {
    let mut board = BoardState::new();
    let before = board.get_fen_position();
    assert!(!board.make_move(sq("e7"), sq("e5")));
    assert!(!board.make_move(sq("e2"), sq("e5")));
    assert!(!board.make_move(sq("e4"), sq("e5")));
    assert_eq!(board.get_fen_position(), before);
    assert!(!board.can_undo());
    assert!(board.move_history().is_empty());
    assert!(board.position_history().is_empty());
}

#[test]
fn test_move_into_check_is_rejected() {
    let mut board = BoardState::from_fen("4k3/8/8/8/8/8/3r4/4K3 w - - 0 1").unwrap();
    assert!(!board.make_move(sq("e1"), sq("d1")));
    assert!(!board.make_move(sq("e1"), sq("e2")));
    assert!(board.make_move(sq("e1"), sq("d2")));
}

#[test]
fn test_commit_invalidates_hint_caches() {
    let mut board = BoardState::new();
    let _ = board.get_hanging_pieces(Color::White);
    let _ = board.get_tactically_interesting_squares();
    let _ = board.get_knight_fork_squares(Color::White);
    assert!(board.hints.any_fresh());

    // Move generation and status scans leave the caches alone.
    let _ = board.all_legal_moves();
    let _ = board.is_checkmate(Color::White);
    let _ = board.preview(sq("e2"), sq("e4"), None);
    assert!(board.hints.hanging.is_fresh());
    assert!(board.hints.exchange.is_fresh());
    assert!(board.hints.forks.is_fresh());

    assert!(board.make_move(sq("e2"), sq("e4")));
    assert!(!board.hints.any_fresh());
}

#[test]
fn test_set_piece_invalidates_caches_without_history() {
    let mut board = BoardState::new();
    let _ = board.get_hanging_pieces(Color::Black);
    board.set_piece(sq("e4"), Some(Piece::new(PieceType::Knight, Color::White)));
    assert!(!board.hints.any_fresh());
    assert!(!board.can_undo());
    assert!(board.get_piece_at(4, 4).is_some());
}

#[test]
fn test_position_history_tracks_each_commit() {
    let mut board = BoardState::new();
    board.play("e2e4").unwrap();
    board.play("c7c5").unwrap();
    assert_eq!(board.position_history().len(), 2);
    assert_eq!(
        board.position_history().last().map(String::as_str),
        Some(board.get_fen_position().as_str())
    );
    assert_eq!(
        board.position_history()[0],
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );
}
