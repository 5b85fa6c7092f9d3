//! Tactical hint cache tests.

use super::sq;
use crate::board::{BoardState, Color};

#[test]
fn test_hints_follow_the_game() {
    let mut board = BoardState::new();
    board.play("e2e4").unwrap();
    board.play("d7d5").unwrap();

    assert_eq!(board.get_hanging_pieces(Color::White), &[sq("e4")]);
    assert!(board.get_hanging_pieces(Color::Black).is_empty());
    assert_eq!(board.get_hanging_material(Color::White), 1);
    assert_eq!(board.get_tactically_interesting_squares(), &[sq("d5"), sq("e4")]);

    let (attackers, defenders) = board.get_all_attackers_and_defenders(sq("d5"));
    assert_eq!(attackers, &[sq("e4")]);
    assert_eq!(defenders, &[sq("d8")]);

    let (attackers, defenders) = board.get_all_attackers_and_defenders(sq("e4"));
    assert_eq!(attackers, &[sq("d5")]);
    assert!(defenders.is_empty());

    board.play("b1c3").unwrap();
    assert!(board.get_hanging_pieces(Color::White).is_empty());
    let (_, defenders) = board.get_all_attackers_and_defenders(sq("e4"));
    assert_eq!(defenders, &[sq("c3")]);
}

#[test]
fn test_king_can_hang() {
    let board = BoardState::from_fen("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1").unwrap();
    assert_eq!(board.get_hanging_pieces(Color::White), &[sq("e1")]);
    assert_eq!(board.get_hanging_pieces(Color::Black), &[sq("e2")]);
    assert_eq!(board.get_hanging_material(Color::Black), 5);
}

#[test]
fn test_fork_squares_after_knight_arrives() {
    let mut board = BoardState::from_fen("r3k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    assert!(board.get_knight_fork_squares(Color::White).is_empty());

    board.set_piece(
        sq("b1"),
        Some(crate::board::Piece::new(
            crate::board::PieceType::Knight,
            Color::White,
        )),
    );
    assert_eq!(board.get_knight_fork_squares(Color::White), &[sq("c7")]);
    assert!(board.get_knight_fork_squares(Color::Black).is_empty());
}

#[test]
fn test_cached_answers_are_stable_until_mutation() {
    let mut board = BoardState::new();
    board.play("e2e4").unwrap();
    board.play("d7d5").unwrap();
    let first = board.get_tactically_interesting_squares().to_vec();
    let _ = board.all_legal_moves();
    assert_eq!(board.get_tactically_interesting_squares(), first.as_slice());

    board.play("e4d5").unwrap();
    assert_ne!(board.get_tactically_interesting_squares(), first.as_slice());
}
