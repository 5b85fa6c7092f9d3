use std::env;
use std::process::ExitCode;

use chess_rules::board::{BoardState, Color, Square};

fn squares(list: &[Square]) -> String {
    if list.is_empty() {
        return "-".to_string();
    }
    list.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> ExitCode {
    // With no arguments this reports on the starting position.
    let args: Vec<String> = env::args().skip(1).collect();

    let (mut board, moves) = match args.first().map(String::as_str) {
        Some("--fen") => {
            let Some(fen) = args.get(1) else {
                eprintln!("usage: board_status [--fen \"<fen>\"] [move ...]");
                return ExitCode::FAILURE;
            };
            match BoardState::from_fen(fen) {
                Ok(board) => (board, &args[2..]),
                Err(err) => {
                    eprintln!("bad FEN: {err}");
                    return ExitCode::FAILURE;
                }
            }
        }
        _ => (BoardState::new(), &args[..]),
    };

    for text in moves {
        if let Err(err) = board.play(text) {
            eprintln!("{text}: {err}");
            return ExitCode::FAILURE;
        }
    }

    let legal_moves = board.all_legal_moves();
    println!("{board}");
    println!("fen: {}", board.get_fen_position());
    println!("side_to_move: {}", board.current_turn());
    println!("status: {:?}", board.status());
    println!("legal_moves: {}", legal_moves.len());
    for color in Color::BOTH {
        println!(
            "hanging ({color}): {} [{}]",
            squares(board.get_hanging_pieces(color)),
            board.get_hanging_material(color)
        );
        println!(
            "knight forks ({color}): {}",
            squares(board.get_knight_fork_squares(color))
        );
    }
    println!(
        "contested: {}",
        squares(board.get_tactically_interesting_squares())
    );
    let notation: Vec<&str> = board
        .move_history()
        .iter()
        .map(|m| m.notation.as_str())
        .collect();
    if !notation.is_empty() {
        println!("moves: {}", notation.join(" "));
    }
    ExitCode::SUCCESS
}
