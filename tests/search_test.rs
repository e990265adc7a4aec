//! Tests for the minimax move search.

use tictactoe::{next_move, Board, Mark, Position, Square};

/// Builds a board from a 9-character layout, row-major; `X`, `O`, or `.`,
/// with `/` and whitespace ignored.
fn board(layout: &str) -> Board {
    let mut board = Board::new();
    let cells = layout.chars().filter(|c| !c.is_whitespace() && *c != '/');
    for (idx, cell) in cells.enumerate() {
        let pos = Position::from_index(idx).expect("layout longer than 9 cells");
        match cell {
            'X' => board.set(pos, Square::Occupied(Mark::X)),
            'O' => board.set(pos, Square::Occupied(Mark::O)),
            '.' => {}
            other => panic!("unexpected cell {other:?}"),
        }
    }
    board
}

#[test]
fn test_opening_reply_takes_center() {
    let b = board("X.. / ... / ...");
    assert_eq!(next_move(&b), Some(Position::Center));
}

#[test]
fn test_blocks_human_column_win() {
    // Human threatens the right column; the only non-losing reply blocks it.
    let b = board("XOX / .O. / OXX");
    assert_eq!(next_move(&b), Some(Position::MiddleRight));
}

#[test]
fn test_takes_winning_move() {
    // Bottom-center completes the computer's center column.
    let b = board("XOX / .O. / O.X");
    assert_eq!(next_move(&b), Some(Position::BottomCenter));
}

#[test]
fn test_win_preferred_over_block() {
    // Computer can win on the center column even though the human also
    // threatens a line.
    let b = board("XO. / XO. / ..X");
    assert_eq!(next_move(&b), Some(Position::BottomCenter));
}

#[test]
fn test_never_picks_occupied_square() {
    let boards = [
        "X.. / ... / ...",
        "XOX / .O. / OXX",
        "XOX / .O. / O.X",
        "X.O / .X. / ...",
        "XX. / OO. / ...",
    ];
    for layout in boards {
        let b = board(layout);
        let pos = next_move(&b).expect("moves remain");
        assert!(b.is_empty(pos), "picked occupied square on {layout}");
    }
}

#[test]
fn test_full_board_yields_none() {
    assert_eq!(next_move(&board("XOX / OXX / OXO")), None);
}

#[test]
fn test_deterministic_choice() {
    let b = board("X.. / ... / ...");
    let first = next_move(&b);
    for _ in 0..3 {
        assert_eq!(next_move(&b), first);
    }
}
