//! Tests for win and draw detection over full boards.

use tictactoe::{
    has_empty_square, winner, winning_line, Board, Mark, Player, Position, Square,
};

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
fn test_empty_board_has_no_winner() {
    assert_eq!(winner(&board("... / ... / ...")), None);
}

#[test]
fn test_incomplete_board_has_no_winner() {
    assert_eq!(winner(&board("X.X / XOO / ..O")), None);
}

#[test]
fn test_winning_row_is_human() {
    assert_eq!(winner(&board("XXX / XOO / ..O")), Some(Player::Human));
}

#[test]
fn test_winning_column_is_computer() {
    let b = board("XXO / XOO / ..O");
    assert_eq!(winner(&b), Some(Player::Computer));
    assert_eq!(
        winning_line(&b),
        Some([
            Position::TopRight,
            Position::MiddleRight,
            Position::BottomRight
        ])
    );
}

#[test]
fn test_winning_main_diagonal() {
    assert_eq!(winner(&board("OXX / XOO / ..O")), Some(Player::Computer));
}

#[test]
fn test_winning_anti_diagonal() {
    assert_eq!(winner(&board("XXO / XOO / O.X")), Some(Player::Computer));
}

#[test]
fn test_full_drawn_board() {
    let b = board("XOX / OXX / OXO");
    assert_eq!(winner(&b), None);
    assert_eq!(winning_line(&b), None);
    assert!(!has_empty_square(&b));
}

#[test]
fn test_partial_board_has_empty_square() {
    assert!(has_empty_square(&board("XOX / .O. / OXX")));
}
