//! Win detection logic for tic-tac-toe.

use crate::board::{Board, Player, Position, Square};
use tracing::instrument;

/// The three positions of a completed line, in board order.
pub type WinLine = [Position; 3];

/// The 8 lines in scan order: each row paired with the column of the same
/// index, then the main diagonal, then the anti-diagonal. When more than one
/// line is complete (unreachable under alternating play, but representable),
/// the first in this order is reported.
const LINES: [WinLine; 8] = [
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the line of squares by which a game has been won, if one exists.
///
/// A line wins when its first square is occupied and all three squares hold
/// the same mark. Returns the first complete line in scan order, `None` if
/// no line is complete.
#[instrument]
pub fn winning_line(board: &Board) -> Option<WinLine> {
    for line in LINES {
        let sq = board.get(line[0]);
        if sq != Square::Empty && sq == board.get(line[1]) && sq == board.get(line[2]) {
            return Some(line);
        }
    }
    None
}

/// Checks if there is a winner on the board.
///
/// Maps the mark on the winning line back through the fixed player-to-mark
/// association (human plays X, computer plays O). Returns `None` if no line
/// is complete.
#[instrument]
pub fn winner(board: &Board) -> Option<Player> {
    let line = winning_line(board)?;
    match board.get(line[0]) {
        Square::Occupied(mark) if mark == Player::Computer.mark() => Some(Player::Computer),
        Square::Occupied(_) => Some(Player::Human),
        Square::Empty => None,
    }
}
