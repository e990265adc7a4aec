//! Draw detection logic for tic-tac-toe.

use crate::board::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if any moves remain, i.e. any square is currently empty.
#[instrument]
pub fn has_empty_square(board: &Board) -> bool {
    board.squares().iter().any(|s| *s == Square::Empty)
}
