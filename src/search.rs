//! Minimax move search for the computer opponent.
//!
//! Exhaustively evaluates the game tree (at most 9 plies, small enough that
//! no pruning or memoization is needed) and picks the move that maximizes
//! the computer's outcome against an adversarially optimal human.

use crate::board::{Board, Player, Position};
use crate::rules;
use tracing::{debug, instrument};

/// Outcome of evaluating one subtree: the score of the best reachable
/// terminal state and the move that leads toward it. `position` is `None`
/// at terminal states (win or full board).
#[derive(Debug, Clone, Copy)]
struct SearchResult {
    score: i32,
    position: Option<Position>,
}

/// Returns the best next move for the computer on the given board.
///
/// Assumes it is the computer's turn. Returns `None` only when no empty
/// square remains. Deterministic: among equally scored moves, the first in
/// row-major order is chosen.
#[instrument(skip(board))]
pub fn next_move(board: &Board) -> Option<Position> {
    let result = minimax(board, Player::Computer, 0);
    if let Some(pos) = result.position {
        debug!(position = %pos, score = result.score, "computer chose move");
    }
    result.position
}

/// Recursively evaluates the board with `player` to move, `depth` plies
/// below the root.
///
/// A computer win scores `10 - depth` and a human win `depth - 10`, so the
/// search prefers the fastest win and the slowest loss. A full board with
/// no winner scores 0. The computer maximizes, the human minimizes; strict
/// comparison keeps the first candidate on ties.
fn minimax(board: &Board, player: Player, depth: i32) -> SearchResult {
    if let Some(winner) = rules::winner(board) {
        let score = match winner {
            Player::Computer => 10 - depth,
            Player::Human => depth - 10,
        };
        return SearchResult {
            score,
            position: None,
        };
    }
    if rules::is_full(board) {
        return SearchResult {
            score: 0,
            position: None,
        };
    }

    let mut best = SearchResult {
        score: match player {
            Player::Computer => i32::MIN,
            Player::Human => i32::MAX,
        },
        position: None,
    };
    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        let outcome = minimax(
            &board.with_move(pos, player.mark()),
            player.opponent(),
            depth + 1,
        );
        let improves = match player {
            Player::Computer => outcome.score > best.score,
            Player::Human => outcome.score < best.score,
        };
        if improves {
            best = SearchResult {
                score: outcome.score,
                position: Some(pos),
            };
        }
    }
    best
}
