//! Game engine driving a human-versus-computer match.
//!
//! The engine is glue over the pure board, rules, and search modules: it
//! validates moves, alternates turns, and tracks the game status. Consumers
//! that want the raw functions can use them directly.

use crate::board::{Board, Player, Position};
use crate::rules;
use crate::search;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {:?}'s turn", _0)]
    WrongPlayer(Player),
}

impl std::error::Error for MoveError {}

/// Tic-tac-toe game engine.
///
/// The human plays X and moves first; the computer plays O and replies
/// through the minimax search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<(Player, Position)>,
}

impl Game {
    /// Creates a new game with an empty board, human to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::Human,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move. Meaningful only while the game is in
    /// progress.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[(Player, Position)] {
        &self.history
    }

    /// Places the current player's mark at the given position.
    ///
    /// Returns the status after the move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game has ended and
    /// [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(self), fields(position = %pos, player = ?self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.to_move;
        self.board = self.board.with_move(pos, player.mark());
        self.history.push((player, pos));
        self.update_status();

        if self.status == GameStatus::InProgress {
            self.to_move = player.opponent();
        }
        Ok(self.status)
    }

    /// Computes the computer's best move and places it.
    ///
    /// Returns the position played.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game has ended and
    /// [`MoveError::WrongPlayer`] if it is the human's turn.
    #[instrument(skip(self))]
    pub fn computer_reply(&mut self) -> Result<Position, MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if self.to_move != Player::Computer {
            return Err(MoveError::WrongPlayer(self.to_move));
        }

        // An in-progress game always has an empty square.
        let pos = search::next_move(&self.board).ok_or(MoveError::GameOver)?;
        self.place(pos)?;
        Ok(pos)
    }

    /// Updates game status after a move.
    fn update_status(&mut self) {
        if let Some(winner) = rules::winner(&self.board) {
            self.status = GameStatus::Won(winner);
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
