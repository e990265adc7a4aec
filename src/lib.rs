//! Pure tic-tac-toe game logic with an optimal minimax opponent.
//!
//! # Architecture
//!
//! - **Board**: value-semantic 3x3 board of squares, addressed by
//!   [`Position`]
//! - **Rules**: win-line and draw detection over a board
//! - **Search**: exhaustive minimax picking the computer's best reply
//! - **Game**: engine that validates moves, alternates turns, and tracks
//!   status for a human-versus-computer match
//!
//! The board, rules, and search layers are pure functions with no shared
//! state; a rendering layer drives them and owns all presentation concerns
//! (including any simulated "thinking" delay, which must not change the
//! computed move).
//!
//! # Example
//!
//! ```
//! use tictactoe::{Game, GameStatus, Position};
//!
//! # fn main() -> Result<(), tictactoe::MoveError> {
//! let mut game = Game::new();
//! game.place(Position::TopLeft)?; // human plays X
//! let reply = game.computer_reply()?; // computer answers optimally
//! assert_eq!(reply, Position::Center);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod game;
mod rules;
mod search;

// Crate-level exports - domain types
pub use board::{Board, Mark, Player, Position, Square};

// Crate-level exports - game engine
pub use game::{Game, GameStatus, MoveError};

// Crate-level exports - rules
pub use rules::{has_empty_square, is_full, winner, winning_line, WinLine};

// Crate-level exports - move search
pub use search::next_move;
