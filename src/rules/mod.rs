//! Win and draw detection for tic-tac-toe.

pub mod draw;
pub mod win;

pub use draw::{has_empty_square, is_full};
pub use win::{winner, winning_line, WinLine};
