//! Game rules for tic-tac-two.
//!
//! Pure functions over a board and a window. They hold no state so the
//! engine and the AI share one definition of a win.

pub mod win;

pub use win::{check_winner, has_line, window_lines, winning_line};
