//! Core domain types for tic-tac-two.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the board, addressed by column `x` and row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("({}, {})", x, y)]
pub struct Position {
    /// Column, counted from the left edge.
    pub x: usize,
    /// Row, counted from the top edge.
    pub y: usize,
}

impl Position {
    /// Creates a position from column and row.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Phase of a game that has not yet been won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GamePhase {
    /// Players are still spending their initial pieces.
    #[display("placement")]
    Placement,
    /// Players may also relocate pieces and the active window.
    #[display("movement")]
    Movement,
}

/// One of the eight single-step translations of the active window.
///
/// Variant order is the order in which window moves are generated and
/// therefore decides which of several equivalent AI moves is picked.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum WindowShift {
    /// (-1, 0)
    Left,
    /// (1, 0)
    Right,
    /// (0, -1)
    Up,
    /// (0, 1)
    Down,
    /// (-1, -1)
    UpLeft,
    /// (-1, 1)
    DownLeft,
    /// (1, -1)
    UpRight,
    /// (1, 1)
    DownRight,
}

impl WindowShift {
    /// Column and row offsets of this shift.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            WindowShift::Left => (-1, 0),
            WindowShift::Right => (1, 0),
            WindowShift::Up => (0, -1),
            WindowShift::Down => (0, 1),
            WindowShift::UpLeft => (-1, -1),
            WindowShift::DownLeft => (-1, 1),
            WindowShift::UpRight => (1, -1),
            WindowShift::DownRight => (1, 1),
        }
    }

    /// Looks up the shift for a raw delta; `None` for anything but a unit step.
    pub fn from_delta(dx: isize, dy: isize) -> Option<Self> {
        <WindowShift as strum::IntoEnumIterator>::iter().find(|shift| shift.delta() == (dx, dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_shift_order_is_fixed() {
        let deltas: Vec<_> = WindowShift::iter().map(WindowShift::delta).collect();
        assert_eq!(
            deltas,
            vec![(-1, 0), (1, 0), (0, -1), (0, 1), (-1, -1), (-1, 1), (1, -1), (1, 1)]
        );
    }

    #[test]
    fn test_from_delta_rejects_non_unit_steps() {
        assert_eq!(WindowShift::from_delta(1, -1), Some(WindowShift::UpRight));
        assert_eq!(WindowShift::from_delta(0, 0), None);
        assert_eq!(WindowShift::from_delta(2, 0), None);
    }

    #[test]
    fn test_shift_parses_from_kebab_case() {
        assert_eq!("down-left".parse::<WindowShift>(), Ok(WindowShift::DownLeft));
        assert!("sideways".parse::<WindowShift>().is_err());
    }
}
