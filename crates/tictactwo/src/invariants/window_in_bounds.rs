//! Window invariant: the active window never leaves the board.

use super::super::GameState;
use super::Invariant;

/// Invariant: the whole active window lies on the board.
pub struct WindowInBoundsInvariant;

impl Invariant<GameState> for WindowInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.window().fits(state.board().size())
    }

    fn description() -> &'static str {
        "Active window lies fully inside the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActiveWindow, GameConfig, Position};

    #[test]
    fn test_initial_window_holds() {
        let state = GameState::new(&GameConfig::classic());
        assert!(WindowInBoundsInvariant::holds(&state));
    }

    #[test]
    fn test_far_corner_holds() {
        let mut state = GameState::new(&GameConfig::classic());
        state.set_window(ActiveWindow::new(Position::new(2, 2), 3));
        assert!(WindowInBoundsInvariant::holds(&state));
    }

    #[test]
    fn test_overhanging_window_violates() {
        let mut state = GameState::new(&GameConfig::classic());
        state.set_window(ActiveWindow::new(Position::new(0, 3), 3));
        assert!(!WindowInBoundsInvariant::holds(&state));
    }
}
