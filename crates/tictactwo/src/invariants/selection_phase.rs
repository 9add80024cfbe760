//! Selection invariant: pieces are only picked up in a live movement phase.

use super::super::{GamePhase, GameState};
use super::Invariant;

/// Invariant: a selection exists only during movement and before a win.
pub struct SelectionPhaseInvariant;

impl Invariant<GameState> for SelectionPhaseInvariant {
    fn holds(state: &GameState) -> bool {
        state.selected_piece().is_none()
            || (*state.phase() == GamePhase::Movement && !state.is_over())
    }

    fn description() -> &'static str {
        "Pieces are only selected during the movement phase of a live game"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameConfig, Player, Position};

    #[test]
    fn test_selection_in_movement_holds() {
        let mut state = GameState::new(&GameConfig::classic());
        state.set_phase(GamePhase::Movement);
        state.set_selected_piece(Some(Position::new(1, 1)));
        assert!(SelectionPhaseInvariant::holds(&state));
    }

    #[test]
    fn test_selection_in_placement_violates() {
        let mut state = GameState::new(&GameConfig::classic());
        state.set_selected_piece(Some(Position::new(1, 1)));
        assert!(!SelectionPhaseInvariant::holds(&state));
    }

    #[test]
    fn test_selection_after_win_violates() {
        let mut state = GameState::new(&GameConfig::classic());
        state.set_phase(GamePhase::Movement);
        state.set_selected_piece(Some(Position::new(1, 1)));
        state.set_winner(Player::O);
        assert!(!SelectionPhaseInvariant::holds(&state));
    }
}
