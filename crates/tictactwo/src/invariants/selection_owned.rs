//! Selection invariant: a selected cell holds one of the mover's pieces.

use super::super::GameState;
use super::Invariant;

/// Invariant: `selected_piece`, when set, points at a piece of the current player.
pub struct SelectionOwnedInvariant;

impl Invariant<GameState> for SelectionOwnedInvariant {
    fn holds(state: &GameState) -> bool {
        match state.selected_piece() {
            Some(pos) => state.board().get(*pos) == Some(*state.current_player()),
            None => true,
        }
    }

    fn description() -> &'static str {
        "Selected piece belongs to the player to move"
    }
}
