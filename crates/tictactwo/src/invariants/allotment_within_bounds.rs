//! Allotment invariant: pieces are neither minted nor lost.

use super::super::{GameState, Player};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: each player's remaining pieces stay within the allotment,
/// and pieces on the board plus pieces in hand add up to it.
pub struct AllotmentWithinBoundsInvariant;

impl Invariant<GameState> for AllotmentWithinBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        let remaining = state.pieces_remaining();
        Player::iter().all(|player| {
            let left = remaining.of(player);
            left <= remaining.allotment
                && state.board().count_of(player) + usize::from(left)
                    == usize::from(remaining.allotment)
        })
    }

    fn description() -> &'static str {
        "Pieces on the board plus pieces in hand match the allotment"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameConfig, Position};

    #[test]
    fn test_fresh_state_holds() {
        let state = GameState::new(&GameConfig::extended());
        assert!(AllotmentWithinBoundsInvariant::holds(&state));
    }

    #[test]
    fn test_placement_with_spend_holds() {
        let mut state = GameState::new(&GameConfig::classic());
        state.board_mut().set(Position::new(1, 1), Some(Player::O)).unwrap();
        state.pieces_remaining_mut().spend(Player::O);
        assert!(AllotmentWithinBoundsInvariant::holds(&state));
    }

    #[test]
    fn test_unpaid_piece_violates() {
        let mut state = GameState::new(&GameConfig::classic());
        state.board_mut().set(Position::new(1, 1), Some(Player::X)).unwrap();
        assert!(!AllotmentWithinBoundsInvariant::holds(&state));
    }

    #[test]
    fn test_remaining_above_allotment_violates() {
        let mut state = GameState::new(&GameConfig::classic());
        state.pieces_remaining_mut().x = 5;
        assert!(!AllotmentWithinBoundsInvariant::holds(&state));
    }
}
