//! Candidate move enumeration.
//!
//! Generation order is part of the contract: the AI takes the first
//! winning or blocking candidate, so the same state must always yield the
//! same sequence.
//!
//! 1. Placements on empty window cells, rows top to bottom, columns left
//!    to right.
//! 2. Window shifts that stay on the board, in [`WindowShift`] order.
//! 3. Piece moves: each of the player's window pieces (row-major) paired
//!    with each empty window cell (row-major).
//!
//! Shifts and piece moves are only offered once the game has entered the
//! movement phase (see [`advanced_moves_allowed`]), so every candidate is
//! one the engine accepts.

use super::action::Move;
use super::config::GameConfig;
use super::state::GameState;
use super::types::{GamePhase, Player, Position, WindowShift};
use strum::IntoEnumIterator;
use tracing::{instrument, trace};

/// Returns true once window and piece moves are on offer.
///
/// Shares the engine's placement to movement switch: both players depleted
/// to `movement_threshold` and `min_turns` played.
pub fn advanced_moves_allowed(state: &GameState) -> bool {
    *state.phase() == GamePhase::Movement
}

/// Window shifts that keep the window on the board, in fixed order.
pub fn valid_window_shifts(state: &GameState, config: &GameConfig) -> Vec<WindowShift> {
    WindowShift::iter()
        .filter(|&shift| state.window().shifted(shift, config.board_size).is_some())
        .collect()
}

/// Enumerates `player`'s candidate moves without touching the state.
///
/// Placements are only offered while `player` has pieces left.
#[instrument(skip(state, config))]
pub fn generate_moves(state: &GameState, config: &GameConfig, player: Player) -> Vec<Move> {
    let window = state.window();
    let board = state.board();
    let empty: Vec<Position> = window.cells().filter(|&pos| board.is_empty(pos)).collect();

    let mut moves = Vec::new();

    if state.pieces_remaining().of(player) > 0 {
        moves.extend(empty.iter().copied().map(Move::PlacePiece));
    }

    if advanced_moves_allowed(state) {
        moves.extend(valid_window_shifts(state, config).into_iter().map(Move::MoveWindow));

        for from in window.cells().filter(|&pos| board.get(pos) == Some(player)) {
            moves.extend(empty.iter().map(|&to| Move::MovePiece { from, to }));
        }
    }

    trace!(count = moves.len(), "Generated candidate moves");
    moves
}
