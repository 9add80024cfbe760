//! One-ply heuristic opponent.
//!
//! Priority:
//! 1. The first candidate that completes a line for the player.
//! 2. The first candidate that would complete a line for the opponent if
//!    the opponent played it; the player plays it instead to block.
//! 3. A uniformly random candidate.
//!
//! Candidates are scanned in generation order. Window shifts leave the
//! board unchanged and are never treated as winning or blocking, so a win
//! the opponent could reach by shifting the window is not seen.

use super::action::Move;
use super::board::Board;
use super::config::GameConfig;
use super::movegen::generate_moves;
use super::rules;
use super::state::GameState;
use super::types::Player;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Why the AI picked its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Decision {
    /// The move wins immediately.
    #[display("win")]
    Win,
    /// The move takes the cell the opponent would have won with.
    #[display("block")]
    Block,
    /// No win or block was found.
    #[display("random")]
    Random,
}

/// Board after `action` is played by `player`; the window is not moved.
pub fn simulate(board: &Board, action: &Move, player: Player) -> Board {
    let mut simulated = board.clone();
    match *action {
        Move::PlacePiece(pos) => simulated.put(pos, Some(player)),
        Move::MovePiece { from, to } => {
            simulated.put(from, None);
            simulated.put(to, Some(player));
        }
        Move::MoveWindow(_) => {}
    }
    simulated
}

/// Returns true if `player` playing `action` completes a line in the
/// current window. Window shifts never count.
pub fn is_winning_move(state: &GameState, action: &Move, player: Player) -> bool {
    if matches!(action, Move::MoveWindow(_)) {
        return false;
    }
    let simulated = simulate(state.board(), action, player);
    rules::has_line(&simulated, state.window(), player)
}

/// Picks a move for `player` and reports why.
#[instrument(skip(state, config, rng))]
pub fn decide<R: Rng>(
    state: &GameState,
    config: &GameConfig,
    player: Player,
    opponent: Player,
    rng: &mut R,
) -> Option<(Move, Decision)> {
    let candidates = generate_moves(state, config, player);
    if candidates.is_empty() {
        return None;
    }

    let choice = if let Some(action) = candidates.iter().find(|m| is_winning_move(state, m, player)) {
        (*action, Decision::Win)
    } else if let Some(action) = candidates.iter().find(|m| is_winning_move(state, m, opponent)) {
        (*action, Decision::Block)
    } else {
        let index = rng.random_range(0..candidates.len());
        (candidates[index], Decision::Random)
    };

    debug!(
        action = %choice.0,
        decision = %choice.1,
        candidates = candidates.len(),
        "AI chose move"
    );
    Some(choice)
}

/// Picks a move for `player`, or `None` if there is no candidate.
pub fn choose_move<R: Rng>(
    state: &GameState,
    config: &GameConfig,
    player: Player,
    opponent: Player,
    rng: &mut R,
) -> Option<Move> {
    decide(state, config, player, opponent, rng).map(|(action, _)| action)
}
