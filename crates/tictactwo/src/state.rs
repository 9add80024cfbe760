//! Aggregate game state owned by the engine.

use super::board::Board;
use super::config::GameConfig;
use super::types::{GamePhase, Player, Position};
use super::window::ActiveWindow;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Pieces each player may still place, out of a shared allotment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PiecesRemaining {
    /// Pieces left for X.
    pub x: u8,
    /// Pieces left for O.
    pub o: u8,
    /// Pieces each player started with.
    pub allotment: u8,
}

impl PiecesRemaining {
    /// Both players start with `allotment` pieces.
    pub fn new(allotment: u8) -> Self {
        Self {
            x: allotment,
            o: allotment,
            allotment,
        }
    }

    /// Pieces left for `player`.
    pub fn of(&self, player: Player) -> u8 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Spends one of `player`'s pieces; saturates at zero.
    pub(crate) fn spend(&mut self, player: Player) {
        let slot = match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        };
        *slot = slot.saturating_sub(1);
    }
}

/// Complete game state.
///
/// Only [`Game`](crate::Game) mutates a `GameState`; callers receive
/// read-only copies through [`Game::snapshot`](crate::Game::snapshot).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player to move.
    current_player: Player,
    /// Current active window.
    window: ActiveWindow,
    /// Pieces each player may still place.
    pieces_remaining: PiecesRemaining,
    /// Current phase.
    phase: GamePhase,
    /// Placements, piece moves and window moves made so far.
    move_count: u32,
    /// Piece picked up for a move, if any.
    selected_piece: Option<Position>,
    /// Winner, once the game is over.
    winner: Option<Player>,
}

impl GameState {
    /// Creates the initial state for a rule set.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            board: Board::new(config.board_size),
            current_player: Player::X,
            window: ActiveWindow::centered(config.board_size, config.window_size),
            pieces_remaining: PiecesRemaining::new(config.pieces_per_player),
            phase: GamePhase::Placement,
            move_count: 0,
            selected_piece: None,
            winner: None,
        }
    }

    /// Returns true once a winner has been declared.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn pieces_remaining_mut(&mut self) -> &mut PiecesRemaining {
        &mut self.pieces_remaining
    }

    pub(crate) fn set_window(&mut self, window: ActiveWindow) {
        self.window = window;
    }

    pub(crate) fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
    }

    pub(crate) fn set_selected_piece(&mut self, selected: Option<Position>) {
        self.selected_piece = selected;
    }

    pub(crate) fn set_winner(&mut self, winner: Player) {
        self.winner = Some(winner);
    }

    pub(crate) fn record_turn(&mut self) {
        self.move_count += 1;
    }

    pub(crate) fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }
}
