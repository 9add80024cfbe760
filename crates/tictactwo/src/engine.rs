//! Tic-tac-two game engine.
//!
//! [`Game`] owns a [`GameState`] and is the only path through which it
//! changes. Every operation either applies fully or is rejected with a
//! typed reason and no side effects.

use super::action::{Move, SelectionChange, TapOutcome, TurnOutcome};
use super::ai;
use super::config::GameConfig;
use super::error::{GameError, MoveError, PlacementError, WindowError};
use super::invariants::{InvariantSet, TicTacTwoInvariants};
use super::rules;
use super::state::GameState;
use super::types::{GamePhase, Player, Position, WindowShift};
use rand::Rng;
use tracing::{debug, info, instrument};

/// Logs a rejected request and hands the reason back.
fn reject<E: std::fmt::Display>(err: E) -> E {
    debug!(reason = %err, "Request rejected");
    err
}

/// Tic-tac-two game engine.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    state: GameState,
}

impl Game {
    /// Creates a new game under the given rules.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        Self {
            state: GameState::new(&config),
            config,
        }
    }

    /// Wraps an existing state, e.g. one restored from a snapshot.
    #[instrument(skip(state))]
    pub fn with_state(config: GameConfig, state: GameState) -> Self {
        Self { config, state }
    }

    /// Returns the rule set.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns a detached copy of the state for rendering.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Restores the initial state of the configured rule set.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.state = GameState::new(&self.config);
    }

    /// Places a piece of the current player at `pos`.
    ///
    /// # Errors
    ///
    /// Rejected when the game is over, a piece is selected, `pos` is outside
    /// the window or occupied, or the player has no pieces left.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn place_piece(&mut self, pos: Position) -> Result<TurnOutcome, PlacementError> {
        if self.state.is_over() {
            return Err(reject(PlacementError::GameOver));
        }
        if self.state.selected_piece().is_some() {
            return Err(reject(PlacementError::WrongPhaseForPlacement));
        }
        if !self.state.window().contains(pos) {
            return Err(reject(PlacementError::OutOfWindow));
        }
        if !self.state.board().is_empty(pos) {
            return Err(reject(PlacementError::CellOccupied));
        }
        let player = *self.state.current_player();
        if self.state.pieces_remaining().of(player) == 0 {
            return Err(reject(PlacementError::NoPiecesLeft));
        }

        self.state.board_mut().put(pos, Some(player));
        self.state.pieces_remaining_mut().spend(player);
        self.state.record_turn();
        self.update_phase();
        info!(%pos, remaining = self.state.pieces_remaining().of(player), "Piece placed");

        Ok(self.finish_turn())
    }

    /// Picks up or drops a piece for a later [`Game::move_piece`].
    ///
    /// Only acts in a live movement phase and inside the window. Tapping one
    /// of the current player's pieces selects it, replacing any previous
    /// selection; tapping anything else drops the selection.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn select_piece(&mut self, pos: Position) -> SelectionChange {
        if self.state.is_over()
            || *self.state.phase() != GamePhase::Movement
            || !self.state.window().contains(pos)
        {
            return SelectionChange::Ignored;
        }

        if self.state.board().get(pos) == Some(*self.state.current_player()) {
            self.state.set_selected_piece(Some(pos));
            debug!(%pos, "Piece selected");
            SelectionChange::Selected(pos)
        } else if self.state.selected_piece().is_some() {
            self.state.set_selected_piece(None);
            debug!("Selection cleared");
            SelectionChange::Cleared
        } else {
            SelectionChange::Ignored
        }
    }

    /// Moves one of the current player's pieces inside the window.
    ///
    /// # Errors
    ///
    /// Rejected when the game is over, outside the movement phase, when
    /// either cell is outside the window, `from` is not the player's piece,
    /// or `to` is occupied.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn move_piece(&mut self, from: Position, to: Position) -> Result<TurnOutcome, MoveError> {
        if self.state.is_over() {
            return Err(reject(MoveError::GameOver));
        }
        if *self.state.phase() != GamePhase::Movement {
            return Err(reject(MoveError::WrongPhase));
        }
        let window = *self.state.window();
        if !window.contains(from) || !window.contains(to) {
            return Err(reject(MoveError::OutOfWindow));
        }
        let player = *self.state.current_player();
        if self.state.board().get(from) != Some(player) {
            return Err(reject(MoveError::NotOwner));
        }
        if !self.state.board().is_empty(to) {
            return Err(reject(MoveError::DestinationOccupied));
        }

        let board = self.state.board_mut();
        board.put(from, None);
        board.put(to, Some(player));
        self.state.record_turn();
        info!(%from, %to, "Piece moved");

        Ok(self.finish_turn())
    }

    /// Translates the active window by one step; this uses up the turn.
    ///
    /// # Errors
    ///
    /// Rejected when the game is over, fewer than `min_turns` turns have
    /// been played, or the window would leave the board.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn move_window(&mut self, shift: WindowShift) -> Result<TurnOutcome, WindowError> {
        if self.state.is_over() {
            return Err(reject(WindowError::GameOver));
        }
        if *self.state.move_count() < self.config.min_turns {
            return Err(reject(WindowError::TooEarly {
                min_turns: self.config.min_turns,
            }));
        }
        let moved = self
            .state
            .window()
            .shifted(shift, self.config.board_size)
            .ok_or_else(|| reject(WindowError::OutOfBounds))?;

        self.state.set_window(moved);
        self.state.record_turn();
        info!(%shift, origin = %moved.origin(), "Window moved");

        Ok(self.finish_turn())
    }

    /// Applies any move for the current player.
    ///
    /// # Errors
    ///
    /// Returns the rejection of the underlying operation.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Move) -> Result<TurnOutcome, GameError> {
        let outcome = match action {
            Move::PlacePiece(pos) => self.place_piece(pos)?,
            Move::MoveWindow(shift) => self.move_window(shift)?,
            Move::MovePiece { from, to } => self.move_piece(from, to)?,
        };
        Ok(outcome)
    }

    /// Interprets a tap on a single cell the way a board UI would.
    ///
    /// Taps outside the window are ignored. During placement a tap places.
    /// During movement a tap on an empty cell places when nothing is
    /// selected and moves the selected piece otherwise; taps on occupied
    /// cells change the selection.
    ///
    /// # Errors
    ///
    /// Returns the rejection of the placement or move the tap resolved to.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn tap(&mut self, pos: Position) -> Result<TapOutcome, GameError> {
        if self.state.is_over() {
            return Err(reject(PlacementError::GameOver).into());
        }
        if !self.state.window().contains(pos) {
            return Ok(TapOutcome::Selection(SelectionChange::Ignored));
        }

        let empty = self.state.board().is_empty(pos);
        let action = match (*self.state.phase(), *self.state.selected_piece()) {
            (GamePhase::Placement, _) => Move::PlacePiece(pos),
            (GamePhase::Movement, None) if empty => Move::PlacePiece(pos),
            (GamePhase::Movement, Some(from)) if empty => Move::MovePiece { from, to: pos },
            (GamePhase::Movement, _) => {
                return Ok(TapOutcome::Selection(self.select_piece(pos)));
            }
        };
        let outcome = self.apply(action)?;
        Ok(TapOutcome::Played(action, outcome))
    }

    /// Lets the heuristic AI play the current player's turn.
    ///
    /// A piece the player had picked up is put back first, so the AI is
    /// free to place. Returns the move played and its outcome, or `None`
    /// when the AI has no candidate.
    ///
    /// # Errors
    ///
    /// Returns `GameOver` once the game has ended, or the engine's
    /// rejection if the chosen move is illegal.
    #[instrument(skip(self, rng), fields(player = %self.state.current_player()))]
    pub fn play_ai_move<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<(Move, TurnOutcome)>, GameError> {
        if self.state.is_over() {
            return Err(reject(PlacementError::GameOver).into());
        }
        if let Some(pos) = *self.state.selected_piece() {
            debug!(%pos, "Dropping selection before AI turn");
            self.state.set_selected_piece(None);
        }
        let player = *self.state.current_player();
        let Some(action) = ai::choose_move(&self.state, &self.config, player, player.opponent(), rng)
        else {
            debug!("AI found no candidate move");
            return Ok(None);
        };
        let outcome = self.apply(action)?;
        Ok(Some((action, outcome)))
    }

    /// [`Game::play_ai_move`] with the thread-local generator.
    ///
    /// # Errors
    ///
    /// Same as [`Game::play_ai_move`].
    pub fn play_ai_move_random(&mut self) -> Result<Option<(Move, TurnOutcome)>, GameError> {
        self.play_ai_move(&mut rand::rng())
    }

    /// Returns true once `player` has spent enough pieces to unlock
    /// window and piece moves.
    pub fn advanced_moves_enabled(&self, player: Player) -> bool {
        self.state.pieces_remaining().of(player) <= self.config.movement_threshold
    }

    /// The completed line inside the window, if any, for highlighting.
    pub fn winning_line(&self) -> Option<(Player, Vec<Position>)> {
        rules::winning_line(self.state.board(), self.state.window())
    }

    /// One-line status text for display.
    pub fn status_line(&self) -> String {
        match self.state.winner() {
            Some(winner) => format!("{} wins!", winner),
            None => {
                let player = *self.state.current_player();
                format!(
                    "player {}'s turn (pieces left: {})",
                    player,
                    self.state.pieces_remaining().of(player)
                )
            }
        }
    }

    /// Enters the movement phase once both players are depleted and enough
    /// turns have passed. Never reverts.
    fn update_phase(&mut self) {
        if *self.state.phase() == GamePhase::Movement {
            return;
        }
        let remaining = self.state.pieces_remaining();
        let depleted = remaining.x <= self.config.movement_threshold
            && remaining.o <= self.config.movement_threshold;
        if depleted && *self.state.move_count() >= self.config.min_turns {
            info!(move_count = *self.state.move_count(), "Entering movement phase");
            self.state.set_phase(GamePhase::Movement);
        }
    }

    /// Checks for a win in the current window, then passes the turn.
    fn finish_turn(&mut self) -> TurnOutcome {
        let mover = *self.state.current_player();
        self.state.set_selected_piece(None);

        let outcome = match rules::check_winner(self.state.board(), self.state.window(), mover) {
            Some(winner) => {
                info!(%winner, "Game won");
                self.state.set_winner(winner);
                TurnOutcome::Won(winner)
            }
            None => {
                self.state.pass_turn();
                TurnOutcome::Next(*self.state.current_player())
            }
        };

        debug_assert!(
            TicTacTwoInvariants::check_all(&self.state).is_ok(),
            "Game invariants violated: {:?}",
            TicTacTwoInvariants::check_all(&self.state)
        );
        outcome
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::classic())
    }
}
