//! Rejection reasons for engine operations.
//!
//! Every illegal request is an expected outcome, reported as a value. A
//! rejected operation leaves the game state untouched.

use derive_more::{Display, Error, From};

/// Why a piece could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlacementError {
    /// A piece is selected for movement, so the tap is not a placement.
    #[display("Cannot place while a piece is selected")]
    WrongPhaseForPlacement,
    /// The cell lies outside the active window.
    #[display("Cell is outside the active window")]
    OutOfWindow,
    /// The cell is already occupied.
    #[display("Cell is already occupied")]
    CellOccupied,
    /// The current player has no pieces left to place.
    #[display("No pieces left to place")]
    NoPiecesLeft,
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

/// Why a piece could not be moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Pieces can only be moved in the movement phase.
    #[display("Pieces can only be moved in the movement phase")]
    WrongPhase,
    /// The source cell does not hold one of the current player's pieces.
    #[display("No piece of the current player at the source cell")]
    NotOwner,
    /// The destination cell is already occupied.
    #[display("Destination cell is already occupied")]
    DestinationOccupied,
    /// Source or destination lies outside the active window.
    #[display("Move leaves the active window")]
    OutOfWindow,
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

/// Why the active window could not be moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum WindowError {
    /// Not enough turns have been played yet.
    #[display("Window cannot move before turn {}", min_turns)]
    TooEarly {
        /// Turns required before the window unlocks.
        min_turns: u32,
    },
    /// The window would leave the board.
    #[display("Window would leave the board")]
    OutOfBounds,
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

/// Any rejection from a turn-consuming operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// Placement was rejected.
    #[display("Placement rejected: {}", _0)]
    Placement(PlacementError),
    /// Piece move was rejected.
    #[display("Move rejected: {}", _0)]
    Move(MoveError),
    /// Window move was rejected.
    #[display("Window move rejected: {}", _0)]
    Window(WindowError),
}

impl GameError {
    /// Returns true if the rejection was caused by a finished game.
    pub fn is_game_over(&self) -> bool {
        matches!(
            self,
            GameError::Placement(PlacementError::GameOver)
                | GameError::Move(MoveError::GameOver)
                | GameError::Window(WindowError::GameOver)
        )
    }
}
