//! First-class move types for tic-tac-two.
//!
//! A move describes what a player intends to do. It carries no player:
//! the engine always applies it for the player whose turn it is.

use super::{Player, Position, WindowShift};
use serde::{Deserialize, Serialize};

/// A turn-consuming action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Place a new piece on an empty window cell.
    PlacePiece(Position),
    /// Translate the active window by one step.
    MoveWindow(WindowShift),
    /// Relocate one of the player's pieces within the window.
    MovePiece {
        /// Cell the piece leaves.
        from: Position,
        /// Cell the piece lands on.
        to: Position,
    },
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::PlacePiece(pos) => write!(f, "place at {}", pos),
            Move::MoveWindow(shift) => write!(f, "move window {}", shift),
            Move::MovePiece { from, to } => write!(f, "move piece {} -> {}", from, to),
        }
    }
}

/// What a turn-consuming operation led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The game goes on with this player to move.
    Next(Player),
    /// The game is over.
    Won(Player),
}

/// Effect of a selection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionChange {
    /// The piece at this cell is now selected.
    Selected(Position),
    /// The previous selection was dropped.
    Cleared,
    /// Nothing changed.
    Ignored,
}

/// Effect of tapping a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TapOutcome {
    /// A turn was played.
    Played(Move, TurnOutcome),
    /// The selection changed without consuming the turn.
    Selection(SelectionChange),
}
