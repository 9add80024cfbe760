//! Tic-tac-two - tic-tac-toe on a sliding window.
//!
//! Played on a 5×5 board where only a 3×3 active window counts. Pieces are
//! placed inside the window; once both players have spent enough of their
//! allotment they may also relocate their own pieces or shift the window
//! itself. Three in a row inside the window wins.
//!
//! # Architecture
//!
//! - [`Board`], [`ActiveWindow`]: pure data with bounds invariants
//! - [`Game`]: the state machine; the only way to mutate a [`GameState`]
//! - [`movegen`]: enumerates a player's legal candidates in a fixed order
//! - [`ai`]: one-ply heuristic (win, else block, else random)
//! - [`rules`]: win detection restricted to the window
//! - [`invariants`]: runtime-checked properties of every reachable state
//!
//! # Example
//!
//! ```
//! use tictactwo::{Game, GameConfig, Player, Position, TurnOutcome};
//!
//! let mut game = Game::new(GameConfig::classic());
//! game.place_piece(Position::new(1, 1)).unwrap();
//! game.place_piece(Position::new(2, 2)).unwrap();
//! game.place_piece(Position::new(1, 2)).unwrap();
//! game.place_piece(Position::new(3, 3)).unwrap();
//! let outcome = game.place_piece(Position::new(1, 3)).unwrap();
//! assert_eq!(outcome, TurnOutcome::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod ai;
mod board;
mod config;
mod engine;
mod error;
pub mod invariants;
pub mod movegen;
pub mod rules;
mod state;
mod types;
mod window;

pub use action::{Move, SelectionChange, TapOutcome, TurnOutcome};
pub use ai::Decision;
pub use board::{Board, OffBoard};
pub use config::{ConfigError, GameConfig};
pub use engine::Game;
pub use error::{GameError, MoveError, PlacementError, WindowError};
pub use state::{GameState, PiecesRemaining};
pub use types::{GamePhase, Player, Position, WindowShift};
pub use window::ActiveWindow;
