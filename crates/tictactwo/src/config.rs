//! Rule-set configuration.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Tunable constants of a tic-tac-two rule set.
///
/// The defaults are the classic rules: 5×5 board, 3×3 window, four pieces
/// per player, movement unlocked after two placements each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the board.
    #[serde(default = "default_board_size")]
    pub board_size: usize,

    /// Side length of the active window.
    #[serde(default = "default_window_size")]
    pub window_size: usize,

    /// Pieces each player may place over the whole game.
    #[serde(default = "default_pieces_per_player")]
    pub pieces_per_player: u8,

    /// Remaining allotment at or below which a player counts as depleted.
    ///
    /// The game enters the movement phase once both players are depleted.
    #[serde(default = "default_movement_threshold")]
    pub movement_threshold: u8,

    /// Turns that must be played before the window may move or the
    /// movement phase may begin.
    #[serde(default = "default_min_turns")]
    pub min_turns: u32,
}

fn default_board_size() -> usize {
    5
}

fn default_window_size() -> usize {
    3
}

fn default_pieces_per_player() -> u8 {
    4
}

fn default_movement_threshold() -> u8 {
    2
}

fn default_min_turns() -> u32 {
    4
}

impl GameConfig {
    /// Classic rules with four pieces per player.
    pub fn classic() -> Self {
        Self {
            board_size: default_board_size(),
            window_size: default_window_size(),
            pieces_per_player: default_pieces_per_player(),
            movement_threshold: default_movement_threshold(),
            min_turns: default_min_turns(),
        }
    }

    /// Longer rules with five pieces per player; movement unlocks at three left.
    pub fn extended() -> Self {
        Self {
            pieces_per_player: 5,
            movement_threshold: 3,
            ..Self::classic()
        }
    }

    /// Checks that the values describe a playable game.
    #[instrument]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 || self.window_size == 0 {
            return Err(ConfigError::new("Board and window sizes must be positive".to_string()));
        }
        if self.window_size > self.board_size {
            return Err(ConfigError::new(format!(
                "Window size {} exceeds board size {}",
                self.window_size, self.board_size
            )));
        }
        if self.pieces_per_player == 0 {
            return Err(ConfigError::new("Each player needs at least one piece".to_string()));
        }
        if self.movement_threshold > self.pieces_per_player {
            return Err(ConfigError::new(format!(
                "Movement threshold {} exceeds allotment {}",
                self.movement_threshold, self.pieces_per_player
            )));
        }
        // The phase switch is only checked on placement; the last one must
        // land at or after `min_turns`.
        if 2 * u32::from(self.pieces_per_player) < self.min_turns {
            return Err(ConfigError::new(format!(
                "Both players run out of pieces before turn {}",
                self.min_turns
            )));
        }
        Ok(())
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// Missing keys fall back to the classic rules.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading game config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(
            board_size = config.board_size,
            pieces = config.pieces_per_player,
            "Game config loaded"
        );
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_is_valid() {
        assert!(GameConfig::classic().validate().is_ok());
        assert!(GameConfig::extended().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GameConfig::from_toml("pieces_per_player = 5\nmovement_threshold = 3\n").unwrap();
        assert_eq!(config, GameConfig::extended());
    }

    #[test]
    fn test_window_larger_than_board_rejected() {
        let err = GameConfig::from_toml("board_size = 3\nwindow_size = 4\n").unwrap_err();
        assert!(err.message.contains("exceeds board size"));
    }

    #[test]
    fn test_unreachable_movement_phase_rejected() {
        let err = GameConfig::from_toml("pieces_per_player = 2\nmin_turns = 5\n").unwrap_err();
        assert!(err.message.contains("before turn 5"));
        assert!(GameConfig::from_toml("pieces_per_player = 2\nmovement_threshold = 0\n").is_ok());
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = GameConfig::from_toml("board_size = \"five\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
