//! Command-line interface for tictactwo.

use clap::{Parser, Subcommand, ValueEnum};
use tictactwo::{GameConfig, Player};

/// Tic-tac-two - tic-tac-toe on a sliding 3x3 window
#[derive(Parser, Debug)]
#[command(name = "tictactwo")]
#[command(about = "Play tic-tac-two in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Rule set to play with
    #[arg(long, value_enum, default_value = "classic", global = true)]
    pub rules: Rules,

    /// TOML file overriding the rule set (falls back to $TICTACTWO_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Built-in rule sets.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rules {
    /// Four pieces each, movement after two placements each
    Classic,
    /// Five pieces each, movement at three pieces left
    Extended,
}

impl Rules {
    /// The configuration for this rule set.
    pub fn config(self) -> GameConfig {
        match self {
            Rules::Classic => GameConfig::classic(),
            Rules::Extended => GameConfig::extended(),
        }
    }
}

/// Which side the computer plays.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiSide {
    /// Computer plays X
    X,
    /// Computer plays O
    O,
    /// Two humans at one terminal
    None,
}

impl AiSide {
    /// The player controlled by the computer, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            AiSide::X => Some(Player::X),
            AiSide::O => Some(Player::O),
            AiSide::None => None,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading commands from stdin
    Play {
        /// Side played by the computer
        #[arg(long, value_enum, default_value = "o")]
        ai: AiSide,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Print the game state as JSON instead of a board
        #[arg(long)]
        json: bool,
    },

    /// Let the computer play against itself
    Selfplay {
        /// Number of games to play
        #[arg(short, long, default_value = "10")]
        games: usize,

        /// Turn limit after which a game counts as unfinished
        #[arg(long, default_value = "100")]
        max_turns: u32,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}
