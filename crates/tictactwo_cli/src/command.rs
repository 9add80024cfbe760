//! Line commands accepted by an interactive session.

use derive_more::{Display, Error};
use std::str::FromStr;
use tictactwo::{Position, WindowShift};

/// A single session command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// `place X Y`
    Place(Position),
    /// `select X Y`
    Select(Position),
    /// `move FX FY TX TY`
    Move {
        /// Source cell.
        from: Position,
        /// Destination cell.
        to: Position,
    },
    /// `tap X Y`
    Tap(Position),
    /// `window DIRECTION`
    Window(WindowShift),
    /// `ai`
    Ai,
    /// `show`
    Show,
    /// `reset`
    Reset,
    /// `help`
    Help,
    /// `quit`
    Quit,
}

/// Usage text printed by `help`.
pub const HELP: &str = "\
commands:
  place X Y            place a piece
  select X Y           pick up one of your pieces
  move FX FY TX TY     move a piece inside the window
  tap X Y              place, select or move depending on the cell
  window DIRECTION     left right up down up-left down-left up-right down-right
  ai                   let the computer play this turn
  show                 print the board
  reset                start over
  quit                 leave";

/// Why a line could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseCommandError {
    /// Blank line.
    #[display("Empty command")]
    Empty,
    /// Unknown verb.
    #[display("Unknown command '{}', try 'help'", _0)]
    Unknown(#[error(not(source))] String),
    /// Wrong number of arguments.
    #[display("'{}' expects {} arguments", verb, expected)]
    Arity {
        /// The command verb.
        verb: &'static str,
        /// Expected argument count.
        expected: usize,
    },
    /// Coordinate that is not a non-negative integer.
    #[display("Invalid coordinate '{}'", _0)]
    Coordinate(#[error(not(source))] String),
    /// Unknown window direction.
    #[display("Invalid direction '{}'", _0)]
    Direction(#[error(not(source))] String),
}

fn coordinate(token: &str) -> Result<usize, ParseCommandError> {
    token
        .parse()
        .map_err(|_| ParseCommandError::Coordinate(token.to_string()))
}

fn position(args: &[&str]) -> Result<Position, ParseCommandError> {
    Ok(Position::new(coordinate(args[0])?, coordinate(args[1])?))
}

fn expect(verb: &'static str, args: &[&str], expected: usize) -> Result<(), ParseCommandError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ParseCommandError::Arity { verb, expected })
    }
}

impl FromStr for SessionCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((verb, args)) = tokens.split_first() else {
            return Err(ParseCommandError::Empty);
        };

        match verb.to_lowercase().as_str() {
            "place" | "p" => {
                expect("place", args, 2)?;
                Ok(SessionCommand::Place(position(args)?))
            }
            "select" | "s" => {
                expect("select", args, 2)?;
                Ok(SessionCommand::Select(position(args)?))
            }
            "move" | "m" => {
                expect("move", args, 4)?;
                Ok(SessionCommand::Move {
                    from: position(&args[..2])?,
                    to: position(&args[2..])?,
                })
            }
            "tap" | "t" => {
                expect("tap", args, 2)?;
                Ok(SessionCommand::Tap(position(args)?))
            }
            "window" | "w" => {
                expect("window", args, 1)?;
                args[0]
                    .to_lowercase()
                    .parse()
                    .map(SessionCommand::Window)
                    .map_err(|_| ParseCommandError::Direction(args[0].to_string()))
            }
            "ai" => Ok(SessionCommand::Ai),
            "show" => Ok(SessionCommand::Show),
            "reset" => Ok(SessionCommand::Reset),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}
