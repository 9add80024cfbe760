//! Interactive terminal session around a single [`Game`].

use crate::command::{HELP, SessionCommand};
use anyhow::Result;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use tictactwo::{Game, GameConfig, GameError, Player, SelectionChange, TapOutcome, TurnOutcome};
use tracing::{debug, info, instrument, warn};

/// A game plus the terminal conventions around it.
pub struct Session {
    game: Game,
    ai: Option<Player>,
    rng: StdRng,
    json: bool,
}

impl Session {
    /// Creates a session; `ai` names the side the computer plays.
    pub fn new(config: GameConfig, ai: Option<Player>, rng: StdRng, json: bool) -> Self {
        Self {
            game: Game::new(config),
            ai,
            rng,
            json,
        }
    }

    /// Reads commands until `quit` or end of input.
    #[instrument(skip_all, fields(ai = ?self.ai))]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        info!("Session started");
        self.render(&mut output)?;

        let mut lines = input.lines();
        loop {
            if self.ai_to_move() {
                self.ai_turn(&mut output)?;
                continue;
            }

            write!(output, "> ")?;
            output.flush()?;
            let Some(line) = lines.next() else {
                debug!("End of input");
                break;
            };
            let line = line?;

            let command = match line.parse::<SessionCommand>() {
                Ok(command) => command,
                Err(e) => {
                    writeln!(output, "{}", e)?;
                    continue;
                }
            };
            if command == SessionCommand::Quit {
                break;
            }
            self.execute(command, &mut output)?;
        }

        info!("Session ended");
        Ok(())
    }

    fn ai_to_move(&self) -> bool {
        let state = self.game.state();
        !state.is_over() && self.ai == Some(*state.current_player())
    }

    fn ai_turn<W: Write>(&mut self, output: &mut W) -> Result<()> {
        let player = *self.game.state().current_player();
        match self.game.play_ai_move(&mut self.rng) {
            Ok(Some((action, _))) => {
                writeln!(output, "{} plays: {}", player, action)?;
            }
            Ok(None) => {
                warn!(%player, "AI has no move, handing the turn back");
                writeln!(output, "{} has no move", player)?;
                self.ai = None;
            }
            Err(e) => {
                warn!(error = %e, "AI move rejected");
                writeln!(output, "{}", e)?;
                self.ai = None;
            }
        }
        self.render(output)
    }

    /// Applies one command and reports the result.
    #[instrument(skip(self, output))]
    fn execute<W: Write>(&mut self, command: SessionCommand, output: &mut W) -> Result<()> {
        let result: Result<Option<TurnOutcome>, GameError> = match command {
            SessionCommand::Place(pos) => self.game.place_piece(pos).map(Some).map_err(Into::into),
            SessionCommand::Move { from, to } => {
                self.game.move_piece(from, to).map(Some).map_err(Into::into)
            }
            SessionCommand::Window(shift) => {
                self.game.move_window(shift).map(Some).map_err(Into::into)
            }
            SessionCommand::Select(pos) => {
                let change = self.game.select_piece(pos);
                self.report_selection(change, output)?;
                Ok(None)
            }
            SessionCommand::Tap(pos) => match self.game.tap(pos) {
                Ok(TapOutcome::Played(action, outcome)) => {
                    writeln!(output, "played: {}", action)?;
                    Ok(Some(outcome))
                }
                Ok(TapOutcome::Selection(change)) => {
                    self.report_selection(change, output)?;
                    Ok(None)
                }
                Err(e) => Err(e),
            },
            SessionCommand::Ai => {
                let player = *self.game.state().current_player();
                match self.game.play_ai_move(&mut self.rng) {
                    Ok(Some((action, outcome))) => {
                        writeln!(output, "{} plays: {}", player, action)?;
                        Ok(Some(outcome))
                    }
                    Ok(None) => {
                        writeln!(output, "{} has no move", player)?;
                        Ok(None)
                    }
                    Err(e) => Err(e),
                }
            }
            SessionCommand::Reset => {
                self.game.reset();
                Ok(None)
            }
            SessionCommand::Show => Ok(None),
            SessionCommand::Help => {
                writeln!(output, "{}", HELP)?;
                return Ok(());
            }
            SessionCommand::Quit => return Ok(()),
        };

        match result {
            Ok(_) => self.render(output),
            Err(e) => {
                writeln!(output, "{}", e)?;
                if e.is_game_over() {
                    writeln!(output, "type 'reset' to play again")?;
                }
                Ok(())
            }
        }
    }

    fn report_selection<W: Write>(&self, change: SelectionChange, output: &mut W) -> Result<()> {
        match change {
            SelectionChange::Selected(pos) => writeln!(output, "selected {}", pos)?,
            SelectionChange::Cleared => writeln!(output, "selection cleared")?,
            SelectionChange::Ignored => writeln!(output, "nothing to select there")?,
        }
        Ok(())
    }

    fn render<W: Write>(&self, output: &mut W) -> Result<()> {
        if self.json {
            writeln!(output, "{}", serde_json::to_string(&self.game.snapshot())?)?;
            return Ok(());
        }
        let state = self.game.state();
        writeln!(output, "{}", state.board().display(state.window()))?;
        writeln!(
            output,
            "{} [{} phase, turn {}]",
            self.game.status_line(),
            state.phase(),
            state.move_count()
        )?;
        if let Some((_, line)) = self.game.winning_line() {
            let cells: Vec<String> = line.iter().map(ToString::to_string).collect();
            writeln!(output, "winning line: {}", cells.join(" "))?;
        }
        Ok(())
    }
}
