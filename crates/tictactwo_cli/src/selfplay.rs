//! Computer-versus-computer matches.

use anyhow::Result;
use rand::rngs::StdRng;
use serde::Serialize;
use std::io::Write;
use tictactwo::{Game, GameConfig, Player, TurnOutcome};
use tracing::{debug, info, instrument, warn};

/// How one game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    /// Someone completed a line.
    Won(Player),
    /// The turn cap was reached first, or a side had no move.
    Unfinished,
}

/// Record of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    /// How it ended.
    pub result: GameResult,
    /// Turns played.
    pub turns: u32,
}

/// Totals over a series of games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Games won by X.
    pub x_wins: usize,
    /// Games won by O.
    pub o_wins: usize,
    /// Games that hit the turn cap.
    pub unfinished: usize,
    /// Per-game records in play order.
    pub games: Vec<GameRecord>,
}

impl Summary {
    fn record(&mut self, record: GameRecord) {
        match record.result {
            GameResult::Won(Player::X) => self.x_wins += 1,
            GameResult::Won(Player::O) => self.o_wins += 1,
            GameResult::Unfinished => self.unfinished += 1,
        }
        self.games.push(record);
    }
}

/// Plays one game with the AI on both sides.
#[instrument(skip(config, rng))]
pub fn play_one(config: &GameConfig, max_turns: u32, rng: &mut StdRng) -> GameRecord {
    let mut game = Game::new(*config);

    while *game.state().move_count() < max_turns {
        match game.play_ai_move(rng) {
            Ok(Some((_, TurnOutcome::Won(winner)))) => {
                return GameRecord {
                    result: GameResult::Won(winner),
                    turns: *game.state().move_count(),
                };
            }
            Ok(Some(_)) => {}
            Ok(None) => {
                debug!(player = %game.state().current_player(), "No candidate moves");
                break;
            }
            Err(e) => {
                warn!(error = %e, "AI move rejected");
                break;
            }
        }
    }

    GameRecord {
        result: GameResult::Unfinished,
        turns: *game.state().move_count(),
    }
}

/// Plays `games` games in a row from one random stream.
#[instrument(skip(config, rng))]
pub fn run(config: GameConfig, games: usize, max_turns: u32, rng: &mut StdRng) -> Summary {
    let mut summary = Summary::default();
    for _ in 0..games {
        summary.record(play_one(&config, max_turns, rng));
    }
    info!(
        x_wins = summary.x_wins,
        o_wins = summary.o_wins,
        unfinished = summary.unfinished,
        "Self-play finished"
    );
    summary
}

/// Writes the summary as text or JSON.
pub fn report<W: Write>(summary: &Summary, json: bool, output: &mut W) -> Result<()> {
    if json {
        writeln!(output, "{}", serde_json::to_string_pretty(summary)?)?;
        return Ok(());
    }
    for (index, game) in summary.games.iter().enumerate() {
        let result = match game.result {
            GameResult::Won(player) => format!("{} wins", player),
            GameResult::Unfinished => "unfinished".to_string(),
        };
        writeln!(output, "game {}: {} after {} turns", index + 1, result, game.turns)?;
    }
    writeln!(output, "X wins: {}", summary.x_wins)?;
    writeln!(output, "O wins: {}", summary.o_wins)?;
    writeln!(output, "unfinished: {}", summary.unfinished)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_totals_match_games() {
        let mut rng = StdRng::seed_from_u64(11);
        let summary = run(GameConfig::classic(), 8, 60, &mut rng);

        assert_eq!(summary.games.len(), 8);
        assert_eq!(summary.x_wins + summary.o_wins + summary.unfinished, 8);
        assert!(summary.games.iter().all(|g| g.turns <= 60));
    }

    #[test]
    fn test_same_seed_same_summary() {
        let first = run(GameConfig::extended(), 4, 80, &mut StdRng::seed_from_u64(3));
        let second = run(GameConfig::extended(), 4, 80, &mut StdRng::seed_from_u64(3));
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_turn_cap_is_unfinished() {
        let record = play_one(&GameConfig::classic(), 0, &mut StdRng::seed_from_u64(1));
        assert_eq!(
            record,
            GameRecord {
                result: GameResult::Unfinished,
                turns: 0,
            }
        );
    }

    #[test]
    fn test_text_report() {
        let summary = Summary {
            x_wins: 1,
            o_wins: 0,
            unfinished: 1,
            games: vec![
                GameRecord {
                    result: GameResult::Won(Player::X),
                    turns: 7,
                },
                GameRecord {
                    result: GameResult::Unfinished,
                    turns: 100,
                },
            ],
        };
        let mut output = Vec::new();
        report(&summary, false, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("game 1: X wins after 7 turns"));
        assert!(text.contains("game 2: unfinished after 100 turns"));
        assert!(text.contains("X wins: 1\nO wins: 0\nunfinished: 1"));
    }

    #[test]
    fn test_json_report() {
        let mut output = Vec::new();
        report(&Summary::default(), true, &mut output).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["x_wins"], 0);
        assert!(value["games"].as_array().unwrap().is_empty());
    }
}
