//! Game sessions driven from text input.
//!
//! The driver owns the single game in progress; the library only computes
//! scores.

use crate::config::CliConfig;
use std::io::{BufRead, Write};
use strictly_tennis::{
    GameFinished, GameInProgress, GameResult, Player, Score, next_score, score_to_string,
    string_to_player,
};
use tracing::{info, instrument, warn};

/// Plays one game, reading a point winner per input line.
///
/// Invalid lines are reported and re-prompted. Returns the finished game,
/// or `None` if input ends first.
#[instrument(skip_all)]
pub fn play<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    config: &CliConfig,
) -> anyhow::Result<Option<GameFinished>> {
    let mut game = GameInProgress::new();
    writeln!(output, "{}", score_to_string(game.score()))?;
    prompt(&mut output, config)?;

    for line in input.lines() {
        let line = line?;
        let winner = match string_to_player(line.trim()) {
            Ok(winner) => winner,
            Err(e) => {
                writeln!(output, "{}", e)?;
                prompt(&mut output, config)?;
                continue;
            }
        };

        match game.point_won(winner) {
            GameResult::InProgress(next) => {
                writeln!(output, "{}", score_to_string(next.score()))?;
                game = next;
            }
            GameResult::Finished(done) => {
                writeln!(output, "{}", score_to_string(done.score()))?;
                if *config.show_history() {
                    write_history(&mut output, done.history())?;
                }
                return Ok(Some(done));
            }
        }
        prompt(&mut output, config)?;
    }

    warn!(points = game.history().len(), "Input ended before the game finished");
    Ok(None)
}

/// Replays point winner literals, printing the score after each point.
#[instrument(skip(output, config))]
pub fn replay<W: Write>(
    literals: &[String],
    mut output: W,
    config: &CliConfig,
) -> anyhow::Result<GameResult> {
    let winners = literals
        .iter()
        .map(|literal| string_to_player(literal))
        .collect::<Result<Vec<_>, _>>()?;
    let result = GameInProgress::replay(&winners)?;

    let mut score = Score::start();
    for winner in result.history() {
        if let Some(next) = next_score(score, *winner) {
            writeln!(output, "{}", score_to_string(next))?;
            score = next;
        }
    }

    if let GameResult::Finished(done) = &result {
        info!(winner = %done.winner(), "Replay reached game");
        if *config.show_history() {
            write_history(&mut output, done.history())?;
        }
    }
    Ok(result)
}

/// Renders a JSON-encoded score.
#[instrument(skip(output))]
pub fn show<W: Write>(json: &str, mut output: W) -> anyhow::Result<Score> {
    let score: Score = serde_json::from_str(json)?;
    writeln!(output, "{}", score_to_string(score))?;
    Ok(score)
}

fn prompt<W: Write>(output: &mut W, config: &CliConfig) -> std::io::Result<()> {
    write!(output, "{}", config.prompt())?;
    output.flush()
}

fn write_history<W: Write>(output: &mut W, history: &[Player]) -> std::io::Result<()> {
    let literals: Vec<_> = history.iter().map(|player| player.literal()).collect();
    writeln!(output, "Points: {}", literals.join(" "))
}
