//! Typestate driver for a single game.
//!
//! Each phase is its own type. A [`GameFinished`] always has a winner, and
//! only a [`GameInProgress`] can accept points, so scoring a finished game
//! does not compile.

use crate::player::Player;
use crate::score::Score;
use crate::transitions::next_score;
use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept points.
///
/// The score is never a `Game` variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInProgress {
    score: Score,
    history: Vec<Player>,
}

impl GameInProgress {
    /// Starts a game at love-all.
    #[instrument]
    pub fn new() -> Self {
        Self {
            score: Score::start(),
            history: Vec::new(),
        }
    }

    /// Records a point won by `winner`, consuming the current phase.
    #[instrument(skip(self), fields(score = %self.score))]
    pub fn point_won(self, winner: Player) -> GameResult {
        // In-progress scores always have a successor.
        let next = next_score(self.score, winner).unwrap_or(self.score);

        let mut history = self.history;
        history.push(winner);

        match next {
            Score::Game(player) => {
                info!(winner = %player, points = history.len(), "Game finished");
                GameResult::Finished(GameFinished {
                    winner: player,
                    history,
                })
            }
            score => GameResult::InProgress(GameInProgress { score, history }),
        }
    }

    /// Returns the current score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns point winners in order.
    pub fn history(&self) -> &[Player] {
        &self.history
    }

    /// Replays point winners from the start of a game.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::PointAfterGame`] if a point follows the
    /// one that ended the game.
    #[instrument]
    pub fn replay(winners: &[Player]) -> Result<GameResult, ReplayError> {
        let mut result = GameResult::InProgress(GameInProgress::new());

        for (index, winner) in winners.iter().enumerate() {
            result = match result {
                GameResult::InProgress(game) => game.point_won(*winner),
                GameResult::Finished(_) => {
                    debug!(index, "Point listed after game ended");
                    return Err(ReplayError::PointAfterGame { index });
                }
            };
        }

        Ok(result)
    }
}

impl Default for GameInProgress {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - winner determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameFinished {
    winner: Player,
    history: Vec<Player>,
}

impl GameFinished {
    /// Returns the winner.
    pub fn winner(&self) -> Player {
        self.winner
    }

    /// Returns the final score, always `Game`.
    pub fn score(&self) -> Score {
        Score::Game(self.winner)
    }

    /// Returns point winners in order.
    pub fn history(&self) -> &[Player] {
        &self.history
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of scoring a point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

impl GameResult {
    /// Returns the score after the point.
    pub fn score(&self) -> Score {
        match self {
            GameResult::InProgress(game) => game.score(),
            GameResult::Finished(game) => game.score(),
        }
    }

    /// Returns point winners so far.
    pub fn history(&self) -> &[Player] {
        match self {
            GameResult::InProgress(game) => game.history(),
            GameResult::Finished(game) => game.history(),
        }
    }
}

/// Error replaying a sequence of point winners.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// A point was listed after the game was already won.
    #[display("Point {} was played after the game ended", index)]
    PointAfterGame {
        /// Zero-based position of the offending point.
        index: usize,
    },
}
