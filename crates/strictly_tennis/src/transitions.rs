//! Scoring transitions.
//!
//! Each function takes the payload of the current score plus the point
//! winner and returns a fresh [`Score`]. None of them fail.

use crate::player::Player;
use crate::point::increment_point;
use crate::score::{FortyData, PointsData, Score, advantage, deuce, forty, game};
use tracing::{debug, instrument};

/// Next score when both players are below forty.
///
/// Never produces `Deuce`: only forty-level play can tie at forty.
#[instrument]
pub fn score_when_point(current: PointsData, winner: Player) -> Score {
    let next = match increment_point(current.point_of(winner)) {
        Some(point) => Score::Points(current.with_point(winner, point)),
        None => forty(winner, current.point_of(winner.opponent())),
    };
    debug!(?next, "Points transition");
    next
}

/// Next score when one player is at forty.
#[instrument]
pub fn score_when_forty(current: FortyData, winner: Player) -> Score {
    if winner == current.player {
        return game(winner);
    }
    let next = match increment_point(current.other_point) {
        Some(point) => forty(current.player, point),
        None => deuce(),
    };
    debug!(?next, "Forty transition");
    next
}

/// Next score from deuce: always advantage to the winner.
#[instrument]
pub fn score_when_deuce(winner: Player) -> Score {
    advantage(winner)
}

/// Next score from advantage: game for the advantaged player, else deuce.
#[instrument]
pub fn score_when_advantage(advantaged: Player, winner: Player) -> Score {
    if winner == advantaged {
        game(winner)
    } else {
        deuce()
    }
}

/// Dispatches on the current score.
///
/// Returns `None` for `Game`, which has no successor.
#[instrument]
pub fn next_score(score: Score, winner: Player) -> Option<Score> {
    let next = match score {
        Score::Points(data) => score_when_point(data, winner),
        Score::Forty(data) => score_when_forty(data, winner),
        Score::Deuce => score_when_deuce(winner),
        Score::Advantage(advantaged) => score_when_advantage(advantaged, winner),
        Score::Game(_) => return None,
    };
    debug!(from = %score, to = %next, "Point scored");
    Some(next)
}
