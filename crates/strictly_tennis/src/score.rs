//! Game score states.

use crate::player::Player;
use crate::point::Point;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Both players below forty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointsData {
    /// Player 1's point.
    pub player_one: Point,
    /// Player 2's point.
    pub player_two: Point,
}

impl PointsData {
    /// Returns the given player's point.
    pub fn point_of(&self, player: Player) -> Point {
        match player {
            Player::PlayerOne => self.player_one,
            Player::PlayerTwo => self.player_two,
        }
    }

    /// Returns a copy with the given player's point replaced.
    pub fn with_point(self, player: Player, point: Point) -> Self {
        match player {
            Player::PlayerOne => Self {
                player_one: point,
                ..self
            },
            Player::PlayerTwo => Self {
                player_two: point,
                ..self
            },
        }
    }
}

/// One player at forty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FortyData {
    /// The player holding forty.
    pub player: Player,
    /// The opponent's point.
    pub other_point: Point,
}

/// Score of a single game.
///
/// A game starts at `Points(Love, Love)` and ends the first time a `Game`
/// is produced. Values are immutable; transitions build new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Score {
    /// Both players below forty.
    Points(PointsData),
    /// One player at forty.
    Forty(FortyData),
    /// Tied at forty or beyond.
    Deuce,
    /// Player leads by one point from deuce.
    Advantage(Player),
    /// Player won the game.
    Game(Player),
}

impl Score {
    /// Score at the start of a game.
    pub fn start() -> Self {
        points(Point::Love, Point::Love)
    }

    /// Returns true for the terminal `Game` state.
    pub fn is_game(&self) -> bool {
        matches!(self, Score::Game(_))
    }

    /// Returns the winner if the game is over.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Score::Game(player) => Some(*player),
            _ => None,
        }
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::start()
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Score::Points(data) => write!(f, "{} - {}", data.player_one, data.player_two),
            // Player 1's side always comes first.
            Score::Forty(FortyData {
                player: Player::PlayerOne,
                other_point,
            }) => write!(f, "40 - {}", other_point),
            Score::Forty(FortyData {
                player: Player::PlayerTwo,
                other_point,
            }) => write!(f, "{} - 40", other_point),
            Score::Deuce => write!(f, "Deuce"),
            Score::Advantage(player) => write!(f, "Advantage {}", player),
            Score::Game(player) => write!(f, "Game {}", player),
        }
    }
}

/// Both players below forty.
pub fn points(player_one: Point, player_two: Point) -> Score {
    Score::Points(PointsData {
        player_one,
        player_two,
    })
}

/// `player` at forty, opponent at `other_point`.
pub fn forty(player: Player, other_point: Point) -> Score {
    Score::Forty(FortyData {
        player,
        other_point,
    })
}

/// Deuce.
pub fn deuce() -> Score {
    Score::Deuce
}

/// Advantage to `player`.
pub fn advantage(player: Player) -> Score {
    Score::Advantage(player)
}

/// Game won by `player`.
pub fn game(player: Player) -> Score {
    Score::Game(player)
}

/// Renders a score for display.
#[instrument]
pub fn score_to_string(score: Score) -> String {
    score.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::{fifteen, love, thirty};

    #[test]
    fn test_points_display() {
        assert_eq!(score_to_string(points(love(), love())), "Love - Love");
        assert_eq!(score_to_string(points(thirty(), fifteen())), "30 - 15");
    }

    #[test]
    fn test_forty_display_keeps_player_one_first() {
        assert_eq!(score_to_string(forty(Player::PlayerOne, fifteen())), "40 - 15");
        assert_eq!(score_to_string(forty(Player::PlayerTwo, fifteen())), "15 - 40");
        assert_eq!(score_to_string(forty(Player::PlayerTwo, love())), "Love - 40");
    }

    #[test]
    fn test_terminal_and_deuce_display() {
        assert_eq!(score_to_string(deuce()), "Deuce");
        assert_eq!(
            score_to_string(advantage(Player::PlayerOne)),
            "Advantage Player 1"
        );
        assert_eq!(score_to_string(game(Player::PlayerTwo)), "Game Player 2");
    }

    #[test]
    fn test_start_score() {
        assert_eq!(Score::start(), points(love(), love()));
        assert_eq!(Score::default(), Score::start());
        assert!(!Score::start().is_game());
    }

    #[test]
    fn test_winner_only_for_game() {
        assert_eq!(game(Player::PlayerOne).winner(), Some(Player::PlayerOne));
        assert_eq!(advantage(Player::PlayerOne).winner(), None);
        assert_eq!(deuce().winner(), None);
    }

    #[test]
    fn test_points_data_replaces_one_side() {
        let data = PointsData {
            player_one: love(),
            player_two: fifteen(),
        };
        let updated = data.with_point(Player::PlayerTwo, thirty());
        assert_eq!(updated.point_of(Player::PlayerOne), love());
        assert_eq!(updated.point_of(Player::PlayerTwo), thirty());
    }

    #[test]
    fn test_score_json_shape() {
        let json = serde_json::to_string(&forty(Player::PlayerTwo, thirty())).unwrap();
        assert_eq!(
            json,
            r#"{"Forty":{"player":"PLAYER_TWO","other_point":"THIRTY"}}"#
        );
        let back: Score = serde_json::from_str(r#""Deuce""#).unwrap();
        assert_eq!(back, deuce());
    }
}
