//! Player identity.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{instrument, warn};

/// One of the two players in a game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Player {
    /// Player 1, always displayed on the left.
    PlayerOne,
    /// Player 2.
    PlayerTwo,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }

    /// Display label, e.g. `Player 1`.
    pub fn label(self) -> &'static str {
        match self {
            Player::PlayerOne => "Player 1",
            Player::PlayerTwo => "Player 2",
        }
    }

    /// Input literal, e.g. `PLAYER_ONE`.
    pub fn literal(self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Player {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Player::iter()
            .find(|player| player.literal() == s)
            .ok_or_else(|| ParseError::InvalidPlayer(s.to_string()))
    }
}

/// Returns the opposing player.
#[instrument]
pub fn other_player(player: Player) -> Player {
    player.opponent()
}

/// Renders a player for display.
#[instrument]
pub fn player_to_string(player: Player) -> String {
    player.label().to_string()
}

/// Parses `PLAYER_ONE` or `PLAYER_TWO`.
///
/// # Errors
///
/// Returns [`ParseError::InvalidPlayer`] for any other text.
#[instrument]
pub fn string_to_player(s: &str) -> Result<Player, ParseError> {
    s.parse().inspect_err(|e| warn!(error = %e, "Rejected player input"))
}
