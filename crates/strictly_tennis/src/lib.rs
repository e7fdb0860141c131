//! Strictly Tennis - scoring for a single tennis game.
//!
//! The score is a closed sum type and every transition is a pure function
//! from the current score payload and the point winner to a new [`Score`].
//!
//! # Architecture
//!
//! - **Player / Point**: the two identities and the sub-forty point counts
//! - **Score**: `Points`, `Forty`, `Deuce`, `Advantage` and the terminal `Game`
//! - **Transitions**: `score_when_*` functions plus the [`next_score`] dispatcher
//! - **Game**: a typestate driver holding one game's score and history
//!
//! # Example
//!
//! ```
//! use strictly_tennis::{Player, Score, next_score, score_to_string};
//!
//! let score = next_score(Score::start(), Player::PlayerOne);
//! assert_eq!(score.map(score_to_string).as_deref(), Some("15 - Love"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod player;
mod point;
mod score;
mod transitions;

pub use error::ParseError;
pub use game::{GameFinished, GameInProgress, GameResult, ReplayError};
pub use player::{Player, other_player, player_to_string, string_to_player};
pub use point::{
    Point, fifteen, increment_point, love, point_to_string, string_to_point, thirty,
};
pub use score::{
    FortyData, PointsData, Score, advantage, deuce, forty, game, points, score_to_string,
};
pub use transitions::{
    next_score, score_when_advantage, score_when_deuce, score_when_forty, score_when_point,
};
