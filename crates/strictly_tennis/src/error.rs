//! Error types for text input at the system boundary.

use derive_more::{Display, Error};

/// Rejected textual input.
///
/// Only the parsers produce errors; every scoring transition is total.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    /// The text is not `PLAYER_ONE` or `PLAYER_TWO`.
    #[display("Invalid player: {:?}", _0)]
    InvalidPlayer(#[error(not(source))] String),

    /// The text is not `LOVE`, `FIFTEEN` or `THIRTY`.
    #[display("Invalid point: {:?}", _0)]
    InvalidPoint(#[error(not(source))] String),
}
