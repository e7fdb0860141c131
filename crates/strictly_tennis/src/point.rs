//! Point counts below forty.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{instrument, warn};

/// A player's point count while below forty.
///
/// Ordered `Love < Fifteen < Thirty`. There is no fourth value: the point
/// after `Thirty` is a [`Score::Forty`](crate::Score::Forty), not a `Point`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Point {
    /// Zero points.
    Love,
    /// One point.
    Fifteen,
    /// Two points.
    Thirty,
}

impl Point {
    /// Returns the next point, or `None` after `Thirty`.
    pub fn next(self) -> Option<Self> {
        match self {
            Point::Love => Some(Point::Fifteen),
            Point::Fifteen => Some(Point::Thirty),
            Point::Thirty => None,
        }
    }

    /// Display label: `Love`, `15` or `30`.
    pub fn label(self) -> &'static str {
        match self {
            Point::Love => "Love",
            Point::Fifteen => "15",
            Point::Thirty => "30",
        }
    }

    /// Input literal, e.g. `FIFTEEN`.
    pub fn literal(self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Point {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Point::iter()
            .find(|point| point.literal() == s)
            .ok_or_else(|| ParseError::InvalidPoint(s.to_string()))
    }
}

/// `Love`.
pub fn love() -> Point {
    Point::Love
}

/// `Fifteen`.
pub fn fifteen() -> Point {
    Point::Fifteen
}

/// `Thirty`.
pub fn thirty() -> Point {
    Point::Thirty
}

/// Returns the successor of `point`.
///
/// `None` for `Thirty` is an expected outcome: the scorer moves to forty.
#[instrument]
pub fn increment_point(point: Point) -> Option<Point> {
    point.next()
}

/// Renders a point for display.
#[instrument]
pub fn point_to_string(point: Point) -> String {
    point.label().to_string()
}

/// Parses `LOVE`, `FIFTEEN` or `THIRTY`.
///
/// # Errors
///
/// Returns [`ParseError::InvalidPoint`] for any other text.
#[instrument]
pub fn string_to_point(s: &str) -> Result<Point, ParseError> {
    s.parse().inspect_err(|e| warn!(error = %e, "Rejected point input"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_point() {
        assert_eq!(increment_point(love()), Some(fifteen()));
        assert_eq!(increment_point(fifteen()), Some(thirty()));
        assert_eq!(increment_point(thirty()), None);
    }

    #[test]
    fn test_points_are_ordered() {
        assert!(love() < fifteen());
        assert!(fifteen() < thirty());
        let all: Vec<_> = Point::iter().collect();
        assert_eq!(all, vec![Point::Love, Point::Fifteen, Point::Thirty]);
    }

    #[test]
    fn test_point_to_string() {
        assert_eq!(point_to_string(love()), "Love");
        assert_eq!(point_to_string(fifteen()), "15");
        assert_eq!(point_to_string(thirty()), "30");
    }

    #[test]
    fn test_string_to_point() {
        assert_eq!(string_to_point("LOVE"), Ok(Point::Love));
        assert_eq!(string_to_point("FIFTEEN"), Ok(Point::Fifteen));
        assert_eq!(string_to_point("THIRTY"), Ok(Point::Thirty));
    }

    #[test]
    fn test_invalid_point_rejected() {
        assert_eq!(
            string_to_point("INVALID"),
            Err(ParseError::InvalidPoint("INVALID".to_string()))
        );
        assert!(matches!(string_to_point("FORTY"), Err(ParseError::InvalidPoint(_))));
        assert!(string_to_point("15").is_err());
    }
}
