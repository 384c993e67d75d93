//! Type-safe wrappers for navigation values

use std::fmt;

use super::errors::{GameError, GameResult};

/// A relative move entered by the player.
///
/// Player coordinates use positive X = right and positive Y = up. The
/// grid stores rows top-down, so moving "up" decreases the row index;
/// [`Delta::grid_offset`] performs that flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delta {
    pub dx: i32,
    pub dy: i32,
}

impl Delta {
    pub fn new(dx: i32, dy: i32) -> Self {
        Delta { dx, dy }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    /// Manhattan length, used for movement cost and travel time.
    pub fn distance(&self) -> i32 {
        self.dx.abs() + self.dy.abs()
    }

    /// The (column, row) offset in internal grid coordinates.
    pub fn grid_offset(&self) -> (i32, i32) {
        (self.dx, -self.dy)
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}", self.dx, self.dy)
    }
}

/// Largest coordinate magnitude a player may enter.
pub const MAX_COORDINATE: i32 = 64;

/// Parse a coordinate pair such as `"1,2"`, `"1, 2"` or `"1 2"`.
/// Extra tokens after the first two are ignored. Components outside
/// `-MAX_COORDINATE..=MAX_COORDINATE` are rejected.
pub fn parse_pair(text: &str) -> GameResult<(i32, i32)> {
    let normalized = text.replace(',', " ");
    let mut tokens = normalized.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(a), Some(b)) => Ok((parse_coordinate(a)?, parse_coordinate(b)?)),
        _ => Err(GameError::InvalidInput(format!(
            "expected two coordinates, got '{}'",
            text.trim()
        ))),
    }
}

fn parse_coordinate(token: &str) -> GameResult<i32> {
    let value = token.parse::<i32>()?;
    if !(-MAX_COORDINATE..=MAX_COORDINATE).contains(&value) {
        return Err(GameError::InvalidInput(format!(
            "coordinate {} out of range",
            value
        )));
    }
    Ok(value)
}
