use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::{GALAXY_SIZE, SECTOR_SIZE};

/// A position within the 8x8 galaxy (quadrant coordinates).
/// Values range 0-7 internally. (0,0) is upper-left; y grows downward.
/// Displayed 1-based to the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuadrantPosition {
    pub x: i32,
    pub y: i32,
}

impl QuadrantPosition {
    pub fn new(x: i32, y: i32) -> Self {
        QuadrantPosition { x, y }
    }

    pub fn in_bounds(&self) -> bool {
        (0..GALAXY_SIZE as i32).contains(&self.x) && (0..GALAXY_SIZE as i32).contains(&self.y)
    }

    pub fn manhattan_distance(&self, other: QuadrantPosition) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl fmt::Display for QuadrantPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.x + 1, self.y + 1)
    }
}

/// A position within an 8x8 sector grid, same conventions as
/// [`QuadrantPosition`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectorPosition {
    pub x: i32,
    pub y: i32,
}

impl SectorPosition {
    pub fn new(x: i32, y: i32) -> Self {
        SectorPosition { x, y }
    }

    pub fn in_bounds(&self) -> bool {
        (0..SECTOR_SIZE as i32).contains(&self.x) && (0..SECTOR_SIZE as i32).contains(&self.y)
    }

    /// Euclidean distance in sectors.
    pub fn distance_to(&self, other: SectorPosition) -> f64 {
        let dx = f64::from(other.x - self.x);
        let dy = f64::from(other.y - self.y);
        (dx * dx + dy * dy).sqrt()
    }

    pub fn offset(&self, dx: i32, dy: i32) -> SectorPosition {
        SectorPosition {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for SectorPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.x + 1, self.y + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_one_based() {
        assert_eq!(QuadrantPosition::new(0, 7).to_string(), "[1, 8]");
        assert_eq!(SectorPosition::new(3, 4).to_string(), "[4, 5]");
    }

    #[test]
    fn bounds() {
        assert!(SectorPosition::new(0, 0).in_bounds());
        assert!(SectorPosition::new(7, 7).in_bounds());
        assert!(!SectorPosition::new(-1, 3).in_bounds());
        assert!(!SectorPosition::new(3, 8).in_bounds());
        assert!(!QuadrantPosition::new(8, 0).in_bounds());
    }

    #[test]
    fn distance_diagonal() {
        let a = SectorPosition::new(0, 0);
        let b = SectorPosition::new(3, 4);
        assert_eq!(a.distance_to(b), 5.0);
    }

    #[test]
    fn manhattan() {
        let a = QuadrantPosition::new(1, 1);
        assert_eq!(a.manhattan_distance(QuadrantPosition::new(4, 0)), 4);
    }
}
