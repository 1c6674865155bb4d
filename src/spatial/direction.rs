//! Compass directions and their grid offsets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::WorldError;
use crate::core::types::Coordinate;

/// The eight king-move compass headings
///
/// `y` grows downward, matching row order in text layouts, so North is
/// `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Scan order for "all directions" queries
    ///
    /// The order is observable: `View::find_all` preserves it and random
    /// picks draw from the sequence it produces.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Unit coordinate offset of this heading
    pub const fn offset(self) -> Coordinate {
        match self {
            Direction::North => Coordinate::new(0, -1),
            Direction::NorthEast => Coordinate::new(1, -1),
            Direction::East => Coordinate::new(1, 0),
            Direction::SouthEast => Coordinate::new(1, 1),
            Direction::South => Coordinate::new(0, 1),
            Direction::SouthWest => Coordinate::new(-1, 1),
            Direction::West => Coordinate::new(-1, 0),
            Direction::NorthWest => Coordinate::new(-1, -1),
        }
    }

    /// Compass name (`"n"`, `"ne"`, ...)
    pub const fn name(self) -> &'static str {
        match self {
            Direction::North => "n",
            Direction::NorthEast => "ne",
            Direction::East => "e",
            Direction::SouthEast => "se",
            Direction::South => "s",
            Direction::SouthWest => "sw",
            Direction::West => "w",
            Direction::NorthWest => "nw",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = WorldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "n" => Ok(Direction::North),
            "ne" => Ok(Direction::NorthEast),
            "e" => Ok(Direction::East),
            "se" => Ok(Direction::SouthEast),
            "s" => Ok(Direction::South),
            "sw" => Ok(Direction::SouthWest),
            "w" => Ok(Direction::West),
            "nw" => Ok(Direction::NorthWest),
            other => Err(WorldError::UnknownDirection(other.to_string())),
        }
    }
}
