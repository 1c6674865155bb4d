//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Unique identifier for critters
///
/// Minted from a monotonic counter at creation time; never reused within
/// one world. The turn scheduler keys its acted-set on these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CritterId(pub u64);

/// Simulation turn counter
pub type Turn = u64;

/// 2D grid position in cell units
///
/// Plain integer vector; negative values are representable (an offset added
/// at the grid edge points outside), bounds are the grid's concern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Coordinate {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_addition() {
        let a = Coordinate::new(2, 3);
        let b = Coordinate::new(-1, 1);
        assert_eq!(a + b, Coordinate::new(1, 4));
    }

    #[test]
    fn test_coordinate_addition_is_pure() {
        let a = Coordinate::new(5, 5);
        let _ = a + Coordinate::new(1, 0);
        assert_eq!(a, Coordinate::new(5, 5));
    }

    #[test]
    fn test_coordinate_can_leave_first_quadrant() {
        let origin = Coordinate::new(0, 0);
        let moved = origin + Coordinate::new(-1, -1);
        assert_eq!(moved, Coordinate::new(-1, -1));
    }

    #[test]
    fn test_critter_id_equality_and_hash() {
        use std::collections::HashMap;
        let a = CritterId(1);
        let b = CritterId(1);
        let c = CritterId(2);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut map: HashMap<CritterId, &str> = HashMap::new();
        map.insert(CritterId(7), "bouncer");
        assert_eq!(map.get(&CritterId(7)), Some(&"bouncer"));
    }
}
