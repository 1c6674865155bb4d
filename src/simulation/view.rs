//! Agent-centered perception of the grid

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::core::types::Coordinate;
use crate::entity::occupant::Occupant;
use crate::spatial::direction::Direction;
use crate::spatial::grid::Grid;

/// Glyph a view reports for an unoccupied cell
pub const EMPTY_GLYPH: char = ' ';

/// Glyph a view reports for anything past the grid edge
///
/// The world boundary is indistinguishable from a wall to a viewer;
/// behaviors must account for that rather than probe for edges.
pub const BOUNDARY_GLYPH: char = '#';

/// Read-only window onto the grid, centered on one agent
///
/// Built fresh for each `act` call and never outliving it.
pub struct View<'a> {
    grid: &'a Grid<Occupant>,
    origin: Coordinate,
}

impl<'a> View<'a> {
    pub fn new(grid: &'a Grid<Occupant>, origin: Coordinate) -> Self {
        Self { grid, origin }
    }

    /// Glyph of the neighboring cell one step toward `direction`
    pub fn look(&self, direction: Direction) -> char {
        let target = self.origin + direction.offset();
        if self.grid.is_inside(target) {
            self.grid.get(target).map_or(EMPTY_GLYPH, Occupant::glyph)
        } else {
            BOUNDARY_GLYPH
        }
    }

    /// Every direction showing `glyph`, in `Direction::ALL` order
    pub fn find_all(&self, glyph: char) -> Vec<Direction> {
        Direction::ALL
            .iter()
            .copied()
            .filter(|direction| self.look(*direction) == glyph)
            .collect()
    }

    /// Uniformly random direction showing `glyph`, if any
    pub fn find(&self, glyph: char, rng: &mut dyn RngCore) -> Option<Direction> {
        self.find_all(glyph).choose(rng).copied()
    }
}
