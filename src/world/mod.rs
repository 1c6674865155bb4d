//! World state and its textual interfaces

pub mod legend;
pub mod loader;
pub mod render;

pub use legend::{Legend, LegendEntry};

use ahash::AHashSet;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fmt;

use crate::core::error::{Result, WorldError};
use crate::core::types::{Coordinate, CritterId, Turn};
use crate::entity::occupant::Occupant;
use crate::simulation::turn::{run_turn, TurnEvent};
use crate::spatial::grid::Grid;

/// The simulation world
///
/// Owns the grid, the legend that built it, the seeded random number
/// generator every random decision draws from, and the turn bookkeeping.
/// Single-threaded by design: a turn runs to completion before anything
/// else observes the world.
pub struct World {
    pub(crate) grid: Grid<Occupant>,
    legend: Legend,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) current_turn: Turn,
    /// Ids that already acted this turn; cleared when a turn starts
    pub(crate) acted: AHashSet<CritterId>,
    next_critter_id: u64,
}

impl World {
    /// Build a world from a rectangular character layout
    ///
    /// Deterministic: the same layout and seed produce the same world,
    /// including every critter's initial heading.
    pub fn from_layout(rows: &[&str], legend: Legend, seed: u64) -> Result<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut next_critter_id = 0;
        let grid = loader::parse_layout(rows, &legend, &mut rng, &mut next_critter_id)?;
        tracing::info!(
            width = grid.width(),
            height = grid.height(),
            critters = next_critter_id,
            seed,
            "world constructed"
        );
        Ok(Self {
            grid,
            legend,
            rng,
            current_turn: 0,
            acted: AHashSet::new(),
            next_critter_id,
        })
    }

    /// Build a world from newline-separated layout text
    pub fn from_text(text: &str, legend: Legend, seed: u64) -> Result<Self> {
        let rows: Vec<&str> = text.lines().collect();
        Self::from_layout(&rows, legend, seed)
    }

    /// Advance the simulation by one turn
    pub fn turn(&mut self) -> Vec<TurnEvent> {
        run_turn(self)
    }

    pub fn grid(&self) -> &Grid<Occupant> {
        &self.grid
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    pub fn current_turn(&self) -> Turn {
        self.current_turn
    }

    /// Occupant at a caller-supplied coordinate
    pub fn occupant(&self, coord: Coordinate) -> Result<Option<&Occupant>> {
        self.grid.require_inside(coord)?;
        Ok(self.grid.get(coord))
    }

    /// Place a new occupant built from `glyph` on an empty in-bounds cell
    pub fn spawn(&mut self, coord: Coordinate, glyph: char) -> Result<()> {
        self.grid.require_inside(coord)?;
        if self.grid.get(coord).is_some() {
            return Err(WorldError::CellOccupied { coord });
        }
        let occupant = self
            .legend
            .build(glyph, &mut self.rng, &mut self.next_critter_id)
            .ok_or(WorldError::UnknownGlyph {
                glyph,
                x: coord.x as usize,
                y: coord.y as usize,
            })?;
        self.grid.set(coord, occupant);
        Ok(())
    }

    pub fn critter_count(&self) -> usize {
        self.grid
            .iter()
            .filter(|(_, occupant)| occupant.as_critter().is_some())
            .count()
    }

    /// Every critter with its current coordinate, in scan order
    pub fn critter_positions(&self) -> Vec<(CritterId, Coordinate)> {
        self.grid
            .iter()
            .filter_map(|(coord, occupant)| {
                occupant.as_critter().map(|critter| (critter.id(), coord))
            })
            .collect()
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render(&self.grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_layout_counts_critters() {
        let world =
            World::from_layout(&["#o#", "# #", "#o#"], Legend::standard(), 7).unwrap();
        assert_eq!(world.critter_count(), 2);
        assert_eq!(world.current_turn(), 0);

        let positions = world.critter_positions();
        assert_eq!(
            positions,
            vec![
                (CritterId(0), Coordinate::new(1, 0)),
                (CritterId(1), Coordinate::new(1, 2)),
            ]
        );
    }

    #[test]
    fn test_occupant_rejects_out_of_bounds() {
        let world = World::from_layout(&["o"], Legend::standard(), 7).unwrap();
        assert!(world.occupant(Coordinate::new(0, 0)).is_ok());
        assert!(matches!(
            world.occupant(Coordinate::new(-1, 0)),
            Err(WorldError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_spawn_requires_empty_cell() {
        let mut world = World::from_layout(&["o "], Legend::standard(), 7).unwrap();
        assert!(matches!(
            world.spawn(Coordinate::new(0, 0), 'o'),
            Err(WorldError::CellOccupied { .. })
        ));

        world.spawn(Coordinate::new(1, 0), 'o').unwrap();
        assert_eq!(world.critter_count(), 2);
        // Ids keep counting up from the ones minted at load time.
        let ids: Vec<_> = world.critter_positions().iter().map(|(id, _)| *id).collect();
        assert!(ids.contains(&CritterId(1)));
    }

    #[test]
    fn test_spawn_rejects_unknown_glyph() {
        let mut world = World::from_layout(&[" "], Legend::standard(), 7).unwrap();
        assert!(matches!(
            world.spawn(Coordinate::new(0, 0), '?'),
            Err(WorldError::UnknownGlyph { glyph: '?', .. })
        ));
    }

    #[test]
    fn test_display_matches_layout() {
        let world = World::from_layout(&["#o", " #"], Legend::standard(), 7).unwrap();
        assert_eq!(world.to_string(), "#o\n #\n");
    }
}
