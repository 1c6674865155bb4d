//! Parse character layouts into occupancy grids

use rand::RngCore;

use crate::core::error::{Result, WorldError};
use crate::core::types::Coordinate;
use crate::entity::occupant::Occupant;
use crate::simulation::view::EMPTY_GLYPH;
use crate::spatial::grid::Grid;
use crate::world::legend::Legend;

/// Translate a rectangular character layout into a grid
///
/// Each character goes through the legend; the blank character maps to no
/// occupant. All rows must be the same width.
pub fn parse_layout(
    rows: &[&str],
    legend: &Legend,
    rng: &mut dyn RngCore,
    next_id: &mut u64,
) -> Result<Grid<Occupant>> {
    let height = rows.len();
    if height == 0 {
        return Err(WorldError::EmptyLayout);
    }
    let width = rows[0].chars().count();
    if width == 0 {
        return Err(WorldError::EmptyLayout);
    }

    let mut grid = Grid::new(width, height);
    for (y, row) in rows.iter().enumerate() {
        let found = row.chars().count();
        if found != width {
            return Err(WorldError::RaggedRow {
                line: y,
                expected: width,
                found,
            });
        }
        for (x, glyph) in row.chars().enumerate() {
            if glyph == EMPTY_GLYPH {
                continue;
            }
            let occupant = legend
                .build(glyph, rng, next_id)
                .ok_or(WorldError::UnknownGlyph { glyph, x, y })?;
            grid.set(Coordinate::new(x as i32, y as i32), occupant);
        }
    }
    Ok(grid)
}
