//! Serialize a grid back to its textual form

use crate::core::types::Coordinate;
use crate::entity::occupant::Occupant;
use crate::simulation::view::EMPTY_GLYPH;
use crate::spatial::grid::Grid;

/// One text row per grid row, each terminated by a newline
///
/// Every occupant renders as the character that produced it, so rendering
/// is the exact inverse of `loader::parse_layout`.
pub fn render(grid: &Grid<Occupant>) -> String {
    let mut output = String::with_capacity((grid.width() + 1) * grid.height());
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let glyph = grid
                .get(Coordinate::new(x as i32, y as i32))
                .map_or(EMPTY_GLYPH, Occupant::glyph);
            output.push(glyph);
        }
        output.push('\n');
    }
    output
}
