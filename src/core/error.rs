use thiserror::Error;

use crate::core::types::Coordinate;

#[derive(Error, Debug)]
pub enum WorldError {
    #[error("Unknown direction: {0:?}")]
    UnknownDirection(String),

    #[error("Coordinate ({}, {}) outside {width}x{height} grid", .coord.x, .coord.y)]
    OutOfBounds {
        coord: Coordinate,
        width: usize,
        height: usize,
    },

    #[error("Layout has no cells")]
    EmptyLayout,

    #[error("Layout row {line} is {found} cells wide, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("No legend entry for {glyph:?} at ({x}, {y})")]
    UnknownGlyph { glyph: char, x: usize, y: usize },

    #[error("Cell ({}, {}) is already occupied", .coord.x, .coord.y)]
    CellOccupied { coord: Coordinate },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, WorldError>;
