//! Grid occupants: walls and critters

use std::fmt;

use crate::core::types::CritterId;
use crate::entity::behavior::Behavior;

/// A moving occupant with decision capability
pub struct Critter {
    id: CritterId,
    glyph: char,
    behavior: Box<dyn Behavior>,
}

impl Critter {
    pub fn new(id: CritterId, glyph: char, behavior: Box<dyn Behavior>) -> Self {
        Self { id, glyph, behavior }
    }

    pub fn id(&self) -> CritterId {
        self.id
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    pub fn behavior_mut(&mut self) -> &mut dyn Behavior {
        self.behavior.as_mut()
    }
}

impl fmt::Debug for Critter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Critter")
            .field("id", &self.id)
            .field("glyph", &self.glyph)
            .finish_non_exhaustive()
    }
}

/// Anything that can occupy a grid cell
///
/// Every occupant records the layout character that produced it, so the
/// renderer can reproduce the original text.
#[derive(Debug)]
pub enum Occupant {
    /// Immovable, inert obstacle; never acts
    Wall { glyph: char },
    /// Autonomous agent
    Critter(Critter),
}

impl Occupant {
    /// The character this occupant was built from
    pub fn glyph(&self) -> char {
        match self {
            Occupant::Wall { glyph } => *glyph,
            Occupant::Critter(critter) => critter.glyph(),
        }
    }

    /// Decision capability, if any
    ///
    /// The scheduler selects actors through this probe; occupants without
    /// the capability are passively skipped.
    pub fn as_critter(&self) -> Option<&Critter> {
        match self {
            Occupant::Critter(critter) => Some(critter),
            Occupant::Wall { .. } => None,
        }
    }

    pub fn as_critter_mut(&mut self) -> Option<&mut Critter> {
        match self {
            Occupant::Critter(critter) => Some(critter),
            Occupant::Wall { .. } => None,
        }
    }
}
