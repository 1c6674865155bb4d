//! Critter decision behaviors

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::simulation::view::{View, EMPTY_GLYPH};
use crate::spatial::direction::Direction;

/// An agent's declared intent for the current turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Step one cell in the given direction
    Move(Direction),
    /// Stay put
    ///
    /// The scheduler treats every non-move intent as a no-op, so adding
    /// action kinds never requires engine changes.
    Wait,
}

/// Decision capability of a critter
///
/// A behavior perceives the world only through the view it is handed and
/// may update its own state (e.g. a stored heading). The scheduler
/// tolerates whatever comes back: illegal or unsupported intents resolve
/// to a no-op, never an error.
pub trait Behavior {
    fn act(&mut self, view: &View<'_>, rng: &mut dyn RngCore) -> Action;
}

/// Moves in a straight line, re-picking a random open heading when blocked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BounceBehavior {
    direction: Direction,
}

impl BounceBehavior {
    /// Start with a uniformly random heading
    pub fn random(rng: &mut dyn RngCore) -> Self {
        let direction = Direction::ALL
            .choose(rng)
            .copied()
            .unwrap_or(Direction::South);
        Self { direction }
    }

    /// Start with a fixed heading
    pub fn heading(direction: Direction) -> Self {
        Self { direction }
    }

    /// Current heading (last intent / next candidate)
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Factory for legend entries
    pub fn spawn(rng: &mut dyn RngCore) -> Box<dyn Behavior> {
        Box::new(Self::random(rng))
    }
}

impl Behavior for BounceBehavior {
    fn act(&mut self, view: &View<'_>, rng: &mut dyn RngCore) -> Action {
        if view.look(self.direction) != EMPTY_GLYPH {
            // South keeps the heading defined even when fully enclosed; the
            // scheduler drops the resulting illegal move.
            self.direction = view.find(EMPTY_GLYPH, rng).unwrap_or(Direction::South);
        }
        Action::Move(self.direction)
    }
}
