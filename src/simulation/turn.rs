//! Turn scheduler and movement resolution
//!
//! One turn visits the grid's cells in increasing linear-index order and
//! lets each critter act exactly once, even though the grid mutates
//! mid-turn: a critter that already moved ahead of the scan is recognized
//! by id and skipped when re-encountered.

use crate::core::types::{Coordinate, CritterId};
use crate::entity::behavior::Action;
use crate::entity::occupant::{Critter, Occupant};
use crate::simulation::view::View;
use crate::spatial::direction::Direction;
use crate::world::World;

/// What happened to one critter during a turn
///
/// Returned by `run_turn` for the driver's log and for tests asserting
/// scheduling behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    /// The critter stepped into an open cell
    Moved {
        critter: CritterId,
        from: Coordinate,
        to: Coordinate,
    },
    /// The move targeted a wall, an occupied cell, or the world edge
    Blocked {
        critter: CritterId,
        at: Coordinate,
        toward: Direction,
    },
    /// The critter declared a non-move intent
    Waited { critter: CritterId, at: Coordinate },
}

/// Run a single turn
///
/// Every critter present at turn start acts exactly once; walls (and any
/// occupant without decision capability) are passively skipped. Returns
/// one event per acting critter, in scheduling order.
pub fn run_turn(world: &mut World) -> Vec<TurnEvent> {
    world.acted.clear();
    let mut events = Vec::new();

    for index in 0..world.grid.len() {
        let Some(id) = world
            .grid
            .at_index(index)
            .and_then(Occupant::as_critter)
            .map(Critter::id)
        else {
            continue;
        };
        // insert returns false for a critter relocated here earlier this turn
        if !world.acted.insert(id) {
            continue;
        }

        let origin = world.grid.coord_of(index);
        if let Some(event) = let_act(world, origin) {
            tracing::trace!(?event, "action resolved");
            events.push(event);
        }
    }

    world.current_turn += 1;
    let moved = events
        .iter()
        .filter(|event| matches!(event, TurnEvent::Moved { .. }))
        .count();
    tracing::debug!(
        turn = world.current_turn,
        acted = events.len(),
        moved,
        "turn complete"
    );
    events
}

/// Let the critter at `origin` act, then resolve its intent
///
/// The movement rule: a move lands only on an in-bounds empty cell;
/// anything else (and any non-move intent) leaves the critter where it
/// was. Malformed intent is dropped silently, never raised.
fn let_act(world: &mut World, origin: Coordinate) -> Option<TurnEvent> {
    let mut critter = match world.grid.take(origin) {
        Some(Occupant::Critter(critter)) => critter,
        Some(other) => {
            world.grid.set(origin, other);
            return None;
        }
        None => return None,
    };

    let action = {
        let view = View::new(&world.grid, origin);
        critter.behavior_mut().act(&view, &mut world.rng)
    };

    let id = critter.id();
    match action {
        Action::Move(direction) => {
            let dest = origin + direction.offset();
            if world.grid.is_inside(dest) && world.grid.get(dest).is_none() {
                world.grid.set(dest, Occupant::Critter(critter));
                Some(TurnEvent::Moved {
                    critter: id,
                    from: origin,
                    to: dest,
                })
            } else {
                world.grid.set(origin, Occupant::Critter(critter));
                Some(TurnEvent::Blocked {
                    critter: id,
                    at: origin,
                    toward: direction,
                })
            }
        }
        Action::Wait => {
            world.grid.set(origin, Occupant::Critter(critter));
            Some(TurnEvent::Waited {
                critter: id,
                at: origin,
            })
        }
    }
}
