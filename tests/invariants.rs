//! Property tests for the engine's global invariants

use proptest::prelude::*;
use std::collections::HashSet;

use critter_world::core::types::CritterId;
use critter_world::simulation::turn::TurnEvent;
use critter_world::world::{Legend, World};

/// Rectangular layouts over the standard legend, biased toward open space
fn layout_strategy() -> impl Strategy<Value = Vec<String>> {
    (1usize..12, 1usize..8).prop_flat_map(|(width, height)| {
        let cell = prop::sample::select(vec![' ', ' ', ' ', '#', 'o']);
        prop::collection::vec(prop::collection::vec(cell, width), height).prop_map(|rows| {
            rows.into_iter()
                .map(|row| row.into_iter().collect::<String>())
                .collect()
        })
    })
}

fn acted_ids(events: &[TurnEvent]) -> Vec<CritterId> {
    events
        .iter()
        .map(|event| match event {
            TurnEvent::Moved { critter, .. } => *critter,
            TurnEvent::Blocked { critter, .. } => *critter,
            TurnEvent::Waited { critter, .. } => *critter,
        })
        .collect()
}

proptest! {
    /// Population never changes and everyone acts exactly once per turn.
    #[test]
    fn prop_scheduling_invariants(
        rows in layout_strategy(),
        seed in any::<u64>(),
        turns in 1usize..6,
    ) {
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
        let mut world = World::from_layout(&rows, Legend::standard(), seed).unwrap();

        let initial: HashSet<CritterId> = world
            .critter_positions()
            .iter()
            .map(|(id, _)| *id)
            .collect();

        for _ in 0..turns {
            let events = world.turn();
            let acted = acted_ids(&events);
            let distinct: HashSet<CritterId> = acted.iter().copied().collect();

            prop_assert_eq!(acted.len(), distinct.len());
            prop_assert_eq!(&distinct, &initial);
            prop_assert_eq!(world.critter_count(), initial.len());

            // One occupant per cell: every critter coordinate is distinct.
            let positions = world.critter_positions();
            let coords: HashSet<_> = positions.iter().map(|(_, coord)| *coord).collect();
            prop_assert_eq!(coords.len(), positions.len());
        }
    }

    /// Rendering and parsing are inverse, glyph for glyph.
    #[test]
    fn prop_render_parse_round_trip(
        rows in layout_strategy(),
        seed in any::<u64>(),
    ) {
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
        let world = World::from_layout(&rows, Legend::standard(), seed).unwrap();
        let rendered = world.to_string();

        let reparsed = World::from_text(&rendered, Legend::standard(), seed).unwrap();
        prop_assert_eq!(reparsed.to_string(), rendered);
    }
}
