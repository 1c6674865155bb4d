//! Character legend: what each map glyph stands for

use ahash::AHashMap;
use rand::RngCore;

use crate::core::types::CritterId;
use crate::entity::behavior::{Behavior, BounceBehavior};
use crate::entity::occupant::{Critter, Occupant};

/// Behavior constructor bound to a critter glyph
pub type BehaviorFactory = fn(&mut dyn RngCore) -> Box<dyn Behavior>;

/// What a map character produces
#[derive(Clone, Copy)]
pub enum LegendEntry {
    Wall,
    Critter(BehaviorFactory),
}

/// Mapping from layout characters to occupant constructors
///
/// The blank character is not part of any legend; it always means an
/// empty cell.
#[derive(Clone)]
pub struct Legend {
    entries: AHashMap<char, LegendEntry>,
}

impl Legend {
    pub fn new() -> Self {
        Self {
            entries: AHashMap::new(),
        }
    }

    /// The classic legend: `#` walls, `o` bouncing critters
    pub fn standard() -> Self {
        let mut legend = Self::new();
        legend.insert('#', LegendEntry::Wall);
        legend.insert('o', LegendEntry::Critter(BounceBehavior::spawn));
        legend
    }

    pub fn insert(&mut self, glyph: char, entry: LegendEntry) {
        self.entries.insert(glyph, entry);
    }

    pub fn contains(&self, glyph: char) -> bool {
        self.entries.contains_key(&glyph)
    }

    /// Build the occupant for `glyph`, minting an id when one is needed
    ///
    /// Returns `None` for glyphs without a legend entry; callers turn that
    /// into their own error with position context.
    pub(crate) fn build(
        &self,
        glyph: char,
        rng: &mut dyn RngCore,
        next_id: &mut u64,
    ) -> Option<Occupant> {
        match self.entries.get(&glyph)? {
            LegendEntry::Wall => Some(Occupant::Wall { glyph }),
            LegendEntry::Critter(factory) => {
                let id = CritterId(*next_id);
                *next_id += 1;
                Some(Occupant::Critter(Critter::new(id, glyph, factory(rng))))
            }
        }
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self::new()
    }
}
