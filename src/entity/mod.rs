pub mod behavior;
pub mod occupant;

pub use behavior::{Action, Behavior, BounceBehavior};
pub use occupant::{Critter, Occupant};
