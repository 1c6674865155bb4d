pub mod turn;
pub mod view;

pub use turn::{run_turn, TurnEvent};
pub use view::View;
