//! Dodge minigame: survive the falling debris as long as possible.

pub mod logic;
pub mod types;

pub use logic::DodgeInput;
pub use types::{DodgeDifficulty, DodgeGame};
