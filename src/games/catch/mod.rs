//! Catch minigame: grab the falling stars, avoid the bombs.

pub mod logic;
pub mod types;

pub use logic::CatchInput;
pub use types::{CatchDifficulty, CatchGame};
