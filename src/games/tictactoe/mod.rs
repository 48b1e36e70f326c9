//! Tic-tac-toe minigame: local two-player, 3x3 board.

pub mod logic;
pub mod types;

pub use logic::TicTacToeInput;
pub use types::{Player, TicTacToeGame, TicTacToeResult, GRID_SIZE};
