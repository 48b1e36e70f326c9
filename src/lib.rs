//! Arcade - Terminal Mini-Game Collection
//!
//! Three small games behind one menu: Tic-Tac-Toe, Meteor Dodge, and Star
//! Catcher. Game logic lives under [`games`] and never touches the terminal,
//! so tests can drive it tick by tick; the binary wires it to a ratatui
//! frontend.

pub mod constants;
pub mod games;
pub mod input;
pub mod menu;
pub mod ui;

pub use constants::TICK_INTERVAL_MS;
pub use games::Screen;
