//! The three mini-games: Tic-Tac-Toe, Meteor Dodge, and Star Catcher.

/// Generate the standard `ALL` and `from_index()` methods shared by the
/// four-variant difficulty enums (Novice / Apprentice / Journeyman / Master).
macro_rules! difficulty_enum_impl {
    ($name:ident) => {
        impl $name {
            pub const ALL: [$name; 4] = [
                $name::Novice,
                $name::Apprentice,
                $name::Journeyman,
                $name::Master,
            ];

            pub fn from_index(index: usize) -> Self {
                Self::ALL.get(index).copied().unwrap_or($name::Novice)
            }

            pub fn name(&self) -> &'static str {
                match self {
                    Self::Novice => "Novice",
                    Self::Apprentice => "Apprentice",
                    Self::Journeyman => "Journeyman",
                    Self::Master => "Master",
                }
            }
        }
    };
}

pub mod catch;
pub mod dodge;
pub mod faller;
pub mod tictactoe;

pub use catch::{CatchDifficulty, CatchGame};
pub use dodge::{DodgeDifficulty, DodgeGame};
pub use faller::{Faller, FallerKind};
pub use tictactoe::{Player, TicTacToeGame, TicTacToeResult};

use crate::menu::MenuState;

/// What is currently on screen. Exactly one game is ever active; leaving a
/// scene drops its state, so a stale tick can never touch a dead game.
#[derive(Debug, Clone)]
pub enum Screen {
    Menu(MenuState),
    TicTacToe(TicTacToeGame),
    Dodge(DodgeGame),
    Catch(CatchGame),
}
