//! Game picker state: which game is highlighted and the per-game options
//! (difficulty for the action games, starting player for tic-tac-toe).

use crate::games::{CatchDifficulty, DodgeDifficulty, Player};

/// The menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    TicTacToe,
    Dodge,
    Catch,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 3] = [MenuEntry::TicTacToe, MenuEntry::Dodge, MenuEntry::Catch];

    pub fn title(&self) -> &'static str {
        match self {
            Self::TicTacToe => "Tic-Tac-Toe",
            Self::Dodge => "Meteor Dodge",
            Self::Catch => "Star Catcher",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Self::TicTacToe => "Two players, one board, eight ways to win.",
            Self::Dodge => "Weave between the falling debris. Score is time survived.",
            Self::Catch => "Catch the stars, dodge the bombs.",
        }
    }
}

/// Menu scene state.
#[derive(Debug, Clone)]
pub struct MenuState {
    /// Index into [`MenuEntry::ALL`].
    pub selected: usize,
    /// Index into [`DodgeDifficulty::ALL`].
    pub dodge_difficulty: usize,
    /// Index into [`CatchDifficulty::ALL`].
    pub catch_difficulty: usize,
    /// Who moves first in tic-tac-toe.
    pub starting_player: Player,
}

impl MenuState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            dodge_difficulty: 0,
            catch_difficulty: 0,
            starting_player: Player::One,
        }
    }

    pub fn selected_entry(&self) -> MenuEntry {
        MenuEntry::ALL
            .get(self.selected)
            .copied()
            .unwrap_or(MenuEntry::TicTacToe)
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < MenuEntry::ALL.len() {
            self.selected += 1;
        }
    }

    /// Cycle the highlighted entry's option backwards.
    pub fn cycle_left(&mut self) {
        match self.selected_entry() {
            MenuEntry::TicTacToe => self.starting_player = self.starting_player.opponent(),
            MenuEntry::Dodge => {
                let len = DodgeDifficulty::ALL.len();
                self.dodge_difficulty = (self.dodge_difficulty + len - 1) % len;
            }
            MenuEntry::Catch => {
                let len = CatchDifficulty::ALL.len();
                self.catch_difficulty = (self.catch_difficulty + len - 1) % len;
            }
        }
    }

    /// Cycle the highlighted entry's option forwards.
    pub fn cycle_right(&mut self) {
        match self.selected_entry() {
            MenuEntry::TicTacToe => self.starting_player = self.starting_player.opponent(),
            MenuEntry::Dodge => {
                self.dodge_difficulty = (self.dodge_difficulty + 1) % DodgeDifficulty::ALL.len();
            }
            MenuEntry::Catch => {
                self.catch_difficulty = (self.catch_difficulty + 1) % CatchDifficulty::ALL.len();
            }
        }
    }

    /// Option text shown next to the highlighted entry.
    pub fn option_label(&self, entry: MenuEntry) -> String {
        match entry {
            MenuEntry::TicTacToe => format!("{} starts", self.starting_player.name()),
            MenuEntry::Dodge => DodgeDifficulty::from_index(self.dodge_difficulty)
                .name()
                .to_string(),
            MenuEntry::Catch => CatchDifficulty::from_index(self.catch_difficulty)
                .name()
                .to_string(),
        }
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_menu_defaults() {
        let menu = MenuState::new();
        assert_eq!(menu.selected_entry(), MenuEntry::TicTacToe);
        assert_eq!(menu.dodge_difficulty, 0);
        assert_eq!(menu.catch_difficulty, 0);
        assert_eq!(menu.starting_player, Player::One);
    }

    #[test]
    fn test_selection_clamped() {
        let mut menu = MenuState::new();
        menu.move_up();
        assert_eq!(menu.selected, 0);
        for _ in 0..10 {
            menu.move_down();
        }
        assert_eq!(menu.selected, MenuEntry::ALL.len() - 1);
    }

    #[test]
    fn test_cycle_difficulty_wraps() {
        let mut menu = MenuState::new();
        menu.selected = 1; // Dodge
        menu.cycle_left();
        assert_eq!(menu.dodge_difficulty, DodgeDifficulty::ALL.len() - 1);
        menu.cycle_right();
        assert_eq!(menu.dodge_difficulty, 0);
        menu.cycle_right();
        assert_eq!(menu.dodge_difficulty, 1);
    }

    #[test]
    fn test_cycle_toggles_starting_player() {
        let mut menu = MenuState::new();
        menu.cycle_right();
        assert_eq!(menu.starting_player, Player::Two);
        menu.cycle_left();
        assert_eq!(menu.starting_player, Player::One);
    }

    #[test]
    fn test_option_labels() {
        let menu = MenuState::new();
        assert_eq!(menu.option_label(MenuEntry::TicTacToe), "Player One starts");
        assert_eq!(menu.option_label(MenuEntry::Dodge), "Novice");
        assert_eq!(menu.option_label(MenuEntry::Catch), "Novice");
    }
}
