//! Maps crossterm key events onto per-game inputs and screen changes.

use crate::games::{catch, dodge, tictactoe};
use crate::games::{CatchDifficulty, DodgeDifficulty, Screen, TicTacToeGame};
use crate::menu::{MenuEntry, MenuState};
use crossterm::event::KeyCode;
use rand::Rng;

/// Result of handling one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep the main loop running.
    Continue,
    /// Leave the application.
    Quit,
}

/// Main key dispatcher. Esc backs out of a game to the menu; 'q' on the menu
/// quits. Everything else is translated into the active game's input enum.
pub fn handle_key<R: Rng>(screen: &mut Screen, code: KeyCode, rng: &mut R) -> InputResult {
    match screen {
        Screen::Menu(menu) => match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return InputResult::Quit,
            KeyCode::Up | KeyCode::Char('k') => menu.move_up(),
            KeyCode::Down | KeyCode::Char('j') => menu.move_down(),
            KeyCode::Left | KeyCode::Char('h') => menu.cycle_left(),
            KeyCode::Right | KeyCode::Char('l') => menu.cycle_right(),
            KeyCode::Enter => {
                let next = launch_selected(menu, rng);
                *screen = next;
            }
            _ => {}
        },
        Screen::TicTacToe(game) => match code {
            KeyCode::Esc => *screen = Screen::Menu(MenuState::new()),
            other => tictactoe::logic::process_input(game, map_tictactoe_key(other)),
        },
        Screen::Dodge(game) => match code {
            KeyCode::Esc => *screen = Screen::Menu(MenuState::new()),
            other => dodge::logic::process_input(game, map_dodge_key(other), rng),
        },
        Screen::Catch(game) => match code {
            KeyCode::Esc => *screen = Screen::Menu(MenuState::new()),
            other => catch::logic::process_input(game, map_catch_key(other), rng),
        },
    }
    InputResult::Continue
}

/// Build the game picked on the menu, with its chosen options.
fn launch_selected<R: Rng>(menu: &MenuState, rng: &mut R) -> Screen {
    match menu.selected_entry() {
        MenuEntry::TicTacToe => Screen::TicTacToe(TicTacToeGame::new(menu.starting_player)),
        MenuEntry::Dodge => Screen::Dodge(dodge::DodgeGame::new(
            DodgeDifficulty::from_index(menu.dodge_difficulty),
            rng,
        )),
        MenuEntry::Catch => Screen::Catch(catch::CatchGame::new(
            CatchDifficulty::from_index(menu.catch_difficulty),
            rng,
        )),
    }
}

fn map_tictactoe_key(code: KeyCode) -> tictactoe::TicTacToeInput {
    use tictactoe::TicTacToeInput;
    match code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => TicTacToeInput::CursorUp,
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => TicTacToeInput::CursorDown,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => TicTacToeInput::CursorLeft,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => TicTacToeInput::CursorRight,
        KeyCode::Enter | KeyCode::Char(' ') => TicTacToeInput::Place,
        KeyCode::Char('r') | KeyCode::Char('R') => TicTacToeInput::Restart,
        _ => TicTacToeInput::Other,
    }
}

fn map_dodge_key(code: KeyCode) -> dodge::DodgeInput {
    use dodge::DodgeInput;
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => DodgeInput::MoveLeft,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => DodgeInput::MoveRight,
        KeyCode::Char('r') | KeyCode::Char('R') => DodgeInput::Restart,
        _ => DodgeInput::Other,
    }
}

fn map_catch_key(code: KeyCode) -> catch::CatchInput {
    use catch::CatchInput;
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => CatchInput::MoveLeft,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => CatchInput::MoveRight,
        KeyCode::Char('r') | KeyCode::Char('R') => CatchInput::Restart,
        _ => CatchInput::Other,
    }
}
