//! Scene rendering. One render function per screen; the logic modules only
//! ever expose read-only state to these.

pub mod catch_scene;
pub mod dodge_scene;
pub mod game_common;
pub mod menu_scene;
pub mod tictactoe_scene;

use crate::games::Screen;
use ratatui::Frame;

/// Draw the active scene over the whole terminal.
pub fn draw(frame: &mut Frame, screen: &Screen) {
    let area = frame.size();
    match screen {
        Screen::Menu(menu) => menu_scene::render_menu(frame, area, menu),
        Screen::TicTacToe(game) => tictactoe_scene::render_tictactoe(frame, area, game),
        Screen::Dodge(game) => dodge_scene::render_dodge(frame, area, game),
        Screen::Catch(game) => catch_scene::render_catch(frame, area, game),
    }
}
