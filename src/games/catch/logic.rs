//! Game logic for the Star Catcher minigame.

use super::types::CatchGame;
use crate::games::faller::{advance_fallers, hits_player, move_left, move_right, FallerKind};
use rand::Rng;

/// Input actions for Star Catcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchInput {
    /// Step left (Left arrow or 'a').
    MoveLeft,
    /// Step right (Right arrow or 'd').
    MoveRight,
    /// Reset the run ('r').
    Restart,
    /// Any other key.
    Other,
}

/// Process player input. Movement is ignored once the run has ended; restart
/// always works.
pub fn process_input<R: Rng>(game: &mut CatchGame, input: CatchInput, rng: &mut R) {
    match input {
        CatchInput::Restart => game.restart(rng),
        CatchInput::MoveLeft if !game.game_over => move_left(&mut game.player_x),
        CatchInput::MoveRight if !game.game_over => move_right(&mut game.player_x),
        CatchInput::MoveLeft | CatchInput::MoveRight | CatchInput::Other => {}
    }
}

/// Process one game tick: advance the fallers, then sweep them in order
/// against the player band. A caught star scores a point and is consumed; a
/// caught bomb ends the run immediately, leaving the rest of the sweep
/// untouched. Fallers that miss the player are kept unchanged.
pub fn process_tick<R: Rng>(game: &mut CatchGame, rng: &mut R) {
    if game.game_over {
        return;
    }

    advance_fallers(&mut game.fallers, &game.params, rng);

    let mut i = 0;
    while i < game.fallers.len() {
        if hits_player(&game.fallers[i], game.player_x) {
            match game.fallers[i].kind {
                FallerKind::Collectible => {
                    game.score += 1;
                    game.fallers.remove(i);
                    continue;
                }
                FallerKind::Hazard | FallerKind::Plain => {
                    game.game_over = true;
                    return;
                }
            }
        }
        i += 1;
    }
}
