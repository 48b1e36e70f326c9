//! Game logic for the Meteor Dodge minigame.

use super::types::DodgeGame;
use crate::games::faller::{advance_fallers, hits_player, move_left, move_right};
use rand::Rng;

/// Input actions for Meteor Dodge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DodgeInput {
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
pub fn process_input<R: Rng>(game: &mut DodgeGame, input: DodgeInput, rng: &mut R) {
    match input {
        DodgeInput::Restart => game.restart(rng),
        DodgeInput::MoveLeft if !game.game_over => move_left(&mut game.player_x),
        DodgeInput::MoveRight if !game.game_over => move_right(&mut game.player_x),
        DodgeInput::MoveLeft | DodgeInput::MoveRight | DodgeInput::Other => {}
    }
}

/// Process one game tick: advance the debris, then check the player band.
/// Any overlap ends the run; a clean tick scores one point, so the score is
/// exactly the number of ticks survived.
pub fn process_tick<R: Rng>(game: &mut DodgeGame, rng: &mut R) {
    if game.game_over {
        return;
    }

    advance_fallers(&mut game.fallers, &game.params, rng);

    if game
        .fallers
        .iter()
        .any(|f| hits_player(f, game.player_x))
    {
        game.game_over = true;
    } else {
        game.score += 1;
    }
}
