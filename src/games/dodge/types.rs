//! Dodge ("Meteor Dodge") data structures.
//!
//! A real-time minigame where the player slides along the bottom of the field
//! and weaves between falling debris. Score counts ticks survived, so it
//! grows every tick the player stays alive -- there is nothing to collect.

use super::super::faller::{spawn_faller, Faller, FallerParams, PLAYER_START_X};
use rand::Rng;

/// Difficulty levels for Meteor Dodge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DodgeDifficulty {
    Novice,
    Apprentice,
    Journeyman,
    Master,
}

difficulty_enum_impl!(DodgeDifficulty);

impl DodgeDifficulty {
    /// Rows fallen per tick.
    pub fn fall_speed(&self) -> f64 {
        match self {
            Self::Novice => 0.30,
            Self::Apprentice => 0.36,
            Self::Journeyman => 0.42,
            Self::Master => 0.50,
        }
    }

    /// Row the newest faller must pass before the next one spawns. Lower
    /// values keep more debris in the air at once.
    pub fn spawn_threshold(&self) -> f64 {
        match self {
            Self::Novice => 5.0,
            Self::Apprentice => 4.0,
            Self::Journeyman => 3.0,
            Self::Master => 2.5,
        }
    }

    /// Update-loop tuning for this difficulty. Dodge spawns plain fallers
    /// only; any contact ends the run.
    pub fn params(&self) -> FallerParams {
        FallerParams {
            fall_speed: self.fall_speed(),
            spawn_threshold: self.spawn_threshold(),
            hazard_chance: None,
        }
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct DodgeGame {
    pub difficulty: DodgeDifficulty,
    /// Falling debris, oldest first.
    pub fallers: Vec<Faller>,
    /// Column of the player's left edge.
    pub player_x: u16,
    /// Ticks survived.
    pub score: u32,
    /// Set on first contact; freezes the game until restart.
    pub game_over: bool,
    /// Cached difficulty tuning.
    pub params: FallerParams,
}

impl DodgeGame {
    /// Create a new game with one faller already in flight.
    pub fn new<R: Rng>(difficulty: DodgeDifficulty, rng: &mut R) -> Self {
        let params = difficulty.params();
        let fallers = vec![spawn_faller(&params, rng)];
        Self {
            difficulty,
            fallers,
            player_x: PLAYER_START_X,
            score: 0,
            game_over: false,
            params,
        }
    }

    /// Reset every field to its initial value, keeping the difficulty.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) {
        *self = Self::new(self.difficulty, rng);
    }
}
