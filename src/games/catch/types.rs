//! Catch ("Star Catcher") data structures.
//!
//! A real-time minigame where stars and bombs fall together. Catching a star
//! scores a point; catching a bomb ends the run. Stars and bombs that reach
//! the floor simply vanish.

use super::super::faller::{spawn_faller, Faller, FallerParams, PLAYER_START_X};
use rand::Rng;

/// Difficulty levels for Star Catcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchDifficulty {
    Novice,
    Apprentice,
    Journeyman,
    Master,
}

difficulty_enum_impl!(CatchDifficulty);

impl CatchDifficulty {
    /// Rows fallen per tick.
    pub fn fall_speed(&self) -> f64 {
        match self {
            Self::Novice => 0.25,
            Self::Apprentice => 0.30,
            Self::Journeyman => 0.36,
            Self::Master => 0.42,
        }
    }

    /// Row the newest faller must pass before the next one spawns.
    pub fn spawn_threshold(&self) -> f64 {
        match self {
            Self::Novice => 5.0,
            Self::Apprentice => 4.0,
            Self::Journeyman => 3.0,
            Self::Master => 2.5,
        }
    }

    /// Probability that a spawned faller is a bomb rather than a star.
    pub fn hazard_chance(&self) -> f64 {
        match self {
            Self::Novice => 0.25,
            Self::Apprentice => 0.30,
            Self::Journeyman => 0.35,
            Self::Master => 0.40,
        }
    }

    /// Update-loop tuning for this difficulty.
    pub fn params(&self) -> FallerParams {
        FallerParams {
            fall_speed: self.fall_speed(),
            spawn_threshold: self.spawn_threshold(),
            hazard_chance: Some(self.hazard_chance()),
        }
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct CatchGame {
    pub difficulty: CatchDifficulty,
    /// Falling stars and bombs, oldest first.
    pub fallers: Vec<Faller>,
    /// Column of the player's left edge.
    pub player_x: u16,
    /// Stars caught.
    pub score: u32,
    /// Set when a bomb is caught; freezes the game until restart.
    pub game_over: bool,
    /// Cached difficulty tuning.
    pub params: FallerParams,
}

impl CatchGame {
    /// Create a new game with one faller already in flight.
    pub fn new<R: Rng>(difficulty: CatchDifficulty, rng: &mut R) -> Self {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::faller::FallerKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_game_defaults() {
        let mut rng = StdRng::seed_from_u64(42);
        let game = CatchGame::new(CatchDifficulty::Novice, &mut rng);
        assert_eq!(game.difficulty, CatchDifficulty::Novice);
        assert_eq!(game.fallers.len(), 1);
        assert_ne!(game.fallers[0].kind, FallerKind::Plain);
        assert_eq!(game.player_x, PLAYER_START_X);
        assert_eq!(game.score, 0);
        assert!(!game.game_over);
    }

    #[test]
    fn test_difficulty_parameters() {
        let d = CatchDifficulty::Novice;
        assert!((d.fall_speed() - 0.25).abs() < f64::EPSILON);
        assert!((d.hazard_chance() - 0.25).abs() < f64::EPSILON);

        let d = CatchDifficulty::Master;
        assert!((d.fall_speed() - 0.42).abs() < f64::EPSILON);
        assert!((d.hazard_chance() - 0.40).abs() < f64::EPSILON);
        assert_eq!(d.params().hazard_chance, Some(0.40));
    }

    #[test]
    fn test_difficulty_from_index() {
        assert_eq!(CatchDifficulty::from_index(0), CatchDifficulty::Novice);
        assert_eq!(CatchDifficulty::from_index(1), CatchDifficulty::Apprentice);
        assert_eq!(CatchDifficulty::from_index(2), CatchDifficulty::Journeyman);
        assert_eq!(CatchDifficulty::from_index(3), CatchDifficulty::Master);
        assert_eq!(CatchDifficulty::from_index(99), CatchDifficulty::Novice);
    }

    #[test]
    fn test_restart_resets_state() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut game = CatchGame::new(CatchDifficulty::Master, &mut rng);
        game.score = 42;
        game.game_over = true;
        game.player_x = 3;

        game.restart(&mut rng);

        assert_eq!(game.difficulty, CatchDifficulty::Master);
        assert_eq!(game.fallers.len(), 1);
        assert_eq!(game.player_x, PLAYER_START_X);
        assert_eq!(game.score, 0);
        assert!(!game.game_over);
    }
}
