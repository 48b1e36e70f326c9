//! Integration test: falling-object update loop
//!
//! Drives the Dodge and Catch games through their public tick/input API and
//! checks the update-loop invariants: strict descent, floor removal, the
//! steady-spawn rule, movement clamping, and the terminal game-over state.

use arcade::games::catch::{self, CatchDifficulty, CatchGame, CatchInput};
use arcade::games::dodge::{self, DodgeDifficulty, DodgeGame, DodgeInput};
use arcade::games::faller::{
    Faller, FallerKind, FIELD_HEIGHT, FIELD_WIDTH, PLAYER_ROW, PLAYER_START_X, PLAYER_WIDTH,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

// =============================================================================
// Descent and removal
// =============================================================================

#[test]
fn test_every_faller_descends_by_fall_speed_each_tick() {
    let mut rng = seeded_rng(1);
    let mut game = DodgeGame::new(DodgeDifficulty::Master, &mut rng);

    for _ in 0..200 {
        let before: Vec<Faller> = game.fallers.clone();
        dodge::logic::process_tick(&mut game, &mut rng);
        if game.game_over {
            break;
        }
        // Every faller that survived the tick either descended by exactly the
        // fall speed or is a fresh spawn sitting above the field.
        for faller in &game.fallers {
            let was_advanced = before
                .iter()
                .any(|b| b.x == faller.x && (b.y + game.params.fall_speed - faller.y).abs() < 1e-9);
            let is_fresh_spawn = faller.y < 0.0;
            assert!(was_advanced || is_fresh_spawn);
        }
    }
}

#[test]
fn test_faller_removed_exactly_at_field_height() {
    let mut rng = seeded_rng(2);
    let mut game = DodgeGame::new(DodgeDifficulty::Novice, &mut rng);

    // One faller about to cross the floor, one safely above it. Keep them off
    // the player's column so the run continues.
    game.player_x = 0;
    let deep = Faller {
        kind: FallerKind::Plain,
        x: FIELD_WIDTH - 3,
        y: FIELD_HEIGHT as f64 - game.params.fall_speed / 2.0,
    };
    let shallow = Faller {
        kind: FallerKind::Plain,
        x: FIELD_WIDTH - 3,
        y: 10.0,
    };
    game.fallers = vec![shallow, deep];

    dodge::logic::process_tick(&mut game, &mut rng);

    assert!(!game.fallers.iter().any(|f| f.y >= FIELD_HEIGHT as f64));
    assert!(game
        .fallers
        .iter()
        .any(|f| (f.y - (10.0 + game.params.fall_speed)).abs() < 1e-9));
}

#[test]
fn test_steady_spawn_never_two_fallers_near_the_top() {
    for seed in 0..5 {
        let mut rng = seeded_rng(seed);
        let mut game = CatchGame::new(CatchDifficulty::Master, &mut rng);
        // Park the player on the left edge; hits may still happen, in which
        // case the run simply freezes and the invariant holds trivially.
        game.player_x = 0;

        for _ in 0..1000 {
            catch::logic::process_tick(&mut game, &mut rng);
            let near_top = game
                .fallers
                .iter()
                .filter(|f| f.y < game.params.spawn_threshold)
                .count();
            assert!(near_top <= 1, "burst spawn with seed {}", seed);
        }
    }
}

// =============================================================================
// Player movement
// =============================================================================

#[test]
fn test_player_stays_inside_field_for_any_move_sequence() {
    let mut rng = seeded_rng(3);
    let mut game = DodgeGame::new(DodgeDifficulty::Novice, &mut rng);

    let moves = [
        DodgeInput::MoveLeft,
        DodgeInput::MoveLeft,
        DodgeInput::MoveRight,
        DodgeInput::MoveLeft,
        DodgeInput::MoveRight,
        DodgeInput::MoveRight,
    ];
    for _ in 0..50 {
        for input in moves {
            dodge::logic::process_input(&mut game, input, &mut rng);
            assert!(game.player_x <= FIELD_WIDTH - PLAYER_WIDTH);
        }
    }

    for _ in 0..100 {
        dodge::logic::process_input(&mut game, DodgeInput::MoveRight, &mut rng);
    }
    assert_eq!(game.player_x, FIELD_WIDTH - PLAYER_WIDTH);
}

// =============================================================================
// Dodge outcome policy: survival scoring
// =============================================================================

#[test]
fn test_dodge_score_equals_ticks_survived() {
    let mut rng = seeded_rng(4);
    let mut game = DodgeGame::new(DodgeDifficulty::Novice, &mut rng);

    // Novice debris starts above the field and falls 0.3 rows per tick, so
    // twenty ticks cannot reach the player band.
    for expected in 1..=20 {
        dodge::logic::process_tick(&mut game, &mut rng);
        assert!(!game.game_over);
        assert_eq!(game.score, expected);
    }
}

#[test]
fn test_dodge_collision_is_terminal_until_restart() {
    let mut rng = seeded_rng(5);
    let mut game = DodgeGame::new(DodgeDifficulty::Novice, &mut rng);
    game.fallers = vec![Faller {
        kind: FallerKind::Plain,
        x: game.player_x,
        y: PLAYER_ROW as f64 - game.params.fall_speed / 2.0,
    }];

    dodge::logic::process_tick(&mut game, &mut rng);
    assert!(game.game_over);

    let frozen = game.clone();
    for _ in 0..50 {
        dodge::logic::process_tick(&mut game, &mut rng);
        dodge::logic::process_input(&mut game, DodgeInput::MoveRight, &mut rng);
    }
    assert_eq!(game.score, frozen.score);
    assert_eq!(game.player_x, frozen.player_x);
    assert_eq!(game.fallers, frozen.fallers);

    dodge::logic::process_input(&mut game, DodgeInput::Restart, &mut rng);
    assert!(!game.game_over);
    assert_eq!(game.score, 0);
    assert_eq!(game.player_x, PLAYER_START_X);
    assert_eq!(game.fallers.len(), 1);
}

// =============================================================================
// Catch outcome policy: per-kind handling
// =============================================================================

#[test]
fn test_catch_star_scores_and_is_consumed() {
    let mut rng = seeded_rng(6);
    let mut game = CatchGame::new(CatchDifficulty::Novice, &mut rng);
    game.fallers = vec![Faller {
        kind: FallerKind::Collectible,
        x: game.player_x,
        y: PLAYER_ROW as f64 - game.params.fall_speed / 2.0,
    }];

    catch::logic::process_tick(&mut game, &mut rng);

    assert_eq!(game.score, 1);
    assert!(!game.game_over);
    assert!(!game
        .fallers
        .iter()
        .any(|f| f.kind == FallerKind::Collectible && f.y > 0.0));
}

#[test]
fn test_catch_bomb_is_terminal_until_restart() {
    let mut rng = seeded_rng(7);
    let mut game = CatchGame::new(CatchDifficulty::Novice, &mut rng);
    game.score = 5;
    game.fallers = vec![Faller {
        kind: FallerKind::Hazard,
        x: game.player_x,
        y: PLAYER_ROW as f64 - game.params.fall_speed / 2.0,
    }];

    catch::logic::process_tick(&mut game, &mut rng);
    assert!(game.game_over);
    assert_eq!(game.score, 5);

    let frozen = game.clone();
    for _ in 0..50 {
        catch::logic::process_tick(&mut game, &mut rng);
    }
    assert_eq!(game.fallers, frozen.fallers);
    assert_eq!(game.score, frozen.score);

    catch::logic::process_input(&mut game, CatchInput::Restart, &mut rng);
    assert!(!game.game_over);
    assert_eq!(game.score, 0);
    assert_eq!(game.player_x, PLAYER_START_X);
    assert_eq!(game.fallers.len(), 1);
}

// =============================================================================
// Restart from arbitrary states
// =============================================================================

#[test]
fn test_restart_restores_initial_values_from_any_state() {
    let mut rng = seeded_rng(8);
    let mut game = CatchGame::new(CatchDifficulty::Journeyman, &mut rng);

    for _ in 0..300 {
        catch::logic::process_tick(&mut game, &mut rng);
        catch::logic::process_input(&mut game, CatchInput::MoveLeft, &mut rng);
    }

    catch::logic::process_input(&mut game, CatchInput::Restart, &mut rng);

    assert_eq!(game.difficulty, CatchDifficulty::Journeyman);
    assert_eq!(game.fallers.len(), 1);
    assert!(game.fallers[0].y < 0.0);
    assert_eq!(game.player_x, PLAYER_START_X);
    assert_eq!(game.score, 0);
    assert!(!game.game_over);
}
