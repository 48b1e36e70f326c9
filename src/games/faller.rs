//! Shared falling-object core used by the Dodge and Catch games.
//!
//! Both games keep an ordered sequence of fallers (oldest first), advance it
//! once per tick, and test each faller's box against the player band near the
//! field floor. The outcome of a hit differs per game and lives in each
//! game's `logic` module.

use rand::Rng;

/// Play field dimensions in terminal cells.
pub const FIELD_WIDTH: u16 = 40;
pub const FIELD_HEIGHT: u16 = 20;

/// Faller box dimensions.
pub const FALLER_WIDTH: u16 = 3;
pub const FALLER_HEIGHT: u16 = 1;

/// Player box dimensions.
pub const PLAYER_WIDTH: u16 = 5;
pub const PLAYER_HEIGHT: u16 = 1;

/// Rows of clearance between the player band and the field floor.
pub const FLOOR_MARGIN: u16 = 1;

/// Top row of the player band.
pub const PLAYER_ROW: u16 = FIELD_HEIGHT - PLAYER_HEIGHT - FLOOR_MARGIN;

/// Centered starting column for the player's left edge.
pub const PLAYER_START_X: u16 = (FIELD_WIDTH - PLAYER_WIDTH) / 2;

/// Columns moved per left/right command.
pub const PLAYER_STEP: u16 = 2;

/// What touching a faller does to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallerKind {
    /// Dodge game: any contact ends the run.
    Plain,
    /// Catch game: contact scores a point and consumes the faller.
    Collectible,
    /// Catch game: contact ends the run.
    Hazard,
}

/// A single falling object. `x` is fixed at spawn; `y` only ever grows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Faller {
    pub kind: FallerKind,
    /// Column of the faller's left edge.
    pub x: u16,
    /// Row of the faller's top edge. Kept as a float so per-tick fall speeds
    /// below one row stay smooth; negative while still above the field.
    pub y: f64,
}

/// Per-difficulty tuning for the update loop.
#[derive(Debug, Clone, Copy)]
pub struct FallerParams {
    /// Rows added to every faller's `y` each tick.
    pub fall_speed: f64,
    /// A new faller spawns once the last-appended one has fallen past this row.
    pub spawn_threshold: f64,
    /// Probability that a spawned faller is a hazard; the rest are
    /// collectibles. `None` spawns plain fallers only (dodge game).
    pub hazard_chance: Option<f64>,
}

/// Spawn one faller just above the field at a random column.
pub fn spawn_faller<R: Rng>(params: &FallerParams, rng: &mut R) -> Faller {
    let kind = match params.hazard_chance {
        Some(chance) if rng.gen::<f64>() < chance => FallerKind::Hazard,
        Some(_) => FallerKind::Collectible,
        None => FallerKind::Plain,
    };
    Faller {
        kind,
        x: rng.gen_range(0..=FIELD_WIDTH - FALLER_WIDTH),
        y: -(FALLER_HEIGHT as f64),
    }
}

/// Advance the faller sequence by one tick: move every faller down by the
/// fall speed, append a fresh spawn once the newest faller has cleared the
/// spawn threshold, and drop fallers that have reached the floor.
///
/// The spawn check looks only at the last element, so the sequence must stay
/// in insertion order. This keeps at most one faller near the top of the
/// field at a time, producing a steady trickle rather than bursts.
pub fn advance_fallers<R: Rng>(fallers: &mut Vec<Faller>, params: &FallerParams, rng: &mut R) {
    for faller in fallers.iter_mut() {
        faller.y += params.fall_speed;
    }

    let needs_spawn = match fallers.last() {
        Some(last) => last.y > params.spawn_threshold,
        None => true,
    };
    if needs_spawn {
        let faller = spawn_faller(params, rng);
        fallers.push(faller);
    }

    fallers.retain(|f| f.y < FIELD_HEIGHT as f64);
}

/// Axis-aligned overlap test between a faller and the player band.
pub fn hits_player(faller: &Faller, player_x: u16) -> bool {
    let horizontal = (faller.x as i32) < player_x as i32 + PLAYER_WIDTH as i32
        && faller.x as i32 + FALLER_WIDTH as i32 > player_x as i32;

    let band_top = PLAYER_ROW as f64;
    let band_bottom = (PLAYER_ROW + PLAYER_HEIGHT) as f64;
    let vertical = faller.y < band_bottom && faller.y + FALLER_HEIGHT as f64 > band_top;

    horizontal && vertical
}

/// Step the player one command to the left, clamped to the field edge.
pub fn move_left(player_x: &mut u16) {
    *player_x = player_x.saturating_sub(PLAYER_STEP);
}

/// Step the player one command to the right, clamped to the field edge.
pub fn move_right(player_x: &mut u16) {
    *player_x = (*player_x + PLAYER_STEP).min(FIELD_WIDTH - PLAYER_WIDTH);
}
