// Game timing constants
pub const TICK_INTERVAL_MS: u64 = 50;
pub const POLL_INTERVAL_MS: u64 = 25;
