pub const ROUNDS_PER_GAME: usize = 10;

/// Countdown per round, in seconds.
pub const ROUND_SECONDS: u64 = 20;
