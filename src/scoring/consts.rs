/// Distance buckets as `(exclusive upper bound in meters, base points)`,
/// checked in ascending order.
pub const SCORE_BUCKETS: [(f64, u64); 4] = [(10.0, 100), (30.0, 75), (60.0, 50), (100.0, 25)];

/// Bonus points per streak step past the first scoring round.
pub const STREAK_BONUS_STEP: u64 = 25;
