use consts::{SCORE_BUCKETS, STREAK_BONUS_STEP};
use serde::Serialize;

pub mod consts;
#[cfg(test)]
pub mod tests;

/// Points awarded for one round, together with the streak counter to carry
/// into the next round.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundScore {
    pub base_points: u64,
    pub bonus_points: u64,
    pub streak: u64,
}

impl RoundScore {
    pub fn total(&self) -> u64 {
        self.base_points + self.bonus_points
    }
}

/// Maps a guess distance to base points. Comparisons are strict `<`, so a
/// distance exactly on a bucket boundary falls into the wider bucket.
pub fn base_points(distance_meters: f64) -> u64 {
    debug_assert!(distance_meters.is_finite() && distance_meters >= 0.0);
    for (upper_bound, points) in SCORE_BUCKETS {
        if distance_meters < upper_bound {
            return points;
        }
    }
    0
}

/// Scores one round given the guess distance and the streak carried over
/// from the previous round. A scoring round extends the streak and, from
/// the second consecutive scoring round on, earns a `(streak - 1) * 25`
/// bonus; a zero round resets both.
pub fn score_round(distance_meters: f64, previous_streak: u64) -> RoundScore {
    let base_points = base_points(distance_meters);
    if base_points == 0 {
        return RoundScore {
            base_points: 0,
            bonus_points: 0,
            streak: 0,
        };
    }
    let streak = previous_streak + 1;
    let bonus_points = (streak - 1) * STREAK_BONUS_STEP;
    RoundScore {
        base_points,
        bonus_points,
        streak,
    }
}

/// The zero-score outcome of a round that timed out with no guess.
pub fn expired_round() -> RoundScore {
    RoundScore {
        base_points: 0,
        bonus_points: 0,
        streak: 0,
    }
}
