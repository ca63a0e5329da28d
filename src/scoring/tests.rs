use crate::scoring::{base_points, score_round, RoundScore};

#[test]
fn test_base_points_buckets() {
    assert_eq!(base_points(0.0), 100);
    assert_eq!(base_points(9.9), 100);
    assert_eq!(base_points(29.9), 75);
    assert_eq!(base_points(59.9), 50);
    assert_eq!(base_points(99.9), 25);
    assert_eq!(base_points(100.1), 0);
    assert_eq!(base_points(5_000.0), 0);
}

#[test]
fn test_bucket_boundaries_fall_into_the_wider_bucket() {
    assert_eq!(base_points(10.0), 75);
    assert_eq!(base_points(30.0), 50);
    assert_eq!(base_points(60.0), 25);
    assert_eq!(base_points(100.0), 0);
}

#[test]
fn test_first_scoring_round_has_no_bonus() {
    let score = score_round(5.0, 0);

    assert_eq!(
        score,
        RoundScore {
            base_points: 100,
            bonus_points: 0,
            streak: 1,
        },
    );
    assert_eq!(score.total(), 100);
}

#[test]
fn test_consecutive_scoring_rounds_grow_the_bonus() {
    let second = score_round(5.0, 1);
    let third = score_round(5.0, second.streak);

    assert_eq!(second.bonus_points, 25);
    assert_eq!(second.total(), 125);
    assert_eq!(third.bonus_points, 50);
    assert_eq!(third.total(), 150);
    assert_eq!(third.streak, 3);
}

#[test]
fn test_bonus_applies_to_lower_buckets_too() {
    let score = score_round(45.0, 3);

    assert_eq!(score.base_points, 50);
    assert_eq!(score.bonus_points, 75);
    assert_eq!(score.streak, 4);
}

#[test]
fn test_zero_round_resets_the_streak() {
    let score = score_round(500.0, 7);

    assert_eq!(
        score,
        RoundScore {
            base_points: 0,
            bonus_points: 0,
            streak: 0,
        },
    );
}
