use crate::scores::models::LeaderboardRow;
use crate::storage::interface::ScoreRepo;
use crate::storage::scores::HashMapScoresStorage;

#[tokio::test]
async fn test_leaderboard_aggregates_per_player() {
    let scores = HashMapScoresStorage::default();
    scores.save("alice", 150).await;
    scores.save("alice", 0).await;
    scores.save("alice", 300).await;
    scores.save("bob", 100).await;

    let rows = scores.leaderboard().await;

    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0],
        LeaderboardRow {
            player: String::from("alice"),
            best_score: 300,
            average_score: 150.0,
            accuracy_percent: 2.0 / 3.0 * 100.0,
            games_played: 3,
        },
    );
    assert_eq!(
        rows[1],
        LeaderboardRow {
            player: String::from("bob"),
            best_score: 100,
            average_score: 100.0,
            accuracy_percent: 100.0,
            games_played: 1,
        },
    );
}

#[tokio::test]
async fn test_leaderboard_is_sorted_by_best_score() {
    let scores = HashMapScoresStorage::default();
    scores.save("low", 25).await;
    scores.save("high", 2000).await;
    scores.save("mid", 500).await;

    let rows = scores.leaderboard().await;

    let players = rows.iter().map(|row| row.player.as_str()).collect::<Vec<_>>();
    assert_eq!(players, vec!["high", "mid", "low"]);
}

#[tokio::test]
async fn test_empty_leaderboard() {
    let scores = HashMapScoresStorage::default();

    assert!(scores.leaderboard().await.is_empty());
}
