use crate::scores::models::LeaderboardRow;
use crate::storage::interface::{IScoreStorage, ScoreRepo};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory stand-in for the score-persistence boundary: every finished
/// game appends one value per player.
#[derive(Clone, Default)]
pub struct HashMapScoresStorage {
    storage: Arc<RwLock<HashMap<String, Vec<u64>>>>,
}

impl IScoreStorage for HashMapScoresStorage {}

#[async_trait]
impl ScoreRepo for HashMapScoresStorage {
    async fn save(&self, player_public_id: &str, value: u64) {
        self.storage
            .write()
            .await
            .entry(player_public_id.to_string())
            .or_default()
            .push(value);
    }

    async fn leaderboard(&self) -> Vec<LeaderboardRow> {
        let storage_guard = self.storage.read().await;
        let mut rows = storage_guard
            .iter()
            .map(|(player, values)| {
                let games_played = values.len();
                let best_score = values.iter().copied().max().unwrap_or(0);
                let average_score = values.iter().sum::<u64>() as f64 / games_played as f64;
                let scoring_games = values.iter().filter(|value| **value > 0).count();
                let accuracy_percent = scoring_games as f64 / games_played as f64 * 100.0;
                LeaderboardRow {
                    player: player.clone(),
                    best_score,
                    average_score,
                    accuracy_percent,
                    games_played,
                }
            })
            .collect::<Vec<_>>();
        rows.sort_by(|a, b| b.best_score.cmp(&a.best_score));
        rows
    }
}
