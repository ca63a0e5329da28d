use crate::game::models::{GameSession, GameSnapshot, GuessError, RoundOutcome};
use crate::map::models::LatLng;
use crate::storage::interface::ScoreRepo;
use crate::storage::scores::HashMapScoresStorage;
use crate::submissions::models::Submission;
use rand::{distributions::Alphanumeric, Rng};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::AbortHandle;

/// In-flight game sessions. Purely in-memory: a session disappears when the
/// player leaves, and only its final score outlives it.
///
/// Every accessor takes the calling player's public ID and treats sessions
/// owned by anyone else as nonexistent, so a player can neither read nor
/// play nor discard another player's game.
#[derive(Clone, Default)]
pub struct HashMapGamesStorage {
    storage: Arc<RwLock<HashMap<String, GameSession>>>,
}

impl HashMapGamesStorage {
    /// Creates a session and arms its countdown task. `scores` is handed to
    /// the countdown so a game that times out on its last round still gets
    /// its final score persisted.
    pub async fn create(
        &self,
        questions: Vec<Submission>,
        player_public_id: String,
        scores: HashMapScoresStorage,
    ) -> (String, GameSnapshot) {
        let game_id = generate_game_id();
        let session = GameSession::new(questions, player_public_id);
        let snapshot = session.snapshot();
        let mut storage_guard = self.storage.write().await;
        storage_guard.insert(game_id.clone(), session);
        let timer = self.spawn_countdown(&game_id, scores);
        if let Some(session) = storage_guard.get_mut(&game_id) {
            session.set_timer(timer);
        }
        (game_id, snapshot)
    }

    pub async fn snapshot(&self, game_id: &str, player_public_id: &str) -> Option<GameSnapshot> {
        self.storage
            .read()
            .await
            .get(game_id)
            .filter(|session| session.player_public_id() == player_public_id)
            .map(GameSession::snapshot)
    }

    pub async fn submit_guess(
        &self,
        game_id: &str,
        player_public_id: &str,
        guess: LatLng,
    ) -> Result<RoundOutcome, GuessError> {
        let mut storage_guard = self.storage.write().await;
        let session = storage_guard
            .get_mut(game_id)
            .ok_or(GuessError::GameNotFound)?;
        if session.player_public_id() != player_public_id {
            return Err(GuessError::GameNotFound);
        }
        let outcome = session.submit_guess(guess)?;
        if outcome.finished {
            session.cancel_timer();
        }
        Ok(outcome)
    }

    pub async fn current_submission_id(
        &self,
        game_id: &str,
        player_public_id: &str,
    ) -> Result<u64, GuessError> {
        let storage_guard = self.storage.read().await;
        let session = storage_guard.get(game_id).ok_or(GuessError::GameNotFound)?;
        if session.player_public_id() != player_public_id {
            return Err(GuessError::GameNotFound);
        }
        session
            .current_submission_id()
            .ok_or(GuessError::GameAlreadyFinished)
    }

    /// Drops a session and cancels its countdown. Returns `false` when no
    /// such session exists or when it belongs to another player.
    pub async fn remove(&self, game_id: &str, player_public_id: &str) -> bool {
        let mut storage_guard = self.storage.write().await;
        match storage_guard.get(game_id) {
            Some(session) if session.player_public_id() == player_public_id => {
                session.cancel_timer();
                storage_guard.remove(game_id);
                true
            }
            _ => false,
        }
    }

    /// One countdown task per session. It decrements the authoritative
    /// countdown once a second and fires the zero-score expiry when it hits
    /// zero; a guess resets the countdown under the same lock, so a round
    /// can never expire twice. The task exits as soon as the session is
    /// finished or gone.
    fn spawn_countdown(&self, game_id: &str, scores: HashMapScoresStorage) -> AbortHandle {
        let storage_handle = self.storage.clone();
        let game_id = game_id.to_string();
        let countdown = tokio::spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(1)).await;
                let mut storage_guard = storage_handle.write().await;
                let Some(session) = storage_guard.get_mut(&game_id) else {
                    return;
                };
                if session.is_finished() {
                    return;
                }
                if session.tick() > 0 {
                    continue;
                }
                let outcome = session.expire_round();
                tracing::info!(game_id = %game_id, "Round timed out without a guess.");
                if !outcome.finished {
                    continue;
                }
                let player = session.player_public_id().to_string();
                let final_score = session.score();
                drop(storage_guard);
                scores.save(&player, final_score).await;
                tracing::info!(
                    game_id = %game_id,
                    player = %player,
                    final_score,
                    "Game finished because its last round timed out.",
                );
                return;
            }
        });
        countdown.abort_handle()
    }
}

fn generate_game_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(10)
        .map(char::from)
        .collect()
}
