use crate::scores::models::LeaderboardRow;
use crate::submissions::models::{ModerationStatus, ReportDeliveryError, Submission};
use async_trait::async_trait;

/// The read/write boundary to wherever submissions actually live. The game
/// core only ever reads through it; moderation and reporting write.
pub trait ISubmissionStorage:
    SubmissionRepo + ModerationRepo + ReportRepo + Clone + Send + Sync + 'static
{
}

#[async_trait]
pub trait SubmissionRepo {
    async fn create(&self, submission: Submission) -> u64;

    async fn approved_ids(&self) -> Vec<u64>;

    /// Fetches full records for `ids`, preserving the order of `ids`.
    /// Unknown IDs are skipped.
    async fn get_ordered(&self, ids: &[u64]) -> Vec<Submission>;

    async fn all(&self) -> Vec<Submission>;
}

#[async_trait]
pub trait ModerationRepo {
    /// Returns `false` when no such submission exists.
    async fn set_status(&self, submission_id: u64, status: ModerationStatus) -> bool;

    async fn delete(&self, submission_id: u64) -> bool;

    async fn clear_reports(&self, submission_id: u64) -> bool;
}

#[async_trait]
pub trait ReportRepo {
    /// Increments the report counter and appends the reporter. Duplicate
    /// reports from the same reporter are accepted, not deduplicated.
    async fn report(&self, submission_id: u64, reporter: &str) -> Result<(), ReportDeliveryError>;
}

pub trait IScoreStorage: ScoreRepo + Clone + Send + Sync + 'static {}

#[async_trait]
pub trait ScoreRepo {
    async fn save(&self, player_public_id: &str, value: u64);

    async fn leaderboard(&self) -> Vec<LeaderboardRow>;
}
