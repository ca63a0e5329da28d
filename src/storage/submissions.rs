use crate::storage::interface::{ISubmissionStorage, ModerationRepo, ReportRepo, SubmissionRepo};
use crate::submissions::models::{ModerationStatus, ReportDeliveryError, Submission};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory stand-in for the relational store behind the submissions
/// boundary.
#[derive(Clone, Default)]
pub struct HashMapSubmissionsStorage {
    storage: Arc<RwLock<HashMap<u64, Submission>>>,
}

impl ISubmissionStorage for HashMapSubmissionsStorage {}

#[async_trait]
impl SubmissionRepo for HashMapSubmissionsStorage {
    async fn create(&self, submission: Submission) -> u64 {
        let submission_id = submission.id;
        self.storage
            .write()
            .await
            .insert(submission_id, submission);
        submission_id
    }

    async fn approved_ids(&self) -> Vec<u64> {
        self.storage
            .read()
            .await
            .values()
            .filter(|submission| submission.status == ModerationStatus::Approved)
            .map(|submission| submission.id)
            .collect()
    }

    async fn get_ordered(&self, ids: &[u64]) -> Vec<Submission> {
        let storage_guard = self.storage.read().await;
        ids.iter()
            .filter_map(|id| storage_guard.get(id).cloned())
            .collect()
    }

    async fn all(&self) -> Vec<Submission> {
        let mut submissions = self
            .storage
            .read()
            .await
            .values()
            .cloned()
            .collect::<Vec<_>>();
        submissions.sort_by_key(|submission| submission.id);
        submissions
    }
}

#[async_trait]
impl ModerationRepo for HashMapSubmissionsStorage {
    async fn set_status(&self, submission_id: u64, status: ModerationStatus) -> bool {
        match self.storage.write().await.get_mut(&submission_id) {
            Some(submission) => {
                submission.status = status;
                true
            }
            None => false,
        }
    }

    async fn delete(&self, submission_id: u64) -> bool {
        self.storage.write().await.remove(&submission_id).is_some()
    }

    async fn clear_reports(&self, submission_id: u64) -> bool {
        match self.storage.write().await.get_mut(&submission_id) {
            Some(submission) => {
                submission.report_count = 0;
                submission.reporters.clear();
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl ReportRepo for HashMapSubmissionsStorage {
    async fn report(&self, submission_id: u64, reporter: &str) -> Result<(), ReportDeliveryError> {
        match self.storage.write().await.get_mut(&submission_id) {
            Some(submission) => {
                submission.report_count += 1;
                submission.reporters.push(reporter.to_string());
                Ok(())
            }
            None => Err(ReportDeliveryError::SubmissionNotFound(submission_id)),
        }
    }
}
