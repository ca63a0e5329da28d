use crate::map::models::LatLng;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

pub static NEXT_SUBMISSION_ID: AtomicU64 = AtomicU64::new(1);

/// One campus-location question candidate. Created by a player in the
/// `PENDING` state; only `APPROVED` submissions are eligible for game
/// rounds.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: u64,
    pub image_url: String,
    pub caption: String,
    #[serde(with = "crate::map::models::latlng_string")]
    pub location: LatLng,
    pub status: ModerationStatus,
    pub report_count: u64,
    pub reporters: Vec<String>,
    pub submitted_by: String,
}

impl Submission {
    pub fn new(image_url: String, caption: String, location: LatLng, submitted_by: String) -> Self {
        let id = NEXT_SUBMISSION_ID.fetch_add(1, Ordering::Relaxed);
        Submission {
            id,
            image_url,
            caption,
            location,
            status: ModerationStatus::Pending,
            report_count: 0,
            reporters: vec![],
            submitted_by,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModerationStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Error, PartialEq)]
pub enum ReportDeliveryError {
    #[error("submission {0} does not exist")]
    SubmissionNotFound(u64),
}
