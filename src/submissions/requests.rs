use crate::submissions::models::ModerationStatus;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmissionRequest {
    pub image_url: String,
    pub caption: String,
    /// `"<lat>, <lng>"`, parsed and validated by the handler.
    pub location: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerateSubmissionRequest {
    pub status: ModerationStatus,
}
