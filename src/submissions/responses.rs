use crate::submissions::models::Submission;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmissionResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SubmissionCreationError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<u64>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionCreationError {
    InvalidCoordinate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSubmissionsResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ModerationError>,
    pub submissions: Vec<Submission>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerateSubmissionResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ModerationError>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ModerationError {
    SubmissionNotFound,
    YouAreNotAnAdmin,
}
