use crate::app_context::AppContext;
use crate::auth::extractors::User;
use crate::map::models::LatLng;
use crate::storage::interface::{ModerationRepo, SubmissionRepo};
use crate::storage::submissions::HashMapSubmissionsStorage;
use crate::submissions::models::Submission;
use crate::submissions::requests::{CreateSubmissionRequest, ModerateSubmissionRequest};
use crate::submissions::responses::{
    CreateSubmissionResponse, ListSubmissionsResponse, ModerateSubmissionResponse, ModerationError,
    SubmissionCreationError,
};
use axum::extract::{Path, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn create(
    user: User,
    State(app_context): State<AppContext<HashMapSubmissionsStorage>>,
    Json(request): Json<CreateSubmissionRequest>,
) -> Json<CreateSubmissionResponse> {
    let location = match request.location.parse::<LatLng>() {
        Ok(location) => location,
        Err(err) => {
            tracing::warn!(
                submitted_by = user.public_id,
                "Rejected a submission with a bad location: {err}.",
            );
            return Json(CreateSubmissionResponse {
                error: true,
                error_code: Some(SubmissionCreationError::InvalidCoordinate),
                submission_id: None,
            });
        }
    };
    let submission = Submission::new(
        request.image_url,
        request.caption,
        location,
        user.public_id,
    );
    let submission_id = app_context.submissions.create(submission).await;
    Json(CreateSubmissionResponse {
        error: false,
        error_code: None,
        submission_id: Some(submission_id),
    })
}

#[axum::debug_handler]
pub async fn list(
    user: User,
    State(app_context): State<AppContext<HashMapSubmissionsStorage>>,
) -> Json<ListSubmissionsResponse> {
    if !user.is_admin {
        return Json(ListSubmissionsResponse {
            error: true,
            error_code: Some(ModerationError::YouAreNotAnAdmin),
            submissions: vec![],
        });
    }
    let submissions = app_context.submissions.all().await;
    Json(ListSubmissionsResponse {
        error: false,
        error_code: None,
        submissions,
    })
}

#[axum::debug_handler]
pub async fn moderate(
    user: User,
    Path(submission_id): Path<u64>,
    State(app_context): State<AppContext<HashMapSubmissionsStorage>>,
    Json(request): Json<ModerateSubmissionRequest>,
) -> Json<ModerateSubmissionResponse> {
    if !user.is_admin {
        return Json(ModerateSubmissionResponse {
            error: true,
            error_code: Some(ModerationError::YouAreNotAnAdmin),
        });
    }
    let updated = app_context
        .submissions
        .set_status(submission_id, request.status)
        .await;
    if !updated {
        return Json(ModerateSubmissionResponse {
            error: true,
            error_code: Some(ModerationError::SubmissionNotFound),
        });
    }
    tracing::info!(
        submission_id,
        status = ?request.status,
        moderator = user.public_id,
        "Moderated a submission.",
    );
    Json(ModerateSubmissionResponse {
        error: false,
        error_code: None,
    })
}

#[axum::debug_handler]
pub async fn delete(
    user: User,
    Path(submission_id): Path<u64>,
    State(app_context): State<AppContext<HashMapSubmissionsStorage>>,
) -> Json<ModerateSubmissionResponse> {
    if !user.is_admin {
        return Json(ModerateSubmissionResponse {
            error: true,
            error_code: Some(ModerationError::YouAreNotAnAdmin),
        });
    }
    let deleted = app_context.submissions.delete(submission_id).await;
    if !deleted {
        return Json(ModerateSubmissionResponse {
            error: true,
            error_code: Some(ModerationError::SubmissionNotFound),
        });
    }
    Json(ModerateSubmissionResponse {
        error: false,
        error_code: None,
    })
}

#[axum::debug_handler]
pub async fn clear_reports(
    user: User,
    Path(submission_id): Path<u64>,
    State(app_context): State<AppContext<HashMapSubmissionsStorage>>,
) -> Json<ModerateSubmissionResponse> {
    if !user.is_admin {
        return Json(ModerateSubmissionResponse {
            error: true,
            error_code: Some(ModerationError::YouAreNotAnAdmin),
        });
    }
    let cleared = app_context.submissions.clear_reports(submission_id).await;
    if !cleared {
        return Json(ModerateSubmissionResponse {
            error: true,
            error_code: Some(ModerationError::SubmissionNotFound),
        });
    }
    Json(ModerateSubmissionResponse {
        error: false,
        error_code: None,
    })
}
