use crate::app_context::AppContext;
use crate::scores::responses::LeaderboardResponse;
use crate::storage::interface::ScoreRepo;
use crate::storage::submissions::HashMapSubmissionsStorage;
use axum::extract::State;
use axum::response::Json;

/// Publicly readable; no passcode required.
#[axum::debug_handler]
pub async fn leaderboard(
    State(app_context): State<AppContext<HashMapSubmissionsStorage>>,
) -> Json<LeaderboardResponse> {
    let rows = app_context.scores.leaderboard().await;
    Json(LeaderboardResponse { error: false, rows })
}
