use crate::scores::models::LeaderboardRow;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub error: bool,
    pub rows: Vec<LeaderboardRow>,
}
