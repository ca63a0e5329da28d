use serde::Serialize;

/// One player's aggregate standing: best final score, average over all
/// finished games, and the share of games that scored above zero.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRow {
    pub player: String,
    pub best_score: u64,
    pub average_score: f64,
    pub accuracy_percent: f64,
    pub games_played: usize,
}
