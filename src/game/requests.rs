use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitGuessRequest {
    /// The player's pin as `"<lat>, <lng>"`. Parsed by the handler so that
    /// a malformed pin is a user error, never a silently scored zero.
    pub guess: String,
}
