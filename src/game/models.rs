use crate::game::consts::ROUND_SECONDS;
use crate::map::{self, models::LatLng};
use crate::scoring::{self, RoundScore};
use crate::submissions::models::Submission;
use serde::Serialize;
use thiserror::Error;
use tokio::task::AbortHandle;

/// One player's in-flight game. Lives only in memory; everything except the
/// final score is discarded when the session ends.
pub struct GameSession {
    player_public_id: String,
    questions: Vec<Submission>,
    current_round: usize,
    countdown_seconds: u64,
    score: u64,
    streak: u64,
    finished: bool,
    timer: Option<AbortHandle>,
}

impl GameSession {
    /// `questions` must be non-empty; the round selector guarantees that.
    pub fn new(questions: Vec<Submission>, player_public_id: String) -> Self {
        debug_assert!(!questions.is_empty());
        GameSession {
            player_public_id,
            questions,
            current_round: 0,
            countdown_seconds: ROUND_SECONDS,
            score: 0,
            streak: 0,
            finished: false,
            timer: None,
        }
    }

    pub fn player_public_id(&self) -> &str {
        &self.player_public_id
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// ID of the submission behind the current question, `None` once the
    /// game is finished.
    pub fn current_submission_id(&self) -> Option<u64> {
        if self.finished {
            return None;
        }
        Some(self.questions[self.current_round].id)
    }

    /// Scores the player's pin against the current round's target and
    /// advances to the next round (or finishes the game).
    pub fn submit_guess(&mut self, guess: LatLng) -> Result<RoundOutcome, GuessError> {
        if self.finished {
            return Err(GuessError::GameAlreadyFinished);
        }
        let target = self.questions[self.current_round].location;
        let distance_meters = map::distance_meters(guess, target);
        let round_score = scoring::score_round(distance_meters, self.streak);
        Ok(self.apply(Some(distance_meters), round_score))
    }

    /// The countdown ran out with no guess: an automatic zero-score round.
    /// No distance is computed, the streak resets, and the game advances
    /// exactly as it would after a guess.
    pub fn expire_round(&mut self) -> RoundOutcome {
        debug_assert!(!self.finished);
        self.apply(None, scoring::expired_round())
    }

    /// Decrements the countdown and returns the seconds left.
    pub fn tick(&mut self) -> u64 {
        self.countdown_seconds = self.countdown_seconds.saturating_sub(1);
        self.countdown_seconds
    }

    pub fn set_timer(&mut self, timer: AbortHandle) {
        self.timer = Some(timer);
    }

    pub fn cancel_timer(&self) {
        if let Some(timer) = &self.timer {
            timer.abort();
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let question = if self.finished {
            None
        } else {
            let submission = &self.questions[self.current_round];
            Some(QuestionView {
                image_url: submission.image_url.clone(),
                hint: submission.caption.clone(),
            })
        };
        GameSnapshot {
            current_round: self.current_round,
            rounds_total: self.questions.len(),
            countdown_seconds: self.countdown_seconds,
            score: self.score,
            streak: self.streak,
            finished: self.finished,
            question,
        }
    }

    fn apply(&mut self, distance_meters: Option<f64>, round_score: RoundScore) -> RoundOutcome {
        self.streak = round_score.streak;
        self.score += round_score.total();
        if self.current_round + 1 < self.questions.len() {
            self.current_round += 1;
            self.countdown_seconds = ROUND_SECONDS;
        } else {
            self.finished = true;
        }
        RoundOutcome {
            distance_meters,
            base_points: round_score.base_points,
            bonus_points: round_score.bonus_points,
            round_points: round_score.total(),
            streak: self.streak,
            total_score: self.score,
            finished: self.finished,
        }
    }
}

/// What one round produced. Transient; drives the response to the player
/// and nothing else.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundOutcome {
    /// `None` when the round expired without a guess.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
    pub base_points: u64,
    pub bonus_points: u64,
    pub round_points: u64,
    pub streak: u64,
    pub total_score: u64,
    pub finished: bool,
}

/// The player-facing view of a session. Never includes target coordinates.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub current_round: usize,
    pub rounds_total: usize,
    pub countdown_seconds: u64,
    pub score: u64,
    pub streak: u64,
    pub finished: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionView>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    pub image_url: String,
    pub hint: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum GuessError {
    #[error("no such game")]
    GameNotFound,
    #[error("the game is already finished")]
    GameAlreadyFinished,
}
