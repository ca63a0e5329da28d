use crate::game::consts::ROUNDS_PER_GAME;
use crate::storage::interface::{ISubmissionStorage, SubmissionRepo};
use crate::submissions::models::Submission;
use rand::Rng;
use thiserror::Error;

/// Draws the question list for one game: a uniform sample of
/// [`ROUNDS_PER_GAME`] distinct approved submissions, in sampled order.
pub async fn select_questions<SS>(submissions: &SS) -> Result<Vec<Submission>, SelectionError>
where
    SS: ISubmissionStorage,
{
    let mut eligible_ids = submissions.approved_ids().await;
    if eligible_ids.len() < ROUNDS_PER_GAME {
        return Err(SelectionError::InsufficientContent {
            available: eligible_ids.len(),
        });
    }
    shuffle(&mut eligible_ids, &mut rand::thread_rng());
    eligible_ids.truncate(ROUNDS_PER_GAME);
    let questions = submissions.get_ordered(&eligible_ids).await;
    // A submission deleted between the two reads must not yield a short
    // game.
    if questions.len() < ROUNDS_PER_GAME {
        return Err(SelectionError::InsufficientContent {
            available: questions.len(),
        });
    }
    Ok(questions)
}

/// In-place Fisher-Yates. Taking a prefix of the result is an unbiased
/// sample without replacement, which a `random() < k/n` filter is not.
pub fn shuffle<T>(items: &mut [T], rng: &mut impl Rng) {
    for current in (1..items.len()).rev() {
        let chosen = rng.gen_range(0..=current);
        items.swap(current, chosen);
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SelectionError {
    #[error("only {available} approved submissions exist, {ROUNDS_PER_GAME} are needed")]
    InsufficientContent { available: usize },
}
