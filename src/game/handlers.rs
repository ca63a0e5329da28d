use crate::app_context::AppContext;
use crate::auth::extractors::User;
use crate::game::models::GuessError;
use crate::game::requests::SubmitGuessRequest;
use crate::game::responses::{
    GameAccessError, GameStartError, GameStateResponse, GuessSubmissionError, LeaveGameResponse,
    ReportQuestionResponse, StartGameResponse, SubmitGuessResponse,
};
use crate::game::selector::{self, SelectionError};
use crate::map::models::LatLng;
use crate::storage::interface::{ISubmissionStorage, ReportRepo, ScoreRepo};
use axum::extract::{Path, State};
use axum::response::Json;

pub async fn start<SS>(
    user: User,
    State(app_context): State<AppContext<SS>>,
) -> Json<StartGameResponse>
where
    SS: ISubmissionStorage,
{
    match selector::select_questions(&app_context.submissions).await {
        Ok(questions) => {
            let (game_id, snapshot) = app_context
                .games
                .create(questions, user.public_id.clone(), app_context.scores.clone())
                .await;
            tracing::info!(
                player = %user.public_id,
                game_id = %game_id,
                "Started a game.",
            );
            Json(StartGameResponse {
                error: false,
                error_code: None,
                game_id: Some(game_id),
                game: Some(snapshot),
            })
        }
        Err(err @ SelectionError::InsufficientContent { .. }) => {
            tracing::warn!(player = %user.public_id, "Refused to start a game: {err}.");
            Json(StartGameResponse {
                error: true,
                error_code: Some(GameStartError::InsufficientContent),
                game_id: None,
                game: None,
            })
        }
    }
}

pub async fn state<SS>(
    user: User,
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<SS>>,
) -> Json<GameStateResponse>
where
    SS: ISubmissionStorage,
{
    match app_context.games.snapshot(&game_id, &user.public_id).await {
        Some(snapshot) => Json(GameStateResponse {
            error: false,
            error_code: None,
            game: Some(snapshot),
        }),
        None => Json(GameStateResponse {
            error: true,
            error_code: Some(GameAccessError::GameNotFound),
            game: None,
        }),
    }
}

pub async fn submit_guess<SS>(
    user: User,
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<SS>>,
    Json(request): Json<SubmitGuessRequest>,
) -> Json<SubmitGuessResponse>
where
    SS: ISubmissionStorage,
{
    let guess = match request.guess.parse::<LatLng>() {
        Ok(guess) => guess,
        Err(err) => {
            tracing::warn!(player = %user.public_id, "Rejected a guess: {err}.");
            return Json(SubmitGuessResponse {
                error: true,
                error_code: Some(GuessSubmissionError::InvalidCoordinate),
                outcome: None,
            });
        }
    };
    match app_context
        .games
        .submit_guess(&game_id, &user.public_id, guess)
        .await
    {
        Ok(outcome) => {
            if outcome.finished {
                app_context
                    .scores
                    .save(&user.public_id, outcome.total_score)
                    .await;
                tracing::info!(
                    player = %user.public_id,
                    game_id = %game_id,
                    final_score = outcome.total_score,
                    "Game finished.",
                );
            }
            Json(SubmitGuessResponse {
                error: false,
                error_code: None,
                outcome: Some(outcome),
            })
        }
        Err(GuessError::GameNotFound) => Json(SubmitGuessResponse {
            error: true,
            error_code: Some(GuessSubmissionError::GameNotFound),
            outcome: None,
        }),
        Err(GuessError::GameAlreadyFinished) => Json(SubmitGuessResponse {
            error: true,
            error_code: Some(GuessSubmissionError::GameAlreadyFinished),
            outcome: None,
        }),
    }
}

/// Reporting is best-effort: the report is dispatched in the background and
/// its failure never affects the session.
pub async fn report<SS>(
    user: User,
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<SS>>,
) -> Json<ReportQuestionResponse>
where
    SS: ISubmissionStorage,
{
    let submission_id = match app_context
        .games
        .current_submission_id(&game_id, &user.public_id)
        .await
    {
        Ok(submission_id) => submission_id,
        Err(GuessError::GameNotFound) => {
            return Json(ReportQuestionResponse {
                error: true,
                error_code: Some(GuessSubmissionError::GameNotFound),
            });
        }
        Err(GuessError::GameAlreadyFinished) => {
            return Json(ReportQuestionResponse {
                error: true,
                error_code: Some(GuessSubmissionError::GameAlreadyFinished),
            });
        }
    };
    let submissions = app_context.submissions.clone();
    let reporter = user.public_id;
    tokio::spawn(async move {
        if let Err(err) = submissions.report(submission_id, &reporter).await {
            tracing::error!(
                submission_id,
                reporter = %reporter,
                "Failed to deliver a report: {err}.",
            );
        }
    });
    Json(ReportQuestionResponse {
        error: false,
        error_code: None,
    })
}

pub async fn leave<SS>(
    user: User,
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<SS>>,
) -> Json<LeaveGameResponse>
where
    SS: ISubmissionStorage,
{
    if !app_context.games.remove(&game_id, &user.public_id).await {
        return Json(LeaveGameResponse {
            error: true,
            error_code: Some(GameAccessError::GameNotFound),
        });
    }
    tracing::info!(player = %user.public_id, game_id = %game_id, "Player left a game.");
    Json(LeaveGameResponse {
        error: false,
        error_code: None,
    })
}
