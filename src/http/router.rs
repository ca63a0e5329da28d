use crate::app_context::AppContext;
use crate::cli::Args;
use crate::http::cors;
use crate::storage::submissions::HashMapSubmissionsStorage;
use crate::{auth, game, health, scores, submissions};
use axum::routing::{get, patch, post};
use axum::Router;

pub fn new(args: &Args, app_context: AppContext<HashMapSubmissionsStorage>) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let auth_routes = Router::new().route("/passcode/decode", get(auth::handlers::decode_passcode));
    let submissions_routes = Router::new().route("/", post(submissions::handlers::create));
    let admin_routes = Router::new()
        .route("/submissions", get(submissions::handlers::list))
        .route(
            "/submissions/:submission-id",
            patch(submissions::handlers::moderate).delete(submissions::handlers::delete),
        )
        .route(
            "/submissions/:submission-id/clear-reports",
            post(submissions::handlers::clear_reports),
        );
    let games_routes = Router::new()
        .route("/", post(game::handlers::start))
        .route("/:game-id", get(game::handlers::state))
        .route("/:game-id/submit-guess", post(game::handlers::submit_guess))
        .route("/:game-id/report", post(game::handlers::report))
        .route("/:game-id/leave", post(game::handlers::leave));
    let leaderboard_routes = Router::new().route("/", get(scores::handlers::leaderboard));

    Router::new()
        .nest("/health", health_routes)
        .nest("/auth", auth_routes)
        .nest("/submissions", submissions_routes)
        .nest("/admin", admin_routes)
        .nest("/games", games_routes)
        .nest("/leaderboard", leaderboard_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(crate::http::middleware::tracing))
}
