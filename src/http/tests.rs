use crate::app_context::AppContext;
use crate::auth;
use crate::auth::passcode::{self, JwtPayload};
use crate::cli::tests::fake_args;
use crate::http::router;
use crate::map::models::LatLng;
use crate::storage::interface::{ModerationRepo, SubmissionRepo};
use crate::storage::submissions::HashMapSubmissionsStorage;
use crate::submissions::models::{ModerationStatus, Submission};
use axum_test::TestServer;

pub fn test_server() -> TestServer {
    test_server_with_context(AppContext::default())
}

pub fn test_server_with_context(app_context: AppContext<HashMapSubmissionsStorage>) -> TestServer {
    let args = fake_args();
    auth::init(&args);
    let router = router::new(&args, app_context);
    TestServer::new(router).expect("Failed to run test server.")
}

pub fn player_passcode(public_id: &str) -> String {
    passcode_with_role(public_id, false)
}

pub fn admin_passcode(public_id: &str) -> String {
    passcode_with_role(public_id, true)
}

fn passcode_with_role(public_id: &str, is_admin: bool) -> String {
    auth::init(&fake_args());
    passcode::encode(&JwtPayload {
        public_id: public_id.to_string(),
        private_id: format!("{public_id}Private"),
        is_admin,
    })
}

/// The location every seeded submission points at.
pub const SEEDED_LOCATION: &str = "21.3008, -157.8175";

/// An app context whose submissions store already holds `count` approved
/// submissions, all targeting [`SEEDED_LOCATION`].
pub async fn context_with_approved_submissions(
    count: usize,
) -> AppContext<HashMapSubmissionsStorage> {
    let app_context = AppContext::<HashMapSubmissionsStorage>::default();
    for index in 0..count {
        let location = SEEDED_LOCATION
            .parse::<LatLng>()
            .expect("Seeded location should be valid.");
        let submission = Submission::new(
            format!("https://images.test/campus-{index}.jpg"),
            format!("Campus spot #{index}"),
            location,
            String::from("seeder"),
        );
        let submission_id = app_context.submissions.create(submission).await;
        app_context
            .submissions
            .set_status(submission_id, ModerationStatus::Approved)
            .await;
    }
    app_context
}
