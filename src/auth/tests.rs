use crate::auth::responses::{
    DecodePasscodeResponse, PasscodeExtractionError, PasscodeExtractionReason,
};
use crate::http::tests::{admin_passcode, player_passcode, test_server};

#[tokio::test]
async fn test_decode_good_passcode() {
    let server = test_server();

    let response = server
        .get("/auth/passcode/decode")
        .add_header("Passcode", player_passcode("testPublicId"))
        .await;

    response.assert_status_ok();
    response.assert_json(&DecodePasscodeResponse {
        error: false,
        public_id: String::from("testPublicId"),
        is_admin: false,
    });
}

#[tokio::test]
async fn test_decode_admin_passcode() {
    let server = test_server();

    let response = server
        .get("/auth/passcode/decode")
        .add_header("Passcode", admin_passcode("testAdminId"))
        .await;

    response.assert_status_ok();
    response.assert_json(&DecodePasscodeResponse {
        error: false,
        public_id: String::from("testAdminId"),
        is_admin: true,
    });
}

#[tokio::test]
async fn test_decode_bad_passcode() {
    let server = test_server();

    let response = server
        .get("/auth/passcode/decode")
        .add_header("Passcode", "notReallyAPasscode")
        .await;

    response.assert_status_unauthorized();
    response.assert_json(&PasscodeExtractionError {
        error: true,
        reason: PasscodeExtractionReason::InvalidPasscode,
    });
}

#[tokio::test]
async fn test_decode_missing_passcode() {
    let server = test_server();

    let response = server.get("/auth/passcode/decode").await;

    response.assert_status_unauthorized();
    response.assert_json(&PasscodeExtractionError {
        error: true,
        reason: PasscodeExtractionReason::NoPasscodeHeaderProvided,
    });
}
