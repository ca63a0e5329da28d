use crate::auth::extractors::User;
use crate::auth::responses::DecodePasscodeResponse;
use axum::response::Json;

#[axum::debug_handler]
pub async fn decode_passcode(user: User) -> Json<DecodePasscodeResponse> {
    Json(DecodePasscodeResponse {
        error: false,
        public_id: user.public_id,
        is_admin: user.is_admin,
    })
}
