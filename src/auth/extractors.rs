use crate::auth::passcode;
use crate::auth::responses::{PasscodeExtractionError, PasscodeExtractionReason};
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::Json;

pub struct User {
    pub public_id: String,
    pub private_id: String,
    pub is_admin: bool,
}

#[async_trait]
impl<S> FromRequestParts<S> for User
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<PasscodeExtractionError>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(passcode) = parts.headers.get("Passcode") else {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(PasscodeExtractionError {
                    error: true,
                    reason: PasscodeExtractionReason::NoPasscodeHeaderProvided,
                }),
            ));
        };
        let Ok(raw_passcode) = passcode.to_str() else {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(PasscodeExtractionError {
                    error: true,
                    reason: PasscodeExtractionReason::InvalidPasscode,
                }),
            ));
        };
        match passcode::decode(raw_passcode) {
            Ok(jwt_payload) => Ok(User {
                public_id: jwt_payload.public_id,
                private_id: jwt_payload.private_id,
                is_admin: jwt_payload.is_admin,
            }),
            Err(_) => Err((
                StatusCode::UNAUTHORIZED,
                Json(PasscodeExtractionError {
                    error: true,
                    reason: PasscodeExtractionReason::InvalidPasscode,
                }),
            )),
        }
    }
}
